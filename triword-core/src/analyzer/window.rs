//! Word window extraction module.
//!
//! Provides extraction of three-token sequences from a token stream.
//! Windows are the unit the tally counts.

use triword_types::{WINDOW_SEPARATOR, WINDOW_SIZE};

/// Extracts windows from a token sequence using a sliding frame.
///
/// For fewer than 3 tokens, no windows are emitted.
/// For N tokens, exactly N-2 windows are emitted.
///
/// # Example
///
/// ```
/// use triword_core::analyzer::window::extract_windows;
///
/// let mut windows = Vec::new();
/// extract_windows(&["a", "b", "c", "d"], |w| windows.push(w.join(" ")));
///
/// assert_eq!(windows, ["a b c", "b c d"]);
/// ```
#[inline(always)]
pub fn extract_windows<S, F>(tokens: &[S], mut callback: F)
where
    F: FnMut(&[S]),
{
    if tokens.len() < WINDOW_SIZE {
        return;
    }

    for window in tokens.windows(WINDOW_SIZE) {
        callback(window);
    }
}

/// Counts windows without extracting them.
///
/// Returns 0 for fewer than 3 tokens.
#[inline(always)]
pub const fn count_windows(tokens: usize) -> usize {
    tokens.saturating_sub(WINDOW_SIZE - 1)
}

/// Writes the space-joined key for `parts` into `buf`.
///
/// Clears the buffer first so one allocation can serve every window.
#[inline]
pub fn join_window<S: AsRef<str>>(parts: &[S], buf: &mut String) {
    buf.clear();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            buf.push(WINDOW_SEPARATOR);
        }
        buf.push_str(part.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(tokens: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        let mut buf = String::new();
        extract_windows(tokens, |w| {
            join_window(w, &mut buf);
            out.push(buf.clone());
        });
        out
    }

    #[test]
    fn extract_basic() {
        assert_eq!(
            windows(&["the", "pale", "usher", "in", "coat"]),
            ["the pale usher", "pale usher in", "usher in coat"]
        );
    }

    #[test]
    fn extract_short_input() {
        assert!(windows(&[]).is_empty());
        assert!(windows(&["a"]).is_empty());
        assert!(windows(&["a", "b"]).is_empty());
    }

    #[test]
    fn extract_exactly_three() {
        assert_eq!(windows(&["i", "love", "sandwiches"]), ["i love sandwiches"]);
    }

    #[test]
    fn repeats_are_not_deduplicated() {
        let out = windows(&["ay", "ay", "ay", "ay"]);
        assert_eq!(out, ["ay ay ay", "ay ay ay"]);
    }

    #[test]
    fn count_basic() {
        assert_eq!(count_windows(0), 0);
        assert_eq!(count_windows(2), 0);
        assert_eq!(count_windows(3), 1);
        assert_eq!(count_windows(5), 3);
    }

    #[test]
    fn count_agrees_with_extract() {
        let tokens: Vec<String> = (0..17).map(|i| format!("w{i}")).collect();
        let mut n = 0usize;
        extract_windows(&tokens, |_| n += 1);
        assert_eq!(n, count_windows(tokens.len()));
    }

    #[test]
    fn join_reuses_buffer() {
        let mut buf = String::from("stale contents");
        join_window(&["a", "b", "c"], &mut buf);
        assert_eq!(buf, "a b c");
    }
}
