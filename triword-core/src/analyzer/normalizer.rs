use regex::Regex;
use std::sync::OnceLock;

/// Output byte for every ASCII input byte.
///
/// Word characters map to their lowercase form, whitespace maps to a
/// single space, and everything else maps to `0` (removed). Removal never
/// inserts a separator, so `"usher--threadbare"` fuses into one word.
const ASCII_FOLD: [u8; 128] = build_ascii_fold();

const DROP: u8 = 0;

const fn build_ascii_fold() -> [u8; 128] {
    let mut table = [DROP; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        table[i] = if b.is_ascii_alphanumeric() || b == b'_' {
            b.to_ascii_lowercase()
        } else if is_ascii_ws(b) {
            b' '
        } else {
            DROP
        };
        i += 1;
    }
    table
}

/// ASCII whitespace: tab through carriage return, the four information
/// separators (0x1C-0x1F) and space.
///
/// Unlike `u8::is_ascii_whitespace`, this includes 0x0B and 0x1C-0x1F.
#[inline(always)]
const fn is_ascii_ws(b: u8) -> bool {
    matches!(b, b'\t'..=b'\r' | 0x1C..=0x1F | b' ')
}

/// Whitespace: Unicode `White_Space` plus the information separators.
#[inline]
fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

/// Anything that is neither whitespace nor a word character. Word
/// characters are letters, numbers (`Nd`, `Nl`, `No`) and `_`; combining
/// marks, joiners and connector punctuation other than `_` are removed.
const NON_WORD_PATTERN: &str = r"[^\p{L}\p{N}_\s\x1C-\x1F]";

static NON_WORD: OnceLock<Regex> = OnceLock::new();

fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(NON_WORD_PATTERN).expect("valid regex"))
}

/// Line normalizer feeding the tokenizer.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Deletes every character that is neither a word character nor
///   whitespace, without leaving a gap behind
/// - Collapses whitespace runs into single ASCII spaces
/// - Removes leading/trailing whitespace
///
/// A word character is a letter, a number or `_`. Whitespace is Unicode
/// `White_Space` plus the ASCII information separators 0x1C-0x1F.
///
/// # Performance
///
/// Pure ASCII lines go through a single table-driven byte loop. Lines
/// containing any non-ASCII character fall back to the compiled
/// non-word regex.
///
/// # Examples
///
/// ```
/// use triword_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  What's  THAT?! "), "whats that");
/// assert_eq!(normalizer.normalize("pale Usher--threadbare"), "pale usherthreadbare");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    non_word: &'static Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Creates a new normalizer.
    pub fn new() -> Self {
        Self {
            non_word: non_word(),
        }
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        if input.is_ascii() {
            fold_ascii(input.as_bytes(), out);
        } else {
            self.fold_unicode(input, out);
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    fn fold_unicode(&self, input: &str, out: &mut String) {
        let lowered = input.to_lowercase();
        let stripped = self.non_word.replace_all(&lowered, "");

        out.reserve(stripped.len());
        for word in stripped.split(is_space).filter(|w| !w.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
}

#[inline]
fn fold_ascii(bytes: &[u8], out: &mut String) {
    out.reserve(bytes.len());

    let mut pending_space = false;
    for &b in bytes {
        let folded = ASCII_FOLD[b as usize];
        match folded {
            DROP => {}
            b' ' => pending_space = !out.is_empty(),
            _ => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(folded as char);
            }
        }
    }
}
