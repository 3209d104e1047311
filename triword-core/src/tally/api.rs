//! Public API for feeding text into the tally.

use crate::analyzer::window::{extract_windows, join_window};
use crate::tally::types::{FrequencyMap, WindowTally, CARRY_LEN};

impl WindowTally {
    /// Normalizes and tokenizes one line, then folds every window that
    /// became complete into the counts.
    ///
    /// Tokens continue the current source's stream: the last two tokens
    /// of the previous line still lead windows here.
    pub fn feed_line(&mut self, line: &str) {
        self.pending.clear();
        self.pending.extend(self.carry.drain(..));

        let added = self.analyzer.analyze_into(line, &mut self.pending);
        self.lines += 1;
        self.tokens += added as u64;

        self.fold_pending();
    }

    /// Folds already-tokenized input into the current source's stream.
    pub fn feed_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) {
        self.pending.clear();
        self.pending.extend(self.carry.drain(..));
        self.pending
            .extend(tokens.iter().map(|t| t.as_ref().to_owned()));
        self.tokens += tokens.len() as u64;

        self.fold_pending();
    }

    /// Ends the current source. The next token starts a fresh stream.
    pub fn end_source(&mut self) {
        self.carry.clear();
        self.pending.clear();
        self.sources += 1;
    }

    fn fold_pending(&mut self) {
        let Self {
            counts,
            carry,
            pending,
            key_buf,
            windows,
            ..
        } = self;

        extract_windows(pending.as_slice(), |window| {
            join_window(window, key_buf);
            bump(counts, key_buf);
            *windows += 1;
        });

        let keep_from = pending.len().saturating_sub(CARRY_LEN);
        carry.extend(pending.drain(keep_from..));
    }
}

/// Increments `key`, inserting it with count 1 if absent.
#[inline]
fn bump(counts: &mut FrequencyMap, key: &str) {
    match counts.get_mut(key) {
        Some(count) => *count = count.saturating_add(1),
        None => {
            counts.insert(key.into(), 1);
        }
    }
}
