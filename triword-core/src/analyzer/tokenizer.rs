//! Streaming Tokenizer Module
//!
//! Splits normalized text into word tokens. It is the second stage of the
//! analysis pipeline, taking the single-spaced output of
//! [`TextNormalizer`](super::TextNormalizer) and emitting each word with its
//! position in the line:
//!
//! ```ignore
//! ("call", 0)
//! ("me", 1)
//! ("ishmael", 2)
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the input string
//! - **Streaming**: Tokens are emitted through a callback
//! - **Fast**: A memchr scan for ASCII space (0x20)
//!
//! ## The Input Contract
//!
//! The tokenizer expects **pre-normalized** input:
//! - Only word characters and single ASCII spaces
//! - No leading or trailing whitespace
//! - No consecutive spaces between words
//!
//! Under that contract, splitting on spaces yields exactly the maximal
//! word-character runs of the line. Violations panic in debug builds.

use core::str;
use memchr::memchr_iter;

/// Streaming tokenizer - splits normalized text into tokens.
///
/// ## Example
///
/// ```
/// use triword_core::analyzer::Tokenizer;
///
/// let mut count = 0;
/// Tokenizer::new().tokenize("i love sandwiches", |_text, _pos| {
///     count += 1;
/// });
///
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(text, position)`.
    ///
    /// Every token is emitted; positions count from zero.
    #[inline(always)]
    #[allow(clippy::needless_lifetimes)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, usize),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace — normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace — normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces — normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0usize;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `normalized` is valid UTF-8. We split only on ASCII space (0x20),
                // which is never a continuation byte, so `bytes[start..i]` is always a
                // valid UTF-8 subslice.
                let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(text, pos);
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(text, pos);
        }
    }

    /// Counts the tokens of normalized input without emitting them.
    #[inline]
    pub fn count(&self, normalized: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(normalized, |_, _| n += 1);
        n
    }
}
