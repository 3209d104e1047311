//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lowercases a line and strips everything but words and whitespace
//! - **Tokenizer**: Splits normalized text into tokens
//! - **Window**: Extracts three-token sequences for counting

pub mod normalizer;
pub mod tokenizer;
pub mod window;

pub use normalizer::TextNormalizer;
pub use tokenizer::Tokenizer;

/// Normalizer and tokenizer sharing one scratch buffer.
///
/// Appends tokens into a caller-supplied accumulator, so a source can be
/// analyzed one line at a time into a single token stream.
#[derive(Debug, Default)]
pub struct LineAnalyzer {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
    norm_buf: String,
}

impl LineAnalyzer {
    /// Creates an analyzer with an empty scratch buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `line` and appends its tokens to `tokens`.
    ///
    /// Returns the number of tokens appended.
    pub fn analyze_into<E>(&mut self, line: &str, tokens: &mut E) -> usize
    where
        E: Extend<String>,
    {
        self.normalizer.normalize_into(line, &mut self.norm_buf);

        let mut added = 0usize;
        self.tokenizer.tokenize(&self.norm_buf, |text, _| {
            tokens.extend(std::iter::once(text.to_owned()));
            added += 1;
        });
        added
    }

    /// Normalizes and tokenizes `line` into a fresh vector.
    pub fn analyze(&mut self, line: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        self.analyze_into(line, &mut tokens);
        tokens
    }
}

/// Tokenizes a single piece of text.
///
/// ```
/// use triword_core::analyzer::tokenize;
///
/// assert_eq!(tokenize("I love\nsandwiches"), ["i", "love", "sandwiches"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    LineAnalyzer::new().analyze(text)
}
