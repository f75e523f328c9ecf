use plot_logging::plot_debug;

use crate::random::RandomSource;
use crate::summary::{summarize, SummaryError};
use crate::token::Tokenizer;
use crate::types::Summary;

/// Request-scoped result of tokenizing and summarizing one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub sentence: String,
    pub tokens: Vec<String>,
    pub summary: Result<Summary, SummaryError>,
}

impl Analysis {
    /// Tokens joined for display, e.g. `"The, quick, fox"`.
    pub fn joined_tokens(&self) -> String {
        self.tokens.join(", ")
    }
}

/// Pure pipeline: tokenizer output feeds the summarizer.
pub fn analyze(
    sentence: &str,
    tokenizer: &dyn Tokenizer,
    random: &mut dyn RandomSource,
) -> Analysis {
    let tokens = tokenizer.tokenize(sentence);
    plot_debug!(
        "tokenized sentence of {} bytes into {} tokens",
        sentence.len(),
        tokens.len()
    );
    let summary = summarize(&tokens, random);
    Analysis {
        sentence: sentence.to_string(),
        tokens,
        summary,
    }
}
