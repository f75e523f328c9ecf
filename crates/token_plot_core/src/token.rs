use std::fmt;
use std::str::FromStr;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Word tokenizer: every run of characters that are neither alphanumeric nor
/// `_` is a boundary, so `"don't"` yields `["don", "t"]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !is_word_char(c))
            .filter(|word| !word.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Simple, deterministic whitespace tokenizer. Punctuation stays attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(ToOwned::to_owned).collect()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    #[default]
    Word,
    Whitespace,
}

impl TokenizerKind {
    pub fn tokenizer(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Word => Box::new(WordTokenizer),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerKind::Word => write!(f, "word"),
            TokenizerKind::Whitespace => write!(f, "whitespace"),
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Ok(TokenizerKind::Word),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            other => Err(format!("unknown tokenizer {other:?} (expected word or whitespace)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Tokenizer, TokenizerKind, WhitespaceTokenizer, WordTokenizer};

    #[test]
    fn word_tokenizer_drops_punctuation() {
        assert_eq!(
            WordTokenizer.tokenize("Hello, world! How's it going?"),
            vec!["Hello", "world", "How", "s", "it", "going"]
        );
    }

    #[test]
    fn word_tokenizer_keeps_digits_underscores_and_unicode_letters() {
        assert_eq!(
            WordTokenizer.tokenize("snake_case 42 café—naïve"),
            vec!["snake_case", "42", "café", "naïve"]
        );
    }

    #[test]
    fn whitespace_tokenizer_keeps_punctuation_attached() {
        assert_eq!(
            WhitespaceTokenizer.tokenize("  Hello,\tworld!\n"),
            vec!["Hello,", "world!"]
        );
    }

    #[test]
    fn blank_input_yields_no_tokens() {
        for input in ["", "   ", "\n\t", "?!,."] {
            assert!(WordTokenizer.tokenize(input).is_empty(), "input {input:?}");
        }
        assert!(WhitespaceTokenizer.tokenize(" \n ").is_empty());
    }

    #[test]
    fn kind_parses_and_displays() {
        assert_eq!("Word".parse::<TokenizerKind>(), Ok(TokenizerKind::Word));
        assert_eq!(
            " whitespace ".parse::<TokenizerKind>(),
            Ok(TokenizerKind::Whitespace)
        );
        assert!("bpe".parse::<TokenizerKind>().is_err());
        assert_eq!(TokenizerKind::Whitespace.to_string(), "whitespace");
    }

    #[test]
    fn kind_selects_rule_set() {
        let text = "a-b c";
        assert_eq!(TokenizerKind::Word.tokenizer().tokenize(text).len(), 3);
        assert_eq!(TokenizerKind::Whitespace.tokenizer().tokenize(text).len(), 2);
    }
}
