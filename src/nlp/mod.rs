//! Natural language processing components.
//!
//! This module provides the tokenizer/segmenter capability interface, a
//! built-in Unicode adapter, and stopword filtering.

pub mod stopwords;
pub mod tokenizer;

use crate::types::Token;

/// Build the filtered token stream consumed by frequency analysis.
///
/// Keeps tokens that are neither stopwords nor punctuation, drops newline
/// markers and pure-whitespace tokens, and lowercases each surviving
/// surface form. The result preserves input order and may contain
/// duplicates — frequency analysis counts a multiset.
pub fn content_words(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| {
            !t.is_stopword
                && !t.is_punctuation
                && !t.text.contains('\n')
                && !t.text.trim().is_empty()
        })
        .map(|t| t.text.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_words_filters_flags() {
        let tokens = vec![
            Token::word("Machine"),
            Token::new("is", true, false),
            Token::new(".", false, true),
            Token::word("learning"),
        ];
        assert_eq!(content_words(&tokens), vec!["machine", "learning"]);
    }

    #[test]
    fn test_content_words_drops_newline_markers() {
        let tokens = vec![
            Token::word("alpha"),
            Token::word("\n"),
            Token::word("\n\n"),
            Token::word("beta"),
        ];
        assert_eq!(content_words(&tokens), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_content_words_lowercases() {
        let tokens = vec![Token::word("Germany"), Token::word("GERMANY")];
        assert_eq!(content_words(&tokens), vec!["germany", "germany"]);
    }

    #[test]
    fn test_content_words_empty_input() {
        assert!(content_words(&[]).is_empty());
    }
}
