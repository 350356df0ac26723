//! Tokenizer/segmenter capability interface and the built-in Unicode adapter.
//!
//! The core never depends on a toolkit's internal token representation —
//! only on this trait. Any natural-language toolkit can be plugged in by
//! implementing [`Tokenizer`] over its own output.

use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Sentence, Token};

/// Tokenization and sentence segmentation capability.
///
/// # Contract
///
/// - `tokenize` returns, for any text span, an ordered sequence of tokens
///   each exposing surface text, a stopword flag, and a punctuation flag.
/// - `segment` returns the document's sentences in order, each with its
///   verbatim surface text and a stable 0-based `index`.
/// - Both are pure: identical input text yields identical output.
pub trait Tokenizer {
    /// Split a text span into tagged tokens.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Split a document into sentences in document order.
    fn segment(&self, text: &str) -> Vec<Sentence>;
}

/// Built-in adapter backed by Unicode word and sentence boundaries.
///
/// Word tokens follow UAX #29 word boundaries; a token with no alphanumeric
/// character is classified as punctuation. Stopword classification comes
/// from a [`StopwordFilter`].
#[derive(Debug, Clone)]
pub struct UnicodeTokenizer {
    stopwords: StopwordFilter,
}

impl Default for UnicodeTokenizer {
    fn default() -> Self {
        Self::new("en")
    }
}

impl UnicodeTokenizer {
    /// Create an adapter with the stopword list for `language`.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: StopwordFilter::new(language),
        }
    }

    /// Create an adapter with a custom stopword filter.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_word_bounds()
            .filter(|piece| !piece.trim().is_empty())
            .map(|piece| {
                let is_punctuation = !piece.chars().any(|c| c.is_alphanumeric());
                let is_stopword = !is_punctuation && self.stopwords.is_stopword(piece);
                Token::new(piece, is_stopword, is_punctuation)
            })
            .collect()
    }

    fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        for (offset, raw) in text.split_sentence_bound_indices() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let leading = raw.len() - raw.trim_start().len();
            let start = offset + leading;
            sentences.push(Sentence::new(trimmed, sentences.len(), start, start + trimmed.len()));
        }
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_tags_words_and_punctuation() {
        let tok = UnicodeTokenizer::default();
        let tokens = tok.tokenize("The war ended.");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["The", "war", "ended", "."]);

        assert!(tokens[0].is_stopword);
        assert!(!tokens[1].is_stopword);
        assert!(tokens[3].is_punctuation);
    }

    #[test]
    fn test_tokenize_skips_whitespace() {
        let tok = UnicodeTokenizer::default();
        let tokens = tok.tokenize("one\n\ntwo   three");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_segment_assigns_stable_indices() {
        let tok = UnicodeTokenizer::default();
        let sentences = tok.segment("First sentence. Second sentence! Third?");

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "First sentence.");
        assert_eq!(sentences[1].text, "Second sentence!");
        assert_eq!(sentences[2].text, "Third?");
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_segment_spans_point_into_source() {
        let text = "Alpha beta.  Gamma delta.";
        let tok = UnicodeTokenizer::default();
        let sentences = tok.segment(text);

        assert_eq!(sentences.len(), 2);
        for s in &sentences {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_segment_empty_text() {
        let tok = UnicodeTokenizer::default();
        assert!(tok.segment("").is_empty());
        assert!(tok.segment("   \n  ").is_empty());
    }

    #[test]
    fn test_custom_stopword_filter() {
        let tok = UnicodeTokenizer::with_stopwords(StopwordFilter::from_list(&["war"]));
        let tokens = tok.tokenize("war peace");
        assert!(tokens[0].is_stopword);
        assert!(!tokens[1].is_stopword);
    }
}
