//! Core data types shared across pipeline stages.

/// A single token produced by a [`Tokenizer`](crate::nlp::tokenizer::Tokenizer)
/// implementation.
///
/// Tokens are produced once per pipeline run and are immutable afterwards.
/// The two flags drive content-word filtering before frequency analysis;
/// the scorer ignores them and looks up every token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw surface form, exactly as it appears in the source text.
    pub text: String,
    /// Whether the token is a stopword in the adapter's language.
    pub is_stopword: bool,
    /// Whether the token consists entirely of punctuation.
    pub is_punctuation: bool,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, is_stopword: bool, is_punctuation: bool) -> Self {
        Self {
            text: text.into(),
            is_stopword,
            is_punctuation,
        }
    }

    /// Create a content word (neither stopword nor punctuation).
    pub fn word(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }
}

/// An ordered span of the original document, produced by sentence
/// segmentation.
///
/// `index` is the sentence's 0-based rank in document order and is its
/// stable identity throughout scoring and selection — two sentences with
/// identical surface text never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Verbatim surface text.
    pub text: String,
    /// 0-based rank among all sentences as segmented.
    pub index: usize,
    /// Byte offset of the sentence start in the source document.
    pub start: usize,
    /// Byte offset one past the sentence end.
    pub end: usize,
}

impl Sentence {
    /// Create a new sentence span.
    pub fn new(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
            end,
        }
    }
}

/// Runtime configuration for the extractive pipeline.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Language code for the built-in stopword lists (e.g. "en", "de").
    pub language: String,
    /// Number of sentences to select.
    pub num_sentences: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            num_sentences: 3,
        }
    }
}

impl SummaryConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stopword language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the number of sentences to select.
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_constructors() {
        let t = Token::word("machine");
        assert_eq!(t.text, "machine");
        assert!(!t.is_stopword);
        assert!(!t.is_punctuation);

        let p = Token::new(".", false, true);
        assert!(p.is_punctuation);
    }

    #[test]
    fn test_sentence_identity_is_index() {
        let a = Sentence::new("Same text.", 0, 0, 10);
        let b = Sentence::new("Same text.", 1, 11, 21);
        assert_eq!(a.text, b.text);
        assert_ne!(a.index, b.index);
    }

    #[test]
    fn test_config_builder() {
        let cfg = SummaryConfig::new()
            .with_language("de")
            .with_num_sentences(5);
        assert_eq!(cfg.language, "de");
        assert_eq!(cfg.num_sentences, 5);
    }

    #[test]
    fn test_config_default() {
        let cfg = SummaryConfig::default();
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.num_sentences, 3);
    }
}
