//! Stopword classification.
//!
//! Wraps the `stop-words` crate's language lists behind a small filter type
//! that also supports custom additions and removals.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Classifies words as stopwords for a given language.
///
/// Lookup is case-insensitive; the underlying lists are lowercase.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter for the given language code.
    ///
    /// Recognized codes: en, de, fr, es, it, pt, nl, ru, sv, da, fi, pl, tr
    /// (full English names also accepted). Unknown codes fall back to
    /// English.
    pub fn new(language: &str) -> Self {
        let lang = Self::lookup(language).unwrap_or(LANGUAGE::English);
        Self {
            stopwords: get(lang).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether `language` names one of the bundled stopword lists.
    pub fn is_known_language(language: &str) -> bool {
        Self::lookup(language).is_some()
    }

    fn lookup(language: &str) -> Option<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "pl" | "polish" => LANGUAGE::Polish,
            "tr" | "turkish" => LANGUAGE::Turkish,
            _ => return None,
        };
        Some(lang)
    }

    /// Create a filter that classifies nothing as a stopword.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove words from the filter.
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Whether the given word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter contains no words.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults() {
        let filter = StopwordFilter::default();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("summary"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("xx");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_known_language_lookup() {
        assert!(StopwordFilter::is_known_language("en"));
        assert!(StopwordFilter::is_known_language("German"));
        assert!(StopwordFilter::is_known_language("pt"));
        assert!(!StopwordFilter::is_known_language("xx"));
        assert!(!StopwordFilter::is_known_language(""));
    }

    #[test]
    fn test_german_list() {
        let filter = StopwordFilter::new("de");
        assert!(filter.is_stopword("und"));
        assert!(filter.is_stopword("der"));
        assert!(!filter.is_stopword("zeitung"));
    }

    #[test]
    fn test_custom_list_and_mutation() {
        let mut filter = StopwordFilter::from_list(&["foo", "BAR"]);
        assert!(filter.is_stopword("foo"));
        assert!(filter.is_stopword("bar"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["baz"]);
        assert!(filter.is_stopword("baz"));

        filter.remove_stopwords(&["foo"]);
        assert!(!filter.is_stopword("foo"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
