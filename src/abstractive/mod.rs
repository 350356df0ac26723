//! Abstractive generation contract.
//!
//! The core pipeline never calls into generation — an abstractive summary
//! is an alternate summary source consumed independently, and its output is
//! just another candidate string for downstream evaluation. This module
//! fixes the boundary: a generator is handed the full document text and two
//! length bounds and returns a single summary string.
//!
//! Model lifecycle belongs to the implementor: construct the generator from
//! an explicitly loaded model resource and release it on drop. Nothing here
//! may rely on ambient process-wide model state.

/// Length bounds for a generated summary, measured in generated tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationBounds {
    /// Minimum number of generated tokens.
    pub min_length: usize,
    /// Maximum number of generated tokens.
    pub max_length: usize,
}

impl GenerationBounds {
    /// Create bounds. Callers validate ordering through the spec
    /// validation layer; the contract itself does not reject inputs.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for GenerationBounds {
    fn default() -> Self {
        Self {
            min_length: 30,
            max_length: 120,
        }
    }
}

/// An external pretrained sequence-generation model.
///
/// Implementors own their model resource explicitly — loaded in a
/// constructor, dropped with the value — and expose nothing about its
/// internals beyond the returned summary string.
pub trait AbstractiveGenerator {
    /// Identifier of the underlying model, for logs and reports.
    const MODEL: &'static str;

    type Error;

    /// Generate a summary of `document` within `bounds`.
    fn generate(&self, document: &str, bounds: GenerationBounds) -> Result<String, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Canned generator that records the documents it was handed.
    struct MockGenerator {
        summary: String,
        calls: Mutex<Vec<(String, GenerationBounds)>>,
        fail_with: Option<String>,
    }

    impl MockGenerator {
        fn new(summary: &str) -> Self {
            Self {
                summary: summary.to_string(),
                calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                summary: String::new(),
                calls: Mutex::new(Vec::new()),
                fail_with: Some(msg.to_string()),
            }
        }
    }

    impl AbstractiveGenerator for MockGenerator {
        const MODEL: &'static str = "mock-seq2seq";
        type Error = String;

        fn generate(
            &self,
            document: &str,
            bounds: GenerationBounds,
        ) -> Result<String, Self::Error> {
            self.calls
                .lock()
                .unwrap()
                .push((document.to_string(), bounds));
            if let Some(msg) = &self.fail_with {
                return Err(msg.clone());
            }
            Ok(self.summary.clone())
        }
    }

    #[test]
    fn test_generator_receives_document_and_bounds() {
        let generator = MockGenerator::new("A short summary.");
        let bounds = GenerationBounds::new(10, 40);

        let summary = generator.generate("Full document text.", bounds).unwrap();

        assert_eq!(summary, "A short summary.");
        let calls = generator.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Full document text.");
        assert_eq!(calls[0].1, bounds);
    }

    #[test]
    fn test_generator_errors_propagate() {
        let generator = MockGenerator::failing("model unavailable");
        let err = generator
            .generate("doc", GenerationBounds::default())
            .unwrap_err();
        assert_eq!(err, "model unavailable");
    }

    #[test]
    fn test_default_bounds() {
        let bounds = GenerationBounds::default();
        assert!(bounds.min_length < bounds.max_length);
    }
}
