//! Phishing model trait

use phishguard_core::Label;

/// A binary phishing classifier.
///
/// Any statistical or rule-based model satisfying this contract can back
/// the scorer. Implementations must be immutable after construction so one
/// instance can be shared across concurrent requests.
pub trait PhishingModel: Send + Sync {
    /// Probability (0.0-1.0) that the text is phishing
    fn probability(&self, text: &str) -> f64;

    /// Predicted label for the text
    fn predict(&self, text: &str) -> Label {
        if self.probability(text) >= 0.5 {
            Label::Phishing
        } else {
            Label::Safe
        }
    }

    /// Get the model name
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl PhishingModel for Fixed {
        fn probability(&self, _text: &str) -> f64 {
            self.0
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_default_predict_uses_half_cutoff() {
        assert_eq!(Fixed(0.49).predict("x"), Label::Safe);
        assert_eq!(Fixed(0.5).predict("x"), Label::Phishing);
        assert_eq!(Fixed(0.93).predict("x"), Label::Phishing);
    }
}
