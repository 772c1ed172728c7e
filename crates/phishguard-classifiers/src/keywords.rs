//! Keyword and repeated-token checks

use aho_corasick::AhoCorasick;
use phishguard_core::{Error, Result, Signal};

/// Fast substring matcher for suspicious keywords using Aho-Corasick.
///
/// Matching runs on the lower-cased message. Each keyword contributes at
/// most one signal no matter how often it occurs, and signals come out in
/// keyword-list order.
pub struct KeywordMatcher {
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

impl KeywordMatcher {
    pub fn new(keywords: &[String]) -> Result<Self> {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

        let matcher = AhoCorasick::new(&keywords).map_err(|e| {
            Error::classifier(format!("Failed to build keyword matcher: {}", e))
        })?;

        Ok(Self { keywords, matcher })
    }

    /// Keywords present in the message, in list order
    pub fn matches(&self, message: &str) -> Vec<&str> {
        let lowered = message.to_lowercase();
        let mut hit = vec![false; self.keywords.len()];

        // Overlapping search: a keyword nested inside another still counts
        for m in self.matcher.find_overlapping_iter(&lowered) {
            hit[m.pattern().as_usize()] = true;
        }

        self.keywords
            .iter()
            .zip(hit)
            .filter(|(_, hit)| *hit)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn signals(&self, message: &str) -> Vec<Signal> {
        self.matches(message)
            .into_iter()
            .map(|k| Signal::SuspiciousKeyword(k.to_string()))
            .collect()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Counts whole-word occurrences of one token
#[derive(Debug, Clone)]
pub struct RepetitionCheck {
    token: String,
    threshold: usize,
}

impl RepetitionCheck {
    pub fn new(token: impl Into<String>, threshold: usize) -> Self {
        Self {
            token: token.into().to_lowercase(),
            threshold,
        }
    }

    /// Occurrences of the token among whitespace-separated words
    pub fn count(&self, message: &str) -> usize {
        message
            .to_lowercase()
            .split_whitespace()
            .filter(|word| *word == self.token)
            .count()
    }

    pub fn signal(&self, message: &str) -> Option<Signal> {
        (self.count(message) >= self.threshold).then(|| Signal::RepeatedToken(self.token.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_matcher() -> KeywordMatcher {
        let keywords: Vec<String> = ["urgent", "verify", "login", "update", "bank", "password"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        KeywordMatcher::new(&keywords).unwrap()
    }

    #[test]
    fn test_keywords_in_list_order() {
        let matcher = default_matcher();
        assert_eq!(
            matcher.matches("Urgent! verify your bank login now urgent"),
            vec!["urgent", "verify", "login", "bank"]
        );
    }

    #[test]
    fn test_keyword_counted_once() {
        let matcher = default_matcher();
        assert_eq!(matcher.signals("bank bank BANK").len(), 1);
    }

    #[test]
    fn test_substring_matching() {
        let matcher = default_matcher();
        assert_eq!(matcher.matches("please act urgently"), vec!["urgent"]);
        assert_eq!(matcher.matches("our banking partner"), vec!["bank"]);
        assert!(matcher.matches("Meeting tomorrow at 10am").is_empty());
    }

    #[test]
    fn test_overlapping_keywords() {
        let keywords = vec!["pass".to_string(), "password".to_string()];
        let matcher = KeywordMatcher::new(&keywords).unwrap();
        assert_eq!(matcher.matches("PASSWORD"), vec!["pass", "password"]);
    }

    #[test]
    fn test_keyword_signal_text() {
        let matcher = default_matcher();
        let reasons: Vec<String> = matcher
            .signals("update required")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(reasons, vec!["Suspicious keyword detected: update"]);
    }

    #[test]
    fn test_repetition_counts_whole_tokens() {
        let check = RepetitionCheck::new("urgent", 2);
        assert_eq!(check.count("URGENT reply urgent"), 2);
        assert_eq!(check.count("urgently urgent"), 1);
        // Punctuation stays attached to the token
        assert_eq!(check.count("Urgent! urgent"), 1);
    }

    #[test]
    fn test_repetition_threshold() {
        let check = RepetitionCheck::new("urgent", 2);
        assert_eq!(check.signal("urgent"), None);
        assert_eq!(
            check.signal("urgent\turgent"),
            Some(Signal::RepeatedToken("urgent".to_string()))
        );
        assert_eq!(check.signal("urgently urgently"), None);
    }
}
