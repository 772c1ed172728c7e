//! Core types for PhishGuard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary label produced by phishing classifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Safe,
    Phishing,
}

impl Label {
    /// Target value used when fitting binary models (Phishing = 1)
    pub fn as_target(&self) -> f64 {
        match self {
            Self::Safe => 0.0,
            Self::Phishing => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Phishing => "phishing",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single training example
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledExample {
    /// Example text
    pub text: &'static str,

    /// Ground-truth label
    pub label: Label,
}

impl LabeledExample {
    pub const fn phishing(text: &'static str) -> Self {
        Self {
            text,
            label: Label::Phishing,
        }
    }

    pub const fn safe(text: &'static str) -> Self {
        Self {
            text,
            label: Label::Safe,
        }
    }
}

/// One atomic contribution to a message's risk score.
///
/// Every signal is worth exactly one point. The `Display` form is the
/// human-readable reason shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A suspicious keyword occurs somewhere in the message
    SuspiciousKeyword(String),

    /// A watched token is repeated as a whole word
    RepeatedToken(String),

    /// An embedded URL uses plain `http`
    InsecureScheme,

    /// An embedded URL's host has too many dot-separated labels
    ExcessiveSubdomains,

    /// An embedded URL's host is a raw numeric address
    IpAddressHost,

    /// The probe got a non-200 answer
    SuspiciousStatus(u16),

    /// The probe failed to get any answer
    Unreachable,

    /// The statistical model agreed with at least one other signal
    ClassifierPhishing,
}

impl Signal {
    /// Stable identifier used for metric labels and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SuspiciousKeyword(_) => "keyword",
            Self::RepeatedToken(_) => "repetition",
            Self::InsecureScheme => "insecure_scheme",
            Self::ExcessiveSubdomains => "excessive_subdomains",
            Self::IpAddressHost => "ip_address_host",
            Self::SuspiciousStatus(_) => "suspicious_status",
            Self::Unreachable => "unreachable",
            Self::ClassifierPhishing => "classifier",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuspiciousKeyword(word) => write!(f, "Suspicious keyword detected: {word}"),
            Self::RepeatedToken(token) => write!(f, "Repeated {token} words detected"),
            Self::InsecureScheme => f.write_str("URL uses insecure HTTP"),
            Self::ExcessiveSubdomains => f.write_str("Too many subdomains detected"),
            Self::IpAddressHost => f.write_str("IP address used instead of domain"),
            Self::SuspiciousStatus(_) => f.write_str("Website returned suspicious status code"),
            Self::Unreachable => f.write_str("Website not reachable"),
            Self::ClassifierPhishing => f.write_str("AI model classified as phishing"),
        }
    }
}

/// Outcome of analysing one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreResult {
    signals: Vec<Signal>,
}

impl ScoreResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signal; each one adds a point
    pub fn push(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    pub fn extend(&mut self, signals: impl IntoIterator<Item = Signal>) {
        self.signals.extend(signals);
    }

    /// Total risk score
    pub fn score(&self) -> u32 {
        self.signals.len() as u32
    }

    /// Signals in evaluation order
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Human-readable reasons in evaluation order
    pub fn reasons(&self) -> Vec<String> {
        self.signals.iter().map(ToString::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Score thresholds separating the risk buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Minimum score for a medium-risk verdict
    #[serde(default = "default_medium")]
    pub medium: u32,

    /// Minimum score for a high-risk verdict
    #[serde(default = "default_high")]
    pub high: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium: default_medium(),
            high: default_high(),
        }
    }
}

fn default_medium() -> u32 {
    3
}

fn default_high() -> u32 {
    5
}

/// Risk verdict derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBucket {
    Safe,
    Medium,
    High,
}

impl RiskBucket {
    /// Map a score onto a bucket
    pub fn from_score(score: u32, thresholds: &RiskThresholds) -> Self {
        if score >= thresholds.high {
            Self::High
        } else if score >= thresholds.medium {
            Self::Medium
        } else {
            Self::Safe
        }
    }

    /// Banner shown to end users
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "⚠ HIGH RISK - Phishing Detected",
            Self::Medium => "⚠ Medium Risk - Be Careful",
            Self::Safe => "✅ Looks Safe",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_thresholds() {
        let thresholds = RiskThresholds::default();
        assert_eq!(RiskBucket::from_score(0, &thresholds), RiskBucket::Safe);
        assert_eq!(RiskBucket::from_score(2, &thresholds), RiskBucket::Safe);
        assert_eq!(RiskBucket::from_score(3, &thresholds), RiskBucket::Medium);
        assert_eq!(RiskBucket::from_score(4, &thresholds), RiskBucket::Medium);
        assert_eq!(RiskBucket::from_score(5, &thresholds), RiskBucket::High);
        assert_eq!(RiskBucket::from_score(12, &thresholds), RiskBucket::High);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(RiskBucket::High.label(), "⚠ HIGH RISK - Phishing Detected");
        assert_eq!(RiskBucket::Medium.label(), "⚠ Medium Risk - Be Careful");
        assert_eq!(RiskBucket::Safe.label(), "✅ Looks Safe");
    }

    #[test]
    fn test_signal_reasons() {
        assert_eq!(
            Signal::SuspiciousKeyword("bank".into()).to_string(),
            "Suspicious keyword detected: bank"
        );
        assert_eq!(
            Signal::RepeatedToken("urgent".into()).to_string(),
            "Repeated urgent words detected"
        );
        assert_eq!(
            Signal::SuspiciousStatus(404).to_string(),
            "Website returned suspicious status code"
        );
        assert_eq!(Signal::Unreachable.to_string(), "Website not reachable");
        assert_eq!(
            Signal::ClassifierPhishing.to_string(),
            "AI model classified as phishing"
        );
    }

    #[test]
    fn test_score_counts_signals() {
        let mut result = ScoreResult::new();
        assert_eq!(result.score(), 0);
        assert!(result.reasons().is_empty());

        result.push(Signal::InsecureScheme);
        result.push(Signal::Unreachable);
        assert_eq!(result.score(), 2);
        assert_eq!(
            result.reasons(),
            vec!["URL uses insecure HTTP", "Website not reachable"]
        );
    }

    #[test]
    fn test_thresholds_deserialize_defaults() {
        let thresholds: RiskThresholds = serde_yaml::from_str("high: 7").unwrap();
        assert_eq!(thresholds.medium, 3);
        assert_eq!(thresholds.high, 7);
    }
}
