//! Configuration for the message scorer

use phishguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Suspicious keywords, matched as case-insensitive substrings in order
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Repeated-token check
    #[serde(default)]
    pub repetition: RepetitionConfig,

    /// URL reachability probe
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Statistical model training
    #[serde(default)]
    pub model: ModelConfig,
}

/// Repeated-token check settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitionConfig {
    /// Whole-word token to count
    #[serde(default = "default_repeated_token")]
    pub token: String,

    /// Occurrences needed to raise the signal
    #[serde(default = "default_repeat_threshold")]
    pub threshold: usize,
}

/// Reachability probe settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Issue live GET requests; when false every URL is reported unreachable
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub timeout_ms: u64,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Logistic regression solver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Inverse regularisation strength
    #[serde(default = "default_regularization")]
    pub regularization: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            repetition: RepetitionConfig::default(),
            probe: ProbeConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl Default for RepetitionConfig {
    fn default() -> Self {
        Self {
            token: default_repeated_token(),
            threshold: default_repeat_threshold(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            regularization: default_regularization(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

impl ScorerConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Reject settings the scorer cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(Error::config("keyword list must not be empty"));
        }
        for (i, keyword) in self.keywords.iter().enumerate() {
            if keyword.trim().is_empty() {
                return Err(Error::config("keywords must not be blank"));
            }
            let lowered = keyword.to_lowercase();
            if self.keywords[..i].iter().any(|k| k.to_lowercase() == lowered) {
                return Err(Error::config(format!("duplicate keyword '{}'", keyword)));
            }
        }

        let token = &self.repetition.token;
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            return Err(Error::config(
                "repetition token must be a single non-empty word",
            ));
        }
        if self.repetition.threshold == 0 {
            return Err(Error::config("repetition threshold must be at least 1"));
        }

        if self.probe.timeout_ms == 0 {
            return Err(Error::config("probe timeout must be greater than zero"));
        }

        if self.model.regularization.is_nan() || self.model.regularization <= 0.0 {
            return Err(Error::config("model regularization must be positive"));
        }
        if self.model.max_iterations == 0 {
            return Err(Error::config("model max_iterations must be at least 1"));
        }

        Ok(())
    }
}

/// Load and validate a scorer configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<ScorerConfig> {
    let path = path.as_ref();
    ScorerConfig::from_file(path).map_err(|e| match e {
        Error::Config(_) => e,
        other => Error::config(format!(
            "Failed to load scorer config {}: {}",
            path.display(),
            other
        )),
    })
}

fn default_keywords() -> Vec<String> {
    ["urgent", "verify", "login", "update", "bank", "password"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_repeated_token() -> String {
    "urgent".to_string()
}

fn default_repeat_threshold() -> usize {
    2
}

fn default_probe_timeout_ms() -> u64 {
    3_000
}

fn default_regularization() -> f64 {
    1.0
}

fn default_max_iterations() -> usize {
    10_000
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ScorerConfig::default();
        assert_eq!(
            config.keywords,
            vec!["urgent", "verify", "login", "update", "bank", "password"]
        );
        assert_eq!(config.repetition.token, "urgent");
        assert_eq!(config.repetition.threshold, 2);
        assert!(config.probe.enabled);
        assert_eq!(config.probe.timeout(), Duration::from_secs(3));
        assert_eq!(config.model.regularization, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scorer_config_yaml() {
        let yaml = r#"
keywords: [invoice, wire]
probe:
  enabled: false
  timeout_ms: 500
"#;
        let config = ScorerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.keywords, vec!["invoice", "wire"]);
        assert!(!config.probe.enabled);
        assert_eq!(config.probe.timeout_ms, 500);
        assert_eq!(config.repetition, RepetitionConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ScorerConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ScorerConfig::default());
    }

    #[test]
    fn test_validation_failures() {
        let cases = [
            "keywords: []",
            "keywords: ['  ']",
            "keywords: [bank, BANK]",
            "repetition: { token: 'two words' }",
            "repetition: { threshold: 0 }",
            "probe: { timeout_ms: 0 }",
            "model: { regularization: 0.0 }",
            "model: { max_iterations: 0 }",
        ];
        for yaml in cases {
            let result = ScorerConfig::from_yaml(yaml);
            assert!(
                matches!(result, Err(Error::Config(_))),
                "expected config error for {yaml:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "repetition:\n  token: act\n  threshold: 3").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.repetition.token, "act");
        assert_eq!(config.repetition.threshold, 3);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/phishguard/scorer.yaml");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
