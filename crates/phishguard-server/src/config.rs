//! Server configuration

use crate::cli::Cli;
use phishguard_classifiers::ScorerConfig;
use phishguard_core::RiskThresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ListenConfig,

    /// Score thresholds for the risk buckets
    #[serde(default)]
    pub risk: RiskThresholds,

    /// Scorer settings
    #[serde(default)]
    pub scorer: ScorerConfig,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenConfig {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(listen) = &cli.listen {
            config.server.listen = listen.clone();
        }

        if let Some(port) = cli.port {
            config.server.port = port;
        }

        if let Some(timeout_ms) = cli.probe_timeout_ms {
            config.scorer.probe.timeout_ms = timeout_ms;
        }

        if cli.offline {
            config.scorer.probe.enabled = false;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.risk.medium > self.risk.high {
            anyhow::bail!(
                "risk.medium ({}) must not exceed risk.high ({})",
                self.risk.medium,
                self.risk.high
            );
        }
        if self.server.max_body_bytes == 0 {
            anyhow::bail!("server.max_body_bytes must be greater than zero");
        }
        self.scorer.validate()?;
        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.listen, self.server.port)
    }
}

fn default_listen() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let cli = Cli::parse_from(["phishguard"]);
        let config = ServerConfig::load("/nonexistent/phishguard.yaml", &cli).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.risk, RiskThresholds::default());
    }

    #[test]
    fn test_file_then_cli_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
server:
  listen: 0.0.0.0
  port: 8080
risk:
  medium: 2
  high: 4
scorer:
  keywords: [wire, invoice]
  probe:
    timeout_ms: 1500
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::parse_from(["phishguard", "-P", "9090", "--offline"]);
        let config = ServerConfig::load(&path, &cli).unwrap();

        assert_eq!(config.server.listen, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.risk.medium, 2);
        assert_eq!(config.risk.high, 4);
        assert_eq!(config.scorer.keywords, vec!["wire", "invoice"]);
        assert_eq!(config.scorer.probe.timeout_ms, 1500);
        assert!(!config.scorer.probe.enabled);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "risk:\n  medium: 6\n  high: 5\n").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::parse_from(["phishguard"]);
        assert!(ServerConfig::load(&path, &cli).is_err());
    }

    #[test]
    fn test_rejects_zero_probe_timeout_override() {
        let cli = Cli::parse_from(["phishguard", "--probe-timeout-ms", "0"]);
        assert!(ServerConfig::load("/nonexistent/phishguard.yaml", &cli).is_err());
    }
}
