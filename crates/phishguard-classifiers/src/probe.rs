//! Best-effort URL reachability probes
//!
//! A probe attempts one GET within a fixed timeout and converts whatever
//! happens into a [`ProbeOutcome`]. Probes never return errors and never
//! retry.

use async_trait::async_trait;
use phishguard_core::{Error, Result, Signal};
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// What a single probe observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Answered with 200
    Ok,

    /// Answered with any other status
    Status(u16),

    /// No answer: timeout, DNS failure, refused connection, bad URL, ...
    Unreachable(String),
}

impl ProbeOutcome {
    /// Signal this outcome contributes to the score, if any
    pub fn signal(&self) -> Option<Signal> {
        match self {
            Self::Ok => None,
            Self::Status(code) => Some(Signal::SuspiciousStatus(*code)),
            Self::Unreachable(_) => Some(Signal::Unreachable),
        }
    }

    fn from_status(code: u16) -> Self {
        if code == 200 {
            Self::Ok
        } else {
            Self::Status(code)
        }
    }
}

/// Trait for URL reachability checks
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// Probe one URL; must not fail or block past its own timeout
    async fn probe(&self, url: &str) -> ProbeOutcome;

    /// Get the probe name
    fn name(&self) -> &str;
}

/// Run `operation` within `timeout`, folding timeouts and errors into
/// [`ProbeOutcome::Unreachable`].
pub async fn bounded<F, E>(timeout: Duration, operation: F) -> ProbeOutcome
where
    F: Future<Output = std::result::Result<u16, E>>,
    E: std::fmt::Display,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(Ok(status)) => ProbeOutcome::from_status(status),
        Ok(Err(e)) => ProbeOutcome::Unreachable(e.to_string()),
        Err(_) => ProbeOutcome::Unreachable(format!("timed out after {:?}", timeout)),
    }
}

/// Live HTTP GET probe backed by reqwest
pub struct HttpProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::classifier(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        // Scheme-less `www.` matches and malformed hosts fail here, before any I/O
        let target = match Url::parse(url) {
            Ok(target) => target,
            Err(e) => {
                debug!(url, error = %e, "URL not probeable");
                return ProbeOutcome::Unreachable(format!("invalid URL: {}", e));
            }
        };

        let request = async {
            let response = self.client.get(target).send().await?;
            Ok::<u16, reqwest::Error>(response.status().as_u16())
        };

        let outcome = bounded(self.timeout, request).await;
        if let ProbeOutcome::Unreachable(reason) = &outcome {
            debug!(url, reason = %reason, "URL probe failed");
        }
        outcome
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Probe that never touches the network and reports every URL unreachable
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProbe;

#[async_trait]
impl ReachabilityProbe for OfflineProbe {
    async fn probe(&self, _url: &str) -> ProbeOutcome {
        ProbeOutcome::Unreachable("probing disabled".to_string())
    }

    fn name(&self) -> &str {
        "offline"
    }
}
