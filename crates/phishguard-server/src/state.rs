//! Shared application state

use metrics_exporter_prometheus::PrometheusHandle;
use phishguard_classifiers::MessageScorer;
use phishguard_core::RiskThresholds;
use std::sync::Arc;

/// Application state shared across all requests.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Scorer with its trained model and probe
    pub scorer: Arc<MessageScorer>,

    /// Bucket thresholds applied to every score
    pub thresholds: RiskThresholds,

    /// Prometheus metrics handle for rendering; absent when no recorder is installed
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(scorer: MessageScorer, thresholds: RiskThresholds) -> Self {
        Self {
            scorer: Arc::new(scorer),
            thresholds,
            metrics_handle: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}
