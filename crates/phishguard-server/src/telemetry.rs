//! Logging and metrics setup

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use phishguard_core::{RiskBucket, ScoreResult, Signal};
use std::time::Duration;
use tracing::info;

pub const ANALYSES_TOTAL: &str = "phishguard_analyses_total";
pub const SIGNALS_TOTAL: &str = "phishguard_signals_total";
pub const PROBE_FAILURES_TOTAL: &str = "phishguard_probe_failures_total";
pub const ANALYSIS_LATENCY_US: &str = "phishguard_analysis_latency_us";
pub const REJECTED_REQUESTS_TOTAL: &str = "phishguard_rejected_requests_total";

/// Initialize tracing/logging
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("phishguard=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("phishguard=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(ANALYSES_TOTAL, "Total number of analysed messages by risk");
    metrics::describe_counter!(SIGNALS_TOTAL, "Total number of raised signals by kind");
    metrics::describe_counter!(
        PROBE_FAILURES_TOTAL,
        "URL probes that got no answer or a non-200 status"
    );
    metrics::describe_counter!(
        REJECTED_REQUESTS_TOTAL,
        "Requests rejected for a missing message"
    );
    metrics::describe_histogram!(
        ANALYSIS_LATENCY_US,
        metrics::Unit::Microseconds,
        "End-to-end analysis latency in microseconds"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}

/// Record one finished analysis
pub fn record_analysis(result: &ScoreResult, risk: RiskBucket, elapsed: Duration) {
    metrics::counter!(ANALYSES_TOTAL, "risk" => risk.as_str()).increment(1);

    for signal in result.signals() {
        metrics::counter!(SIGNALS_TOTAL, "kind" => signal.kind()).increment(1);
        if matches!(signal, Signal::Unreachable | Signal::SuspiciousStatus(_)) {
            metrics::counter!(PROBE_FAILURES_TOTAL).increment(1);
        }
    }

    metrics::histogram!(ANALYSIS_LATENCY_US).record(elapsed.as_micros() as f64);
}

pub fn record_rejection() {
    metrics::counter!(REJECTED_REQUESTS_TOTAL).increment(1);
}
