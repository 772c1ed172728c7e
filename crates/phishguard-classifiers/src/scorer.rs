//! Message scorer
//!
//! Runs the four signal sources over one message, in a fixed order:
//!
//! 1. Suspicious keywords (substring, once per keyword)
//! 2. Repeated watched token (whole words)
//! 3. URL structure and reachability, per extracted URL
//! 4. The statistical model, which only adds a point when at least one of
//!    the checks above already fired
//!
//! Every signal is worth one point. The scorer never fails: probe errors
//! and malformed URLs become signals instead.

use crate::classifier::PhishingModel;
use crate::config::ScorerConfig;
use crate::keywords::{KeywordMatcher, RepetitionCheck};
use crate::model::TfIdfLogisticModel;
use crate::probe::{HttpProbe, OfflineProbe, ReachabilityProbe};
use crate::urls::UrlExtractor;
use futures::future::join_all;
use phishguard_core::{Label, Result, ScoreResult, Signal};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Combines heuristic checks and a phishing model into a risk score
pub struct MessageScorer {
    keywords: KeywordMatcher,
    repetition: RepetitionCheck,
    urls: UrlExtractor,
    probe: Arc<dyn ReachabilityProbe>,
    model: Arc<dyn PhishingModel>,
}

impl MessageScorer {
    /// Build a scorer around an existing model and probe
    pub fn new(
        config: &ScorerConfig,
        model: Arc<dyn PhishingModel>,
        probe: Arc<dyn ReachabilityProbe>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            keywords: KeywordMatcher::new(&config.keywords)?,
            repetition: RepetitionCheck::new(
                config.repetition.token.clone(),
                config.repetition.threshold,
            ),
            urls: UrlExtractor::new()?,
            probe,
            model,
        })
    }

    /// Train the default model and pick the probe the config asks for.
    ///
    /// This is the startup path; a training failure here is fatal.
    pub fn from_config(config: &ScorerConfig) -> Result<Self> {
        config.validate()?;

        let model = TfIdfLogisticModel::train(crate::dataset::TRAINING_SET, &config.model)?;

        let probe: Arc<dyn ReachabilityProbe> = if config.probe.enabled {
            Arc::new(HttpProbe::new(config.probe.timeout())?)
        } else {
            Arc::new(OfflineProbe)
        };

        info!(
            model = model.name(),
            probe = probe.name(),
            keywords = config.keywords.len(),
            "Message scorer ready"
        );

        Self::new(config, Arc::new(model), probe)
    }

    /// Score one message
    pub async fn analyze(&self, message: &str) -> ScoreResult {
        let start = Instant::now();
        let mut result = ScoreResult::new();

        let keyword_signals = self.keywords.signals(message);
        debug!(hits = keyword_signals.len(), "Keyword check");
        result.extend(keyword_signals);

        if let Some(signal) = self.repetition.signal(message) {
            debug!("Repetition check fired");
            result.push(signal);
        }

        let urls = self.urls.inspect_all(message);
        if !urls.is_empty() {
            // Probes run concurrently; join_all keeps URL order
            let outcomes = join_all(urls.iter().map(|url| self.probe.probe(&url.raw))).await;

            for (url, outcome) in urls.iter().zip(outcomes) {
                let structural = url.signals();
                debug!(
                    url = %url.raw,
                    structural = structural.len(),
                    outcome = ?outcome,
                    "URL check"
                );
                result.extend(structural);
                result.extend(outcome.signal());
            }
        }

        if result.score() > 0 && self.model.predict(message) == Label::Phishing {
            result.push(Signal::ClassifierPhishing);
        }

        info!(
            score = result.score(),
            urls = urls.len(),
            latency_us = start.elapsed().as_micros() as u64,
            "Message analysed"
        );

        result
    }

    pub fn model(&self) -> &dyn PhishingModel {
        self.model.as_ref()
    }

    pub fn probe(&self) -> &dyn ReachabilityProbe {
        self.probe.as_ref()
    }

    pub fn keywords(&self) -> &[String] {
        self.keywords.keywords()
    }
}
