//! Property tests for score invariants

use async_trait::async_trait;
use phishguard_classifiers::{
    MessageScorer, PhishingModel, ProbeOutcome, ReachabilityProbe, ScorerConfig,
};
use phishguard_core::{RiskBucket, RiskThresholds, ScoreResult};
use proptest::prelude::*;
use std::sync::Arc;

struct FixedModel(f64);

impl PhishingModel for FixedModel {
    fn probability(&self, _text: &str) -> f64 {
        self.0
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct DeadProbe;

#[async_trait]
impl ReachabilityProbe for DeadProbe {
    async fn probe(&self, _url: &str) -> ProbeOutcome {
        ProbeOutcome::Unreachable("offline".to_string())
    }

    fn name(&self) -> &str {
        "dead"
    }
}

fn analyze(probability: f64, message: &str) -> ScoreResult {
    let scorer = MessageScorer::new(
        &ScorerConfig::default(),
        Arc::new(FixedModel(probability)),
        Arc::new(DeadProbe),
    )
    .unwrap();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(scorer.analyze(message))
}

proptest! {
    // Letters a-f cannot spell any default keyword, a scheme, or "www."
    #[test]
    fn prop_no_signals_means_zero(message in "[a-f0-9 .,!]{0,60}") {
        let result = analyze(1.0, &message);
        prop_assert_eq!(result.score(), 0);
        prop_assert!(result.reasons().is_empty());
    }

    #[test]
    fn prop_one_keyword_scores_one(prefix in "[a-f ]{0,30}", suffix in "[a-f ]{0,30}") {
        let message = format!("{prefix} bank {suffix}");
        let result = analyze(0.0, &message);
        prop_assert_eq!(result.score(), 1);
        prop_assert_eq!(
            result.reasons(),
            vec!["Suspicious keyword detected: bank".to_string()]
        );
    }

    #[test]
    fn prop_score_matches_reasons(message in "\\PC{0,80}") {
        let result = analyze(1.0, &message);
        prop_assert_eq!(result.score() as usize, result.reasons().len());
    }

    #[test]
    fn prop_classifier_adds_at_most_one(message in "\\PC{0,80}") {
        let safe = analyze(0.0, &message).score();
        let phishing = analyze(1.0, &message).score();
        prop_assert!(phishing == safe || phishing == safe + 1);
        if safe == 0 {
            prop_assert_eq!(phishing, 0);
        }
    }

    #[test]
    fn prop_bucket_is_monotonic(a in 0u32..20, b in 0u32..20) {
        let thresholds = RiskThresholds::default();
        let rank = |bucket: RiskBucket| match bucket {
            RiskBucket::Safe => 0,
            RiskBucket::Medium => 1,
            RiskBucket::High => 2,
        };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            rank(RiskBucket::from_score(lo, &thresholds))
                <= rank(RiskBucket::from_score(hi, &thresholds))
        );
    }
}
