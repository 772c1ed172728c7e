//! PhishGuard Classifiers
//!
//! Everything needed to turn a raw message into a risk score:
//! - An embedded labeled dataset and a TF-IDF + logistic regression model
//!   trained from it at startup
//! - Heuristic checks: suspicious keywords, repeated tokens, URL structure
//! - A best-effort reachability probe for URLs embedded in messages
//! - The [`MessageScorer`] that combines all of the above
//!
//! The model and the probe sit behind traits so either can be swapped
//! without touching the scorer.

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod keywords;
pub mod logistic;
pub mod model;
pub mod probe;
pub mod scorer;
pub mod tfidf;
pub mod urls;

pub use classifier::PhishingModel;
pub use config::{load_config, ModelConfig, ProbeConfig, RepetitionConfig, ScorerConfig};
pub use keywords::{KeywordMatcher, RepetitionCheck};
pub use logistic::LogisticRegression;
pub use model::TfIdfLogisticModel;
pub use probe::{HttpProbe, OfflineProbe, ProbeOutcome, ReachabilityProbe};
pub use scorer::MessageScorer;
pub use tfidf::{SparseVector, TfIdfVectorizer};
pub use urls::{InspectedUrl, UrlExtractor};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::PhishingModel;
    pub use crate::model::TfIdfLogisticModel;
    pub use crate::probe::{HttpProbe, OfflineProbe, ProbeOutcome, ReachabilityProbe};
    pub use crate::scorer::MessageScorer;
}
