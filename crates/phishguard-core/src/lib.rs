//! PhishGuard Core
//!
//! Core types shared across PhishGuard components.
//!
//! This crate provides:
//! - Error types and result handling
//! - Training labels and labeled examples
//! - Scoring signals, score results, and risk buckets

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{LabeledExample, Label, RiskBucket, RiskThresholds, ScoreResult, Signal};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Label, RiskBucket, ScoreResult, Signal};
}
