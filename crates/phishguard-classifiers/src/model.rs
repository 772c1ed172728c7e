//! TF-IDF + logistic regression phishing model

use crate::classifier::PhishingModel;
use crate::config::ModelConfig;
use crate::dataset::TRAINING_SET;
use crate::logistic::{LogisticRegression, SolverOptions};
use crate::tfidf::TfIdfVectorizer;
use phishguard_core::{Error, Label, LabeledExample, Result};
use std::time::Instant;
use tracing::info;

/// Statistical phishing model trained once from labeled phrases
#[derive(Debug, Clone)]
pub struct TfIdfLogisticModel {
    name: String,
    vectorizer: TfIdfVectorizer,
    regression: LogisticRegression,
}

impl TfIdfLogisticModel {
    /// Train on the embedded dataset with default solver settings
    pub fn train_default() -> Result<Self> {
        Self::train(TRAINING_SET, &ModelConfig::default())
    }

    /// Train on the given examples.
    ///
    /// Fails when the set is empty or holds a single label class.
    pub fn train(examples: &[LabeledExample], config: &ModelConfig) -> Result<Self> {
        let start = Instant::now();

        if examples.is_empty() {
            return Err(Error::training("training set is empty"));
        }
        let phishing = examples
            .iter()
            .filter(|e| e.label == Label::Phishing)
            .count();
        if phishing == 0 || phishing == examples.len() {
            return Err(Error::training(format!(
                "training set has a single label class ({} examples)",
                examples.len()
            )));
        }

        let texts: Vec<&str> = examples.iter().map(|e| e.text).collect();
        let targets: Vec<f64> = examples.iter().map(|e| e.label.as_target()).collect();

        let mut vectorizer = TfIdfVectorizer::new()?;
        let rows = vectorizer.fit_transform(&texts)?;

        let options = SolverOptions {
            c: config.regularization,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        };
        let regression =
            LogisticRegression::fit(&rows, &targets, vectorizer.vocabulary_size(), options)?;

        info!(
            examples = examples.len(),
            phishing,
            vocabulary = vectorizer.vocabulary_size(),
            iterations = regression.iterations(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Trained phishing model"
        );

        Ok(Self {
            name: "tfidf-logistic".to_string(),
            vectorizer,
            regression,
        })
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn regression(&self) -> &LogisticRegression {
        &self.regression
    }
}

impl PhishingModel for TfIdfLogisticModel {
    fn probability(&self, text: &str) -> f64 {
        let features = self.vectorizer.transform(text);
        self.regression.predict_probability(&features)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
