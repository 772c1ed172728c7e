//! Binary logistic regression
//!
//! Minimises `0.5 * |w|^2 + C * sum(log(1 + exp(-y_i * (w . x_i + b))))`
//! with the intercept left unregularised. The solver is full-batch
//! gradient descent from zero weights with a fixed step of `1 / L`, where
//! `L` bounds the Lipschitz constant of the gradient, so fitting the same
//! data always yields the same weights.

use crate::tfidf::SparseVector;
use phishguard_core::{Error, Result};
use tracing::debug;

/// Fitted logistic regression weights
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    intercept: f64,
    iterations: usize,
}

/// Solver settings
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Inverse regularisation strength
    pub c: f64,

    /// Hard cap on gradient steps
    pub max_iterations: usize,

    /// Stop once the gradient norm falls below this
    pub tolerance: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            c: 1.0,
            max_iterations: 10_000,
            tolerance: 1e-6,
        }
    }
}

impl LogisticRegression {
    /// Fit on feature rows with 0/1 targets
    pub fn fit(
        rows: &[SparseVector],
        targets: &[f64],
        n_features: usize,
        options: SolverOptions,
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::training("cannot fit logistic regression on zero rows"));
        }
        if rows.len() != targets.len() {
            return Err(Error::training(format!(
                "{} feature rows but {} targets",
                rows.len(),
                targets.len()
            )));
        }
        if targets.iter().any(|t| *t != 0.0 && *t != 1.0) {
            return Err(Error::training("targets must be 0 or 1"));
        }
        let positives = targets.iter().filter(|t| **t == 1.0).count();
        if positives == 0 || positives == targets.len() {
            return Err(Error::training(
                "training data must contain both label classes",
            ));
        }
        if rows.iter().flat_map(|x| x.iter()).any(|(idx, _)| *idx >= n_features) {
            return Err(Error::training("feature index outside the declared feature count"));
        }
        if options.c.is_nan() || options.c <= 0.0 {
            return Err(Error::training("regularisation C must be positive"));
        }

        // Sigmoid curvature is at most 1/4; the bias acts as a constant feature.
        let lipschitz = 1.0
            + options.c * 0.25 * rows.iter().map(|x| x.norm_squared() + 1.0).sum::<f64>();
        let step = 1.0 / lipschitz;

        let mut weights = vec![0.0; n_features];
        let mut intercept = 0.0;
        let mut grad_w = vec![0.0; n_features];
        let mut iterations = 0;

        while iterations < options.max_iterations {
            grad_w.copy_from_slice(&weights);
            let mut grad_b = 0.0;

            for (x, y) in rows.iter().zip(targets) {
                let residual = options.c * (sigmoid(x.dot(&weights) + intercept) - y);
                for (idx, value) in x.iter() {
                    grad_w[*idx] += residual * value;
                }
                grad_b += residual;
            }

            let grad_norm = (grad_w.iter().map(|g| g * g).sum::<f64>() + grad_b * grad_b).sqrt();
            if grad_norm < options.tolerance {
                break;
            }

            for (w, g) in weights.iter_mut().zip(&grad_w) {
                *w -= step * g;
            }
            intercept -= step * grad_b;
            iterations += 1;
        }

        debug!(
            iterations,
            features = n_features,
            rows = rows.len(),
            "Logistic regression converged"
        );

        Ok(Self {
            weights,
            intercept,
            iterations,
        })
    }

    /// Raw linear score `w . x + b`
    pub fn decision_function(&self, x: &SparseVector) -> f64 {
        x.dot(&self.weights) + self.intercept
    }

    /// Probability of the positive class
    pub fn predict_probability(&self, x: &SparseVector) -> f64 {
        sigmoid(self.decision_function(x))
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Gradient steps taken during fit
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Numerically stable logistic function
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
