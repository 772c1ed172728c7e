//! TF-IDF vectorizer
//!
//! Tokens are lower-cased runs of two or more word characters. Weights are
//! raw term counts multiplied by a smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`, and every row is L2-normalised.

use phishguard_core::{Error, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Sparse feature vector with entries sorted by feature index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(index, value)` pairs; pairs are sorted by index
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(idx, _)| *idx);
        Self { entries }
    }

    /// Dot product against a dense weight vector
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|(idx, value)| weights.get(*idx).copied().unwrap_or(0.0) * value)
            .sum()
    }

    pub fn norm_squared(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v * v).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, f64)> {
        self.entries.iter()
    }

    /// Number of non-zero features
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of one feature (zero when absent)
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(idx, _)| *idx)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }
}

/// TF-IDF vectorizer with a vocabulary fixed at fit time
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> feature index (indices follow sorted term order)
    vocabulary: BTreeMap<String, usize>,

    /// Inverse document frequency per feature index
    idf: Vec<f64>,

    /// Number of documents seen during fit
    n_documents: usize,

    token_pattern: Regex,
}

impl TfIdfVectorizer {
    pub fn new() -> Result<Self> {
        let token_pattern = Regex::new(TOKEN_PATTERN).map_err(|e| {
            Error::classifier(format!("Failed to compile token pattern: {}", e))
        })?;

        Ok(Self {
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            token_pattern,
        })
    }

    /// Split text into lower-cased tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Learn the vocabulary and IDF weights from the training documents
    pub fn fit(&mut self, documents: &[&str]) -> Result<()> {
        if documents.is_empty() {
            return Err(Error::training("cannot fit vectorizer on zero documents"));
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: BTreeSet<String> = self.tokenize(doc).into_iter().collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(Error::training("training documents produced an empty vocabulary"));
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();

        Ok(())
    }

    /// Transform a document into an L2-normalised TF-IDF vector.
    ///
    /// Terms outside the vocabulary are ignored; a document with no known
    /// terms maps to the empty vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in self.tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in &mut entries {
                *value /= norm;
            }
        }

        SparseVector::from_entries(entries)
    }

    /// Fit on the documents and return their vectors
    pub fn fit_transform(&mut self, documents: &[&str]) -> Result<Vec<SparseVector>> {
        self.fit(documents)?;
        Ok(documents.iter().map(|doc| self.transform(doc)).collect())
    }

    /// Get the size of the vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term, if known
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}
