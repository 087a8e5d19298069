use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::tokenizer::{EnglishNormalizer, Normalizer};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Returned by [`TfIdfIndex::idf`] for a term no document contains.
pub const UNSEEN_IDF: f64 = -1.0;

/// Sparse term -> normalized tf-idf weight for one document.
pub type TermVector = HashMap<String, f64>;

/// In-memory TF-IDF index over a fixed corpus.
///
/// Built once by running preprocess, idf and tf-idf passes in that order;
/// nothing is mutated afterwards.
#[derive(Debug, Clone)]
pub struct TfIdfIndex<N: Normalizer = EnglishNormalizer> {
    normalizer: N,
    doc_terms: BTreeMap<String, Vec<String>>,
    df: HashMap<String, u32>,
    idf: HashMap<String, f64>,
    vectors: BTreeMap<String, TermVector>,
}

impl TfIdfIndex<EnglishNormalizer> {
    pub fn build(corpus: &Corpus) -> Self {
        Self::build_with(corpus, EnglishNormalizer)
    }
}

impl<N: Normalizer> TfIdfIndex<N> {
    pub fn build_with(corpus: &Corpus, normalizer: N) -> Self {
        let mut index = Self {
            normalizer,
            doc_terms: BTreeMap::new(),
            df: HashMap::new(),
            idf: HashMap::new(),
            vectors: BTreeMap::new(),
        };
        index.preprocess(corpus);
        index.compute_idf();
        index.compute_tfidf();
        tracing::info!(num_docs = index.num_documents(), num_terms = index.vocabulary_len(), "index built");
        index
    }

    fn preprocess(&mut self, corpus: &Corpus) {
        for (id, text) in corpus.iter() {
            let terms = self.normalizer.normalize(text);
            // df counts a document once per distinct term
            let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *self.df.entry(term.to_string()).or_insert(0) += 1;
            }
            tracing::debug!(id, num_terms = terms.len(), "preprocessed document");
            self.doc_terms.insert(id.to_string(), terms);
        }
    }

    fn compute_idf(&mut self) {
        let n = self.doc_terms.len() as f64;
        for (term, &df) in &self.df {
            if df > 0 {
                self.idf.insert(term.clone(), (n / df as f64).log10());
            }
        }
    }

    fn compute_tfidf(&mut self) {
        for (id, terms) in &self.doc_terms {
            let raw: Vec<(&str, f64)> = term_counts(terms)
                .into_iter()
                .map(|(term, freq)| {
                    let tf = 1.0 + (freq as f64).log10();
                    (term, tf * self.idf.get(term).copied().unwrap_or(0.0))
                })
                .collect();
            let norm = raw.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();

            let vector: TermVector = raw
                .into_iter()
                .map(|(term, w)| {
                    let weight = if norm != 0.0 { w / norm } else { 0.0 };
                    (term.to_string(), weight)
                })
                .collect();
            self.vectors.insert(id.clone(), vector);
        }
    }

    pub fn normalizer(&self) -> &N { &self.normalizer }

    pub fn num_documents(&self) -> usize { self.doc_terms.len() }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_len(&self) -> usize { self.df.len() }

    pub fn document_ids(&self) -> impl Iterator<Item = &str> {
        self.doc_terms.keys().map(String::as_str)
    }

    /// Normalized terms of a document in text order, duplicates included.
    pub fn document_terms(&self, doc_id: &str) -> Option<&[String]> {
        self.doc_terms.get(doc_id).map(Vec::as_slice)
    }

    /// Number of documents containing an already normalized term.
    pub fn document_frequency(&self, term: &str) -> u32 {
        self.df.get(term).copied().unwrap_or(0)
    }

    pub fn vector(&self, doc_id: &str) -> Option<&TermVector> { self.vectors.get(doc_id) }

    /// Document vectors in ascending id order.
    pub fn vectors(&self) -> impl Iterator<Item = (&str, &TermVector)> {
        self.vectors.iter().map(|(id, v)| (id.as_str(), v))
    }

    /// IDF of `term` after stemming, or [`UNSEEN_IDF`] if no document contains it.
    pub fn idf(&self, term: &str) -> f64 {
        let stemmed = self.normalizer.stem(term);
        let value = self.idf.get(&stemmed).copied().unwrap_or(UNSEEN_IDF);
        tracing::debug!(term, stemmed = %stemmed, value, "idf lookup");
        value
    }

    pub fn try_weight(&self, doc_id: &str, term: &str) -> Result<f64> {
        let vector = self
            .vectors
            .get(doc_id)
            .ok_or_else(|| SearchError::DocumentNotFound { id: doc_id.to_string() })?;
        Ok(vector.get(&self.normalizer.stem(term)).copied().unwrap_or(0.0))
    }

    /// Normalized tf-idf weight of `term` in `doc_id`. Unknown documents are
    /// logged and weigh 0, same as a term the document does not contain.
    pub fn weight(&self, doc_id: &str, term: &str) -> f64 {
        match self.try_weight(doc_id, term) {
            Ok(w) => w,
            Err(err) => {
                tracing::warn!(%err, term, "weight lookup failed");
                0.0
            }
        }
    }
}

/// Raw counts in first-occurrence order, so sums over them are reproducible.
fn term_counts(terms: &[String]) -> Vec<(&str, u32)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for term in terms {
        match slots.get(term.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slots.insert(term.as_str(), counts.len());
                counts.push((term.as_str(), 1));
            }
        }
    }
    counts
}
