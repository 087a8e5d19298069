use crate::error::{Result, SearchError};
use crate::index::TfIdfIndex;
use crate::tokenizer::Normalizer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryMatch {
    pub document_id: String,
    pub score: f64,
}

/// Find the single document that best matches `query`.
///
/// Query tokens are split on whitespace and stemmed one by one. Each token is
/// weighted `1 + log10(count)` with no idf factor, the query weights are scaled
/// to unit length (divisor floored at 1) and dotted with the document's stored
/// weights for those same tokens only. Ties go to the smallest document id.
pub fn best_match<N: Normalizer>(index: &TfIdfIndex<N>, query: &str) -> Result<QueryMatch> {
    let tokens: Vec<String> = query
        .split_whitespace()
        .map(|t| index.normalizer().stem(t))
        .collect();
    let q_weights = query_weights(&tokens);
    let divisor = q_weights.iter().map(|w| w * w).sum::<f64>().sqrt().max(1.0);
    let q_norm: Vec<f64> = q_weights.iter().map(|w| w / divisor).collect();

    let mut best: Option<QueryMatch> = None;
    for (doc_id, vector) in index.vectors() {
        let score: f64 = tokens
            .iter()
            .zip(&q_norm)
            .map(|(term, q)| q * vector.get(term).copied().unwrap_or(0.0))
            .fold(0.0, |acc, x| acc + x);
        // strictly greater: the earliest id wins a tie
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(QueryMatch { document_id: doc_id.to_string(), score });
        }
    }

    let found = best.ok_or(SearchError::EmptyCorpus)?;
    tracing::debug!(query, document_id = %found.document_id, score = found.score, "query scored");
    Ok(found)
}

/// Positional weights, one per token; repeated tokens each carry the shared count.
fn query_weights(tokens: &[String]) -> Vec<f64> {
    tokens
        .iter()
        .map(|t| {
            // never zero: the token counts itself
            let tf = tokens.iter().filter(|other| *other == t).count();
            1.0 + (tf as f64).log10()
        })
        .collect()
}

impl<N: Normalizer> TfIdfIndex<N> {
    pub fn query(&self, query: &str) -> Result<QueryMatch> {
        best_match(self, query)
    }
}
