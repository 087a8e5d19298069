//! Batch lookups: one `idf`, `weight` or `query` request per line.

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use tfidf_core::{Normalizer, QueryMatch, TfIdfIndex};

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Idf { term: String },
    Weight { document_id: String, term: String },
    Query { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Answer {
    Idf { term: String, idf: f64 },
    Weight { document_id: String, term: String, weight: f64 },
    Query {
        query: String,
        #[serde(flatten)]
        best: QueryMatch,
    },
}

impl Answer {
    /// Plain output with 12 decimal digits.
    pub fn to_text(&self) -> String {
        match self {
            Answer::Idf { idf, .. } => format!("{idf:.12}"),
            Answer::Weight { weight, .. } => format!("{weight:.12}"),
            Answer::Query { best, .. } => format!("({}, {:.12})", best.document_id, best.score),
        }
    }
}

/// Parse a batch file. Blank lines and lines starting with `#` are skipped.
pub fn parse(input: &str) -> Result<Vec<Request>> {
    let mut requests = Vec::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let (op, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let req = match op {
            "idf" if !rest.is_empty() => Request::Idf { term: rest.to_string() },
            "weight" => {
                let (doc, term) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("line {}: expected `weight <document> <term>`", lineno + 1))?;
                Request::Weight { document_id: doc.to_string(), term: term.trim().to_string() }
            }
            "query" => Request::Query { text: rest.to_string() },
            _ => bail!("line {}: unrecognized request `{}`", lineno + 1, line),
        };
        requests.push(req);
    }
    Ok(requests)
}

pub fn answer<N: Normalizer>(index: &TfIdfIndex<N>, req: &Request) -> Result<Answer> {
    Ok(match req {
        Request::Idf { term } => Answer::Idf { term: term.clone(), idf: index.idf(term) },
        Request::Weight { document_id, term } => Answer::Weight {
            document_id: document_id.clone(),
            term: term.clone(),
            weight: index.weight(document_id, term),
        },
        Request::Query { text } => Answer::Query { query: text.clone(), best: index.query(text)? },
    })
}
