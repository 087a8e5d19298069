//! TF-IDF weighting over a small, fixed corpus of text documents.
//!
//! A [`Corpus`] is normalized into terms, indexed once into a [`TfIdfIndex`],
//! and then answers idf, per-document weight and best-match queries.

pub mod corpus;
pub mod error;
pub mod index;
pub mod scorer;
pub mod tokenizer;

pub use corpus::Corpus;
pub use error::{Result, SearchError};
pub use index::{TermVector, TfIdfIndex, UNSEEN_IDF};
pub use scorer::{best_match, QueryMatch};
pub use tokenizer::{EnglishNormalizer, Normalizer};
