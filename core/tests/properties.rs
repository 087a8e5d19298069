//! Property tests over randomly generated small corpora.

use proptest::prelude::*;
use tfidf_core::{Corpus, TfIdfIndex};

const WORDS: &[&str] = &["river", "mountain", "violin", "copper", "galaxy", "harbor", "lantern", "meadow"];

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    let doc = prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "));
    prop::collection::vec(doc, 1..8)
}

fn build(docs: &[String]) -> TfIdfIndex {
    let corpus = Corpus::from_documents(docs.iter().enumerate().map(|(i, d)| (format!("{i:02}.txt"), d.clone()))).unwrap();
    TfIdfIndex::build(&corpus)
}

proptest! {
    #[test]
    fn vectors_are_unit_or_zero(docs in corpus_strategy()) {
        let idx = build(&docs);
        for (_, v) in idx.vectors() {
            let norm = v.values().map(|w| w * w).sum::<f64>().sqrt();
            if v.values().all(|&w| w == 0.0) {
                prop_assert_eq!(norm, 0.0);
            } else {
                prop_assert!((norm - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn idf_decreases_with_document_frequency(docs in corpus_strategy()) {
        let idx = build(&docs);
        for a in WORDS {
            for b in WORDS {
                let (sa, sb) = (tfidf_core::tokenizer::stem(a), tfidf_core::tokenizer::stem(b));
                let (dfa, dfb) = (idx.document_frequency(&sa), idx.document_frequency(&sb));
                if dfa > 0 && dfb > 0 && dfa > dfb {
                    prop_assert!(idx.idf(a) <= idx.idf(b));
                }
            }
        }
    }

    #[test]
    fn builds_are_deterministic(docs in corpus_strategy(), query in prop::sample::select(WORDS)) {
        let a = build(&docs);
        let b = build(&docs);
        for (id, v) in a.vectors() {
            prop_assert_eq!(Some(v), b.vector(id));
        }
        prop_assert_eq!(a.query(query).unwrap(), b.query(query).unwrap());
    }

    #[test]
    fn query_scores_stay_in_unit_range(docs in corpus_strategy(), q in prop::sample::subsequence(WORDS.to_vec(), 1..4)) {
        let idx = build(&docs);
        let m = idx.query(&q.join(" ")).unwrap();
        prop_assert!(m.score >= 0.0 && m.score <= 1.0 + 1e-9);
    }
}
