use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[a-zA-Z]+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        // Contractions are left out: the token pattern never yields an apostrophe.
        let words: &[&str] = &[
            "a","about","above","after","again","against","ain","all","am","an","and","any","are","aren","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","couldn",
            "d","did","didn","do","does","doesn","doing","don","down","during",
            "each","few","for","from","further",
            "had","hadn","has","hasn","have","haven","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","isn","it","its","itself",
            "just","ll","m","ma","me","mightn","more","most","mustn","my","myself",
            "needn","no","nor","not","now",
            "o","of","off","on","once","only","or","other","our","ours","ourselves","out","over","own",
            "re","s","same","shan","she","should","shouldn","so","some","such",
            "t","than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","ve","very",
            "was","wasn","we","were","weren","what","when","where","which","while","who","whom","why","will","with","won","wouldn",
            "y","you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Tokenize text into stemmed terms: lowercase, alphabetic runs only, stopwords removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut terms = Vec::new();
    for mat in RE.find_iter(&lowered) {
        let token = mat.as_str();
        if is_stopword(token) { continue; }
        terms.push(STEMMER.stem(token).into_owned());
    }
    terms
}

/// Lowercase and stem a single raw token. Punctuation is kept and no stopword
/// filtering happens, so `"AT&T"` stays a term no document can contain.
pub fn stem(term: &str) -> String {
    STEMMER.stem(&term.to_lowercase()).into_owned()
}

/// Turns raw text into index terms.
///
/// Whatever a normalizer does to document text at build time must be what
/// `stem` does to a single looked-up term, otherwise lookups silently miss.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> Vec<String>;
    fn stem(&self, term: &str) -> String;
}

/// Snowball English stemming over `[a-zA-Z]+` tokens with English stopwords.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNormalizer;

impl Normalizer for EnglishNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> { tokenize(text) }
    fn stem(&self, term: &str) -> String { stem(term) }
}
