mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use report::{Answer, Request};
use serde::Serialize;
use tfidf_core::corpus::DEFAULT_EXTENSION;
use tfidf_core::{Corpus, TfIdfIndex};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tfidf")]
#[command(about = "Build a TF-IDF index over a text corpus and query it", long_about = None)]
struct Cli {
    /// Directory holding one plain-text file per document
    #[arg(long, global = true, default_value = "./US_Inaugural_Addresses")]
    corpus: PathBuf,
    /// File extension of documents to index
    #[arg(long, global = true, default_value = DEFAULT_EXTENSION)]
    extension: String,
    /// Print results as JSON instead of plain text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inverse document frequency of a term (-1 if never seen)
    Idf { term: String },
    /// Normalized tf-idf weight of a term in one document
    Weight { document: String, term: String },
    /// Best matching document for a free-text query
    Query {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Corpus and vocabulary sizes
    Stats,
    /// Run every lookup listed in a batch file, one per line
    Report { file: PathBuf },
}

#[derive(Serialize)]
struct Stats {
    num_docs: usize,
    num_terms: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let corpus = Corpus::from_dir(&cli.corpus, &cli.extension)
        .with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;
    let index = TfIdfIndex::build(&corpus);

    match cli.command {
        Commands::Idf { term } => emit(&report::answer(&index, &Request::Idf { term })?, cli.json),
        Commands::Weight { document, term } => {
            let req = Request::Weight { document_id: document, term };
            emit(&report::answer(&index, &req)?, cli.json)
        }
        Commands::Query { text } => {
            let req = Request::Query { text: text.join(" ") };
            emit(&report::answer(&index, &req)?, cli.json)
        }
        Commands::Stats => {
            let stats = Stats { num_docs: index.num_documents(), num_terms: index.vocabulary_len() };
            if cli.json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("documents: {}\nterms: {}", stats.num_docs, stats.num_terms);
            }
            Ok(())
        }
        Commands::Report { file } => {
            let input = fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
            let requests = report::parse(&input)?;
            tracing::info!(count = requests.len(), "running batch");
            for req in &requests {
                emit(&report::answer(&index, req)?, cli.json)?;
            }
            Ok(())
        }
    }
}

fn emit(answer: &Answer, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(answer)?);
    } else {
        println!("{}", answer.to_text());
    }
    Ok(())
}
