use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "rdf-skolem")]
/// Replaces blank node identifiers in RDF documents with globally unique named node identifiers
pub struct Args {
    /// MIME type of the inbound and outbound documents
    ///
    /// Every document of a run shares one MIME type. An unsupported value aborts before any
    /// document is read.
    #[arg(short, long, default_value = "text/turtle")]
    pub mime: String,
    /// Files to transform, each treated as one complete document
    ///
    /// If no file is given, stdin is read to its end as a single document.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Vec<PathBuf>,
    /// File to write the transformed documents to
    ///
    /// If no file is given, stdout is written.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
