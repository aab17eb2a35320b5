use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No input provided.")]
    MissingInput,

    #[error(
        "annotation lexicon could not be acquired from {path}: load failed ({load}), install: {install}"
    )]
    ResourceAcquisition {
        path: PathBuf,
        load: String,
        install: String,
    },

    #[error("malformed lexicon entry on line {line}: {reason}")]
    Lexicon { line: usize, reason: String },

    #[error("invalid vocabulary file: {0}")]
    Vocabulary(#[source] serde_json::Error),

    #[error("invalid configuration file: {0}")]
    Config(#[source] serde_json::Error),

    #[error("could not serialize report: {0}")]
    Report(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
