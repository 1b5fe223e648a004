use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling dictionaries. Tokenization itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} dictionary is empty")]
    EmptyDictionary(String),

    #[error("digit abbreviation \"{0}\" does not contain a digit")]
    MissingDigit(String),

    #[error("word list I/O failed: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build word list")]
    Fst(#[from] fst::Error),

    #[error("failed to build abbreviation matcher")]
    Matcher(#[from] aho_corasick::BuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
