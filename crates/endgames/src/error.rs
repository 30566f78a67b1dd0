use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EndgameError {
    #[error("malformed endgame code '{code}': {reason}")]
    MalformedCode { code: String, reason: &'static str },
    #[error("no evaluator is known for endgame code '{0}'")]
    UnknownCode(String),
    #[error("endgame code '{0}' is listed under the wrong family")]
    WrongFamily(String),
    #[error("failed to parse registry config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
