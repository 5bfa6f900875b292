use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{program} exited with {status}")]
    RenderFailed { program: String, status: ExitStatus },

    #[error("could not run {program}: {source}")]
    RendererUnavailable {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to extract text from {path}: {message}")]
    PdfExtract { path: PathBuf, message: String },

    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("invalid menu collection: {0}")]
    InvalidCollection(String),

    #[error("invalid month {0:?}, expected YYYY-MM")]
    InvalidMonth(String),
}
