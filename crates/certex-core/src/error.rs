use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CertexError {
    #[error("no text could be extracted from the document")]
    NoTextExtracted,

    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("failed to load extraction tables from {path}: {reason}")]
    TablesLoad { path: PathBuf, reason: String },

    #[error("invalid extraction tables: {0}")]
    TablesInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
