//! Error type for generation and conversion runs

use ldpctx_core::LdpcError;
use thiserror::Error;

/// Everything that can abort a run
#[derive(Debug, Error)]
pub enum TxError {
    #[error("matrix error: {0}")]
    Matrix(LdpcError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),
    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),
    #[error("dataset `{0}` not found in matrix file")]
    MissingDataset(String),
    #[error("invalid matrix entry at row {row}, column {col}")]
    InvalidEntry { row: usize, col: usize },
    #[error("code has no information bits")]
    NoInformationBits,
    #[error("derived generator is not orthogonal to the parity-check matrix")]
    NotOrthogonal,
    #[error("unsupported sample format: {0} (16-bit integer PCM required)")]
    UnsupportedSampleFormat(String),
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u16),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<LdpcError> for TxError {
    fn from(err: LdpcError) -> Self {
        TxError::Matrix(err)
    }
}

/// Result type for LDPCTX runs
pub type Result<T> = std::result::Result<T, TxError>;
