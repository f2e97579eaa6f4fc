//! Parity-check matrix loading
//!
//! Supported containers:
//!
//! - JSON: an object whose dataset key (default `"H"`) holds an array of rows,
//!   or a bare array of rows. Entries may be booleans or the numbers 0 and 1.
//! - alist: MacKay's sparse listing.
//! - text: one row of `0`/`1` characters per line.
//!
//! Containers written column-major (MATLAB exports, for one) store `Hᵗ`;
//! [`LoadOptions::transpose`] undoes that.

use ldpctx_core::{parse_alist, parse_bit_rows, BinaryMatrix, Gf2Matrix};
use serde_json::Value;
use std::path::Path;

use crate::{Result, TxError};

/// Matrix container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MatrixFormat {
    Json,
    Alist,
    Text,
}

impl MatrixFormat {
    /// Guess the format from a file extension; unknown extensions are text
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => MatrixFormat::Json,
            Some("alist") => MatrixFormat::Alist,
            _ => MatrixFormat::Text,
        }
    }
}

impl std::fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixFormat::Json => write!(f, "json"),
            MatrixFormat::Alist => write!(f, "alist"),
            MatrixFormat::Text => write!(f, "text"),
        }
    }
}

/// How to read a matrix file
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Explicit format; `None` selects by extension
    pub format: Option<MatrixFormat>,
    /// JSON dataset key
    pub dataset: String,
    /// Transpose after loading
    pub transpose: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            dataset: "H".to_string(),
            transpose: false,
        }
    }
}

/// Read the parity-check matrix at `path`
pub fn load_parity_check(path: &Path, opts: &LoadOptions) -> Result<Gf2Matrix> {
    let format = opts.format.unwrap_or_else(|| MatrixFormat::from_path(path));
    let text = std::fs::read_to_string(path)?;

    let matrix = match format {
        MatrixFormat::Json => parse_json_matrix(&text, &opts.dataset)?,
        MatrixFormat::Alist => parse_alist(&text)?,
        MatrixFormat::Text => parse_bit_rows(&text)?,
    };
    let matrix = if opts.transpose {
        matrix.transpose()
    } else {
        matrix
    };

    let (rows, cols) = matrix.dimensions();
    log::info!(
        "loaded {format} matrix {} as {rows}x{cols} ({} ones)",
        path.display(),
        matrix.weight()
    );
    Ok(matrix)
}

/// Parse a JSON matrix document
pub fn parse_json_matrix(text: &str, dataset: &str) -> Result<Gf2Matrix> {
    let value: Value = serde_json::from_str(text)?;
    let rows = match &value {
        Value::Array(rows) => rows,
        Value::Object(map) => match map.get(dataset) {
            Some(Value::Array(rows)) => rows,
            _ => return Err(TxError::MissingDataset(dataset.to_string())),
        },
        _ => return Err(TxError::MissingDataset(dataset.to_string())),
    };

    let mut bits = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let Value::Array(entries) = row else {
            return Err(TxError::InvalidEntry { row: r, col: 0 });
        };
        let row_bits = entries
            .iter()
            .enumerate()
            .map(|(c, entry)| json_bit(entry).ok_or(TxError::InvalidEntry { row: r, col: c }))
            .collect::<Result<Vec<bool>>>()?;
        bits.push(row_bits);
    }

    Ok(Gf2Matrix::from_rows(&bits)?)
}

fn json_bit(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 0.0 => Some(false),
            Some(v) if v == 1.0 => Some(true),
            _ => None,
        },
        _ => None,
    }
}
