//! Text parsers for parity-check matrices
//!
//! Two textual forms are understood: plain bit rows (one matrix row per
//! line) and MacKay's alist sparse listing. Both return a dense
//! [`Gf2Matrix`] and report failures with 1-based line numbers.

use alloc::vec::Vec;

use crate::gf2::Gf2Matrix;
use crate::{LdpcError, Result};

/// Parse one matrix row per line of `0`/`1` characters
///
/// Whitespace, `,`, `;`, `[` and `]` are separators and ignored, so both
/// `1 0 1` and `[1,0,1]` are accepted. Blank lines and lines starting with
/// `#` are skipped.
pub fn parse_bit_rows(text: &str) -> Result<Gf2Matrix> {
    let mut rows: Vec<Vec<bool>> = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut row = Vec::new();
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                c if c.is_whitespace() || matches!(c, ',' | ';' | '[' | ']') => {}
                _ => {
                    return Err(LdpcError::InvalidDigit {
                        line: line_idx + 1,
                        column: col_idx + 1,
                    })
                }
            }
        }
        // a line of separators only, e.g. a closing bracket
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Gf2Matrix::from_rows(&rows)
}

/// Parse an alist description
///
/// Layout: `ncols nrows`, the two maximum weights, the column weights, the
/// row weights, then one line per column listing its 1-based row indices
/// (zero entries are padding). Trailing per-row lines, when present, must
/// agree with the columns.
pub fn parse_alist(text: &str) -> Result<Gf2Matrix> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line, header) = lines.next().ok_or(LdpcError::InvalidAlist { line: 1 })?;
    let header = parse_numbers(header, line)?;
    let &[ncols, nrows] = header.as_slice() else {
        return Err(LdpcError::InvalidAlist { line });
    };
    if nrows == 0 || ncols == 0 {
        return Err(LdpcError::EmptyMatrix);
    }

    // maximum weights are informational only
    let (line, _) = lines.next().ok_or(LdpcError::InvalidAlist { line: line + 1 })?;

    let (line, col_weights) = lines.next().ok_or(LdpcError::InvalidAlist { line: line + 1 })?;
    let col_weights = parse_numbers(col_weights, line)?;
    if col_weights.len() != ncols {
        return Err(LdpcError::InvalidAlist { line });
    }

    let (mut line, row_weights) =
        lines.next().ok_or(LdpcError::InvalidAlist { line: line + 1 })?;
    let row_weights = parse_numbers(row_weights, line)?;
    if row_weights.len() != nrows {
        return Err(LdpcError::InvalidAlist { line });
    }

    let mut matrix = Gf2Matrix::zeros(nrows, ncols);
    for (col, &weight) in col_weights.iter().enumerate() {
        let (l, entries) = lines.next().ok_or(LdpcError::InvalidAlist { line: line + 1 })?;
        line = l;
        let entries = nonzero_indices(entries, line, nrows)?;
        if entries.len() != weight {
            return Err(LdpcError::InvalidAlist { line });
        }
        for row in entries {
            matrix.set(row, col, true);
        }
    }

    // Row listings are optional; when given they must describe the same matrix.
    for (row, &weight) in row_weights.iter().enumerate() {
        let Some((l, entries)) = lines.next() else {
            break;
        };
        line = l;
        let entries = nonzero_indices(entries, line, ncols)?;
        let expected: Vec<usize> = (0..ncols).filter(|&c| matrix.get(row, c)).collect();
        if entries.len() != weight || entries != expected {
            return Err(LdpcError::InvalidAlist { line });
        }
    }

    Ok(matrix)
}

fn parse_numbers(text: &str, line: usize) -> Result<Vec<usize>> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<usize>()
                .map_err(|_| LdpcError::InvalidAlist { line })
        })
        .collect()
}

/// Convert 1-based indices to 0-based, dropping zero padding
fn nonzero_indices(text: &str, line: usize, bound: usize) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    for value in parse_numbers(text, line)? {
        if value == 0 {
            continue;
        }
        if value > bound {
            return Err(LdpcError::IndexOutOfBounds {
                index: value,
                bound,
            });
        }
        out.push(value - 1);
    }
    let listed = out.len();
    out.sort_unstable();
    out.dedup();
    if out.len() != listed {
        return Err(LdpcError::InvalidAlist { line });
    }
    Ok(out)
}
