//! End-to-end generation
//!
//! load → systematic form → generator → orthogonality check → mapping →
//! render → staged write → commit. Any failure before the commit leaves the
//! output path untouched.

use ldpctx_core::{
    generator_matrix, is_orthogonal, systematic_form_with, validate_parity_shape, BinaryMatrix,
    EncoderMapping, Gf2Matrix, LdpcError, ReductionObserver, SystematicSplit,
};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::loader::{load_parity_check, LoadOptions};
use crate::output::StagedDir;
use crate::render::{render_transmit_chain, VerilogEncoder};
use crate::{GeneratorConfig, Result, TxError};

/// File name of the optional mapping report
pub const MAPPING_REPORT: &str = "encoder_mapping.json";

/// Reduction observer that forwards events to `log` and keeps counts
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    pub already_systematic: bool,
    pub swaps: usize,
    pub row_ops: usize,
}

impl ReductionObserver for LogObserver {
    fn already_systematic(&mut self, rows: usize, cols: usize) {
        self.already_systematic = true;
        log::info!("{rows}x{cols} parity-check matrix is already systematic");
    }

    fn pivot_swapped(&mut self, pivot: usize, with: usize) {
        log::debug!("swapped row {pivot} with row {with}");
    }

    fn column_cleared(&mut self, pivot: usize, column: usize, eliminated: usize) {
        log::trace!("pivot {pivot} cleared column {column} from {eliminated} rows");
    }

    fn reduced(&mut self, swaps: usize, row_ops: usize) {
        self.swaps = swaps;
        self.row_ops = row_ops;
        log::info!("reduced to systematic form: {swaps} swaps, {row_ops} row additions");
    }
}

/// Everything derived from one parity-check matrix
#[derive(Debug, Clone)]
pub struct DerivedEncoder {
    pub split: SystematicSplit,
    pub generator: Gf2Matrix,
    pub mapping: EncoderMapping,
    pub already_systematic: bool,
}

/// Derive generator and encoder mapping from `h`, verifying `H·Gᵗ = 0`
pub fn derive_encoder(h: &Gf2Matrix) -> Result<DerivedEncoder> {
    let mut observer = LogObserver::default();
    let split = systematic_form_with(h, &mut observer)?;
    let generator = generator_matrix(&split)?;
    if !is_orthogonal(h, &generator)? {
        return Err(TxError::NotOrthogonal);
    }
    let mapping = EncoderMapping::from_generator(&generator)?;
    log::debug!(
        "generator is {}x{}, {} parity outputs",
        generator.nrows(),
        generator.ncols(),
        mapping.parity_bits()
    );

    Ok(DerivedEncoder {
        split,
        generator,
        mapping,
        already_systematic: observer.already_systematic,
    })
}

/// Outcome of a successful [`generate`] run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub parity_bits: usize,
    pub info_bits: usize,
    pub code_length: usize,
    pub already_systematic: bool,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Load `matrix_path`, derive the encoder and write the transmit chain to
/// `out_dir/<config.output_dir>`
pub fn generate(
    matrix_path: &Path,
    out_dir: &Path,
    opts: &LoadOptions,
    config: &GeneratorConfig,
) -> Result<GenerationReport> {
    config.validate()?;
    let h = load_parity_check(matrix_path, opts)?;
    let derived = derive_encoder(&h)?;
    let sources = render_transmit_chain(&derived.mapping, config, &VerilogEncoder::default())?;

    let stage = StagedDir::create(out_dir, &config.output_dir)?;
    let mut files = Vec::with_capacity(sources.len() + 1);
    for source in &sources {
        files.push(stage.write(&source.name, &source.contents)?);
    }
    if config.mapping_report {
        let json = serde_json::to_string_pretty(&derived.mapping)?;
        files.push(stage.write(MAPPING_REPORT, json)?);
    }
    let output_dir = stage.commit()?;
    log::info!("wrote {} files to {}", files.len(), output_dir.display());

    Ok(GenerationReport {
        parity_bits: derived.mapping.parity_bits(),
        info_bits: derived.mapping.info_bits(),
        code_length: derived.mapping.code_length(),
        already_systematic: derived.already_systematic,
        output_dir,
        files,
    })
}

/// Shape and reducibility of a parity-check matrix, without writing anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    pub weight: usize,
    pub reduction: std::result::Result<ReductionStats, LdpcError>,
}

/// Work done by a successful reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionStats {
    pub already_systematic: bool,
    pub swaps: usize,
    pub row_ops: usize,
}

/// Describe `h`
pub fn summarize(h: &Gf2Matrix) -> MatrixSummary {
    let (rows, cols) = h.dimensions();
    let mut observer = LogObserver::default();
    let reduction = systematic_form_with(h, &mut observer).map(|_| ReductionStats {
        already_systematic: observer.already_systematic,
        swaps: observer.swaps,
        row_ops: observer.row_ops,
    });
    MatrixSummary {
        rows,
        cols,
        weight: h.weight(),
        reduction,
    }
}

impl fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "parity checks (n-k): {}", self.rows)?;
        writeln!(f, "code length (n):     {}", self.cols)?;
        match validate_parity_shape(self.rows, self.cols) {
            Ok(k) => writeln!(f, "information bits:    {k}")?,
            Err(err) => writeln!(f, "information bits:    - ({err})")?,
        }
        let cells = self.rows * self.cols;
        if cells > 0 {
            writeln!(
                f,
                "ones:                {} ({:.2}%)",
                self.weight,
                self.weight as f64 * 100.0 / cells as f64
            )?;
        }
        match &self.reduction {
            Ok(stats) if stats.already_systematic => write!(f, "systematic form:     already in place"),
            Ok(stats) => write!(
                f,
                "systematic form:     {} swaps, {} row additions",
                stats.swaps, stats.row_ops
            ),
            Err(err) => write!(f, "systematic form:     failed ({err})"),
        }
    }
}
