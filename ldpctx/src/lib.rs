//! LDPCTX - LDPC transmit chain generator
//!
//! This library loads a parity-check matrix, derives a systematic encoder from
//! it and emits the Verilog for a complete ADC-to-serial transmit chain. A
//! separate converter turns 16-bit PCM waveforms into per-sample bit files for
//! simulation testbenches.
//!
//! ## Architecture
//!
//! - **ldpctx-core**: GF(2) algebra, systematic reduction, generator and
//!   encoder mapping (pure, no I/O)
//! - **ldpctx**: matrix loading, configuration, rendering, staged output and
//!   the command-line front end
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ldpctx::{generate, GeneratorConfig, LoadOptions};
//! use std::path::Path;
//!
//! fn example() -> ldpctx::Result<()> {
//!     let report = generate(
//!         Path::new("H.json"),
//!         Path::new("build"),
//!         &LoadOptions::default(),
//!         &GeneratorConfig::default(),
//!     )?;
//!     println!("wrote {} files to {}", report.files.len(), report.output_dir.display());
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use ldpctx_core::{
    derive_generator, generator_matrix, is_identity, is_orthogonal, synthesize, systematic_form,
    systematic_form_with, BinaryMatrix, EncoderMapping, ErrorCategory, Gf2Matrix, LdpcError,
    MatrixOperations, OutputSource, ReductionObserver, SystematicSplit,
};

pub mod bitstream;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod render;

pub use bitstream::{convert_bitstream, BitstreamReport, WaveformInfo};
pub use config::GeneratorConfig;
pub use error::{Result, TxError};
pub use loader::{load_parity_check, LoadOptions, MatrixFormat};
pub use output::StagedDir;
pub use pipeline::{
    derive_encoder, generate, summarize, DerivedEncoder, GenerationReport, LogObserver,
    MatrixSummary, ReductionStats,
};
pub use render::{GeneratedFile, MappingRenderer, VerilogEncoder};
