//! Command-line interface

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::loader::{load_parity_check, LoadOptions, MatrixFormat};
use crate::pipeline::{generate, summarize};
use crate::{convert_bitstream, GeneratorConfig, Result};

#[derive(Debug, Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "LDPCTX - Generate a Verilog LDPC transmit chain from a parity-check matrix"
)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive the systematic encoder and write the Verilog sources
    Generate {
        /// Parity-check matrix file
        #[arg(long, alias = "path_mat")]
        path_mat: PathBuf,

        /// Directory receiving the output directory
        #[arg(long, alias = "path_out")]
        path_out: PathBuf,

        /// TOML file with a [generator] table
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        matrix: MatrixArgs,

        /// Divider count of the enable control unit
        #[arg(long)]
        enable_div_freq: Option<u32>,

        /// Divider count of div_clk
        #[arg(long)]
        clock_div_freq: Option<u32>,

        /// Also write encoder_mapping.json
        #[arg(long)]
        mapping_json: bool,
    },
    /// Convert a 16-bit PCM WAV file into per-sample bit files
    Bitstream {
        /// WAV file to convert
        #[arg(long, alias = "source_path")]
        source_path: PathBuf,

        /// Directory receiving `<stem>/`
        #[arg(long, alias = "save_path")]
        save_path: PathBuf,
    },
    /// Describe a parity-check matrix without writing anything
    Info {
        /// Parity-check matrix file
        #[arg(long, alias = "path_mat")]
        path_mat: PathBuf,

        #[command(flatten)]
        matrix: MatrixArgs,
    },
}

/// How the matrix file is read
#[derive(Debug, Clone, Args)]
pub struct MatrixArgs {
    /// Container format; guessed from the extension when absent
    #[arg(long, value_enum)]
    pub format: Option<MatrixFormat>,

    /// JSON dataset key holding the matrix
    #[arg(long)]
    pub dataset: Option<String>,

    /// The file stores Hᵗ (column-major exports)
    #[arg(long)]
    pub transpose: bool,
}

impl MatrixArgs {
    fn load_options(&self, config: &GeneratorConfig) -> LoadOptions {
        LoadOptions {
            format: self.format,
            dataset: self
                .dataset
                .clone()
                .unwrap_or_else(|| config.dataset.clone()),
            transpose: self.transpose,
        }
    }
}

/// Configuration file first, then flags on top
pub fn resolve_config(
    path: Option<&Path>,
    enable_div_freq: Option<u32>,
    clock_div_freq: Option<u32>,
    mapping_json: bool,
) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(div) = enable_div_freq {
        config = config.with_enable_div_freq(div);
    }
    if let Some(div) = clock_div_freq {
        config = config.with_clock_div_freq(div);
    }
    if mapping_json {
        config = config.with_mapping_report(true);
    }
    config.validate()?;
    Ok(config)
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            path_mat,
            path_out,
            config,
            matrix,
            enable_div_freq,
            clock_div_freq,
            mapping_json,
        } => {
            let config =
                resolve_config(config.as_deref(), enable_div_freq, clock_div_freq, mapping_json)?;
            let opts = matrix.load_options(&config);
            let report = generate(&path_mat, &path_out, &opts, &config)?;

            println!(
                "({}, {}) code, {} parity bits{}",
                report.code_length,
                report.info_bits,
                report.parity_bits,
                if report.already_systematic {
                    ", already systematic"
                } else {
                    ""
                }
            );
            for file in &report.files {
                println!("  {}", file.display());
            }
        }
        Commands::Bitstream {
            source_path,
            save_path,
        } => {
            let report = convert_bitstream(&source_path, &save_path)?;
            print!("{}", report.info);
            for file in &report.files {
                println!("  {}", file.display());
            }
        }
        Commands::Info { path_mat, matrix } => {
            let opts = matrix.load_options(&GeneratorConfig::default());
            let h = load_parity_check(&path_mat, &opts)?;
            println!("{}", summarize(&h));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = resolve_config(None, Some(100), None, true).unwrap();
        assert_eq!(config.enable_div_freq, 100);
        assert_eq!(config.clock_div_freq, 0);
        assert!(config.mapping_report);
    }

    #[test]
    fn test_zero_enable_divider_is_rejected() {
        assert!(resolve_config(None, Some(0), None, false).is_err());
    }

    #[test]
    fn test_dataset_falls_back_to_config() {
        let args = MatrixArgs {
            format: None,
            dataset: None,
            transpose: false,
        };
        let config = GeneratorConfig::default().with_dataset("Hmat");
        assert_eq!(args.load_options(&config).dataset, "Hmat");
    }
}
