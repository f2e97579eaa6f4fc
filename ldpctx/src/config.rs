//! Generator configuration
//!
//! Values come from `GeneratorConfig::default()`, optionally overlaid by the
//! `[generator]` table of a TOML file, then by command-line flags.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Result, TxError};

/// Parameters of the emitted transmit chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Divider count in `Enable_Control_Unit` (sample clock = clk / div)
    pub enable_div_freq: u32,
    /// Divider count in `div_clk`
    pub clock_div_freq: u32,
    /// Frame synchronisation word prepended by `tx`
    pub sync_word: u8,
    /// Significant bits taken from the 16-bit ADC conversion
    pub adc_width: u32,
    /// Directory created under the output path
    pub output_dir: String,
    /// Dataset key looked up in JSON matrix files
    pub dataset: String,
    /// Also write the encoder mapping as JSON
    pub mapping_report: bool,
}

impl GeneratorConfig {
    /// Set the enable control divider
    pub fn with_enable_div_freq(mut self, div: u32) -> Self {
        self.enable_div_freq = div;
        self
    }

    /// Set the clock divider
    pub fn with_clock_div_freq(mut self, div: u32) -> Self {
        self.clock_div_freq = div;
        self
    }

    pub fn with_sync_word(mut self, word: u8) -> Self {
        self.sync_word = word;
        self
    }

    pub fn with_adc_width(mut self, width: u32) -> Self {
        self.adc_width = width;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    pub fn with_mapping_report(mut self, enabled: bool) -> Self {
        self.mapping_report = enabled;
        self
    }

    /// Parse the `[generator]` table of a TOML document; missing keys keep
    /// their defaults
    pub fn from_toml(s: &str) -> Result<Self> {
        #[derive(Deserialize, Default)]
        struct Root {
            #[serde(default)]
            generator: GeneratorConfig,
        }

        let root: Root = toml::from_str(s)?;
        root.generator.validate()?;
        Ok(root.generator)
    }

    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Reject values the templates cannot express
    pub fn validate(&self) -> Result<()> {
        if !(1..=16).contains(&self.adc_width) {
            return Err(TxError::InvalidConfig(format!(
                "adc_width must be within 1..=16, got {}",
                self.adc_width
            )));
        }
        if self.enable_div_freq == 0 {
            return Err(TxError::InvalidConfig(
                "enable_div_freq must be non-zero".into(),
            ));
        }
        let dir = Path::new(&self.output_dir);
        if self.output_dir.is_empty() || dir.components().count() != 1 || dir.is_absolute() {
            return Err(TxError::InvalidConfig(format!(
                "output_dir must be a single directory name, got `{}`",
                self.output_dir
            )));
        }
        if self.dataset.is_empty() {
            return Err(TxError::InvalidConfig("dataset must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enable_div_freq: 2500,
            clock_div_freq: 0,
            sync_word: 0b1010_1010,
            adc_width: 12,
            output_dir: "verilog_code".to_string(),
            dataset: "H".to_string(),
            mapping_report: false,
        }
    }
}
