//! Hardware description rendering
//!
//! The encoder itself is rendered from an [`EncoderMapping`] through the
//! [`MappingRenderer`] trait; the rest of the transmit chain comes from
//! parametrised templates in [`templates`].

use ldpctx_core::EncoderMapping;
use std::fmt;

use crate::{GeneratorConfig, Result, TxError};

pub mod templates;
pub mod verilog;

pub use verilog::VerilogEncoder;

/// Turns an encoder mapping into source text for some description language
pub trait MappingRenderer {
    /// File the rendered module is written to
    fn file_name(&self) -> String;

    /// Name the top level instantiates the encoder by
    fn module_name(&self) -> &str;

    /// Render the module
    fn render(&self, mapping: &EncoderMapping, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// One rendered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub contents: String,
}

impl GeneratedFile {
    fn new(name: impl Into<String>, contents: String) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }
}

/// Render every module of the transmit chain
///
/// Nothing is written here; the caller stages the returned files.
pub fn render_transmit_chain(
    mapping: &EncoderMapping,
    config: &GeneratorConfig,
    encoder: &dyn MappingRenderer,
) -> Result<Vec<GeneratedFile>> {
    let k = mapping.info_bits();
    let n = mapping.code_length();
    if k == 0 {
        return Err(TxError::NoInformationBits);
    }

    let mut encoder_src = String::new();
    encoder.render(mapping, &mut encoder_src)?;

    Ok(vec![
        GeneratedFile::new(
            "Enable_Control_Unit.v",
            templates::enable_control_unit(config.enable_div_freq),
        ),
        GeneratedFile::new("div_clk.v", templates::clock_divider(config.clock_div_freq)),
        GeneratedFile::new("tx.v", templates::serial_transmitter(n, config.sync_word)),
        GeneratedFile::new(encoder.file_name(), encoder_src),
        GeneratedFile::new("get_adc_data.v", templates::adc_sampler(config.adc_width)),
        GeneratedFile::new(
            "transmitter.v",
            templates::top_level(k, n, config.adc_width, encoder.module_name()),
        ),
    ])
}
