//! Verilog rendering of the systematic encoder

use ldpctx_core::{EncoderMapping, OutputSource};
use std::fmt;

use super::MappingRenderer;

/// Combinational Verilog encoder: `frame_data[k-1:0]` in, `out[n-1:0]` out
#[derive(Debug, Clone)]
pub struct VerilogEncoder {
    module_name: String,
}

impl VerilogEncoder {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
        }
    }
}

impl Default for VerilogEncoder {
    fn default() -> Self {
        Self::new("encoder")
    }
}

impl MappingRenderer for VerilogEncoder {
    fn file_name(&self) -> String {
        format!("{}.v", self.module_name)
    }

    fn module_name(&self) -> &str {
        &self.module_name
    }

    fn render(&self, mapping: &EncoderMapping, out: &mut dyn fmt::Write) -> fmt::Result {
        let k = mapping.info_bits();
        let n = mapping.code_length();
        let p = mapping.parity_bits();
        if k == 0 {
            // a zero-width input port cannot be declared
            return Err(fmt::Error);
        }

        writeln!(out, "module {}(frame_data, out);", self.module_name)?;
        writeln!(out, "    input [{}:0] frame_data; // Frame bits", k - 1)?;
        writeln!(
            out,
            "    output [{}:0] out; // {p} parity bits followed by {k} frame bits",
            n - 1
        )?;
        writeln!(out)?;

        for (position, source) in mapping.outputs().skip(p) {
            if let OutputSource::Wire(input) = source {
                writeln!(out, "    assign out[{position}] = frame_data[{input}];")?;
            }
        }
        writeln!(out)?;

        for (position, source) in mapping.outputs().take(p) {
            write!(out, "    assign out[{position}] = ")?;
            match source {
                OutputSource::Xor(inputs) => {
                    for (i, input) in inputs.iter().enumerate() {
                        if i > 0 {
                            out.write_str(" ^ ")?;
                        }
                        write!(out, "frame_data[{input}]")?;
                    }
                }
                OutputSource::Zero => out.write_str("1'b0")?,
                OutputSource::Wire(input) => write!(out, "frame_data[{input}]")?,
            }
            writeln!(out, ";")?;
        }
        writeln!(out)?;
        writeln!(out, "endmodule")
    }
}
