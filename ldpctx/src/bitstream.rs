//! WAV to per-sample bit files
//!
//! Each 16-bit PCM sample becomes one line of sixteen `0`/`1` characters, the
//! two's-complement pattern MSB first, ready for `$readmemb` in a testbench.
//! Stereo input is de-interleaved into a left and a right file.

use hound::{SampleFormat, WavReader};
use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::output::StagedDir;
use crate::{Result, TxError};

pub const LEFT_CHANNEL_FILE: &str = "left_channel_bits.mem";
pub const RIGHT_CHANNEL_FILE: &str = "right_channel_bits.mem";

/// Header parameters of a waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformInfo {
    pub channels: u16,
    /// Frames per channel
    pub frames: u32,
    /// Bytes per sample
    pub sample_width: u16,
    pub frame_rate: u32,
}

impl WaveformInfo {
    /// Size of the sample data in bytes
    pub fn byte_size(&self) -> u64 {
        u64::from(self.frames) * u64::from(self.channels) * u64::from(self.sample_width)
    }
}

impl fmt::Display for WaveformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of channels: {}", self.channels)?;
        writeln!(f, "Number of frames: {}", self.frames)?;
        writeln!(f, "Sample width: {}", self.sample_width)?;
        writeln!(f, "Frame rate: {}", self.frame_rate)?;
        writeln!(f, "Size of audio: {}", self.byte_size())
    }
}

/// Outcome of [`convert_bitstream`]
#[derive(Debug, Clone)]
pub struct BitstreamReport {
    pub info: WaveformInfo,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Sixteen-character two's-complement rendering of one sample
pub fn format_sample(sample: i16) -> String {
    format!("{:016b}", sample as u16)
}

/// Split interleaved samples into one vector per channel
pub fn deinterleave(samples: &[i16], channels: usize) -> Vec<Vec<i16>> {
    (0..channels)
        .map(|c| samples.iter().skip(c).step_by(channels).copied().collect())
        .collect()
}

/// One line per sample, newline terminated
pub fn render_channel(samples: &[i16]) -> String {
    let mut out = String::with_capacity(samples.len() * 17);
    for &s in samples {
        out.push_str(&format_sample(s));
        out.push('\n');
    }
    out
}

/// Read a 16-bit mono or stereo PCM file
pub fn read_waveform(path: &Path) -> Result<(WaveformInfo, Vec<i16>)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(TxError::UnsupportedSampleFormat(format!(
            "{:?} {}-bit",
            spec.sample_format, spec.bits_per_sample
        )));
    }
    if !(1..=2).contains(&spec.channels) {
        return Err(TxError::UnsupportedChannels(spec.channels));
    }

    let info = WaveformInfo {
        channels: spec.channels,
        frames: reader.duration(),
        sample_width: spec.bits_per_sample / 8,
        frame_rate: spec.sample_rate,
    };
    let samples = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    log::debug!(
        "read {} samples ({} channels) from {}",
        samples.len(),
        info.channels,
        path.display()
    );
    Ok((info, samples))
}

/// Name of the output directory: file name up to its first dot
fn source_stem(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            TxError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cannot derive a name from {}", path.display()),
            ))
        })
}

/// Convert `source` into `save/<stem>/`
pub fn convert_bitstream(source: &Path, save: &Path) -> Result<BitstreamReport> {
    let stem = source_stem(source)?;
    let (info, samples) = read_waveform(source)?;

    let channel_files = [LEFT_CHANNEL_FILE, RIGHT_CHANNEL_FILE];
    let rendered: Vec<(&str, String)> = deinterleave(&samples, usize::from(info.channels))
        .par_iter()
        .zip(channel_files[..].par_iter())
        .map(|(channel, name)| (*name, render_channel(channel)))
        .collect();

    let stage = StagedDir::create(save, &stem)?;
    let mut files = vec![stage.write(&format!("{stem}.log"), info.to_string())?];
    for (name, contents) in &rendered {
        files.push(stage.write(name, contents)?);
    }
    let output_dir = stage.commit()?;
    log::info!(
        "converted {} frames x {} channels into {}",
        info.frames,
        info.channels,
        output_dir.display()
    );

    Ok(BitstreamReport {
        info,
        output_dir,
        files,
    })
}
