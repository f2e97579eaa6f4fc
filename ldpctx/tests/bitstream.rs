use hound::{SampleFormat, WavSpec, WavWriter};
use ldpctx::{convert_bitstream, TxError};
use std::fs;
use std::path::Path;

fn write_wav(path: &Path, channels: u16, bits: u16, samples: &[i32]) {
    let spec = WavSpec {
        channels,
        sample_rate: 8000,
        bits_per_sample: bits,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn test_stereo_file_splits_into_channels() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("tone.wav");
    write_wav(&wav, 2, 16, &[100, -100, 200, -200, 300, -300, 400, -400]);

    let save = dir.path().join("bits");
    let report = convert_bitstream(&wav, &save).unwrap();
    let out = save.join("tone");
    assert_eq!(report.output_dir, out);
    assert_eq!(report.info.frames, 4);

    assert_eq!(
        fs::read_to_string(out.join("left_channel_bits.mem")).unwrap(),
        "0000000001100100\n\
         0000000011001000\n\
         0000000100101100\n\
         0000000110010000\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("right_channel_bits.mem")).unwrap(),
        "1111111110011100\n\
         1111111100111000\n\
         1111111011010100\n\
         1111111001110000\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("tone.log")).unwrap(),
        "Number of channels: 2\nNumber of frames: 4\nSample width: 2\n\
         Frame rate: 8000\nSize of audio: 16\n"
    );
}

#[test]
fn test_mono_file_has_no_right_channel() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("voice.wav");
    write_wav(&wav, 1, 16, &[0, -1, 32767]);

    let report = convert_bitstream(&wav, dir.path()).unwrap();
    assert_eq!(report.files.len(), 2);

    let out = dir.path().join("voice");
    assert!(!out.join("right_channel_bits.mem").exists());
    let left = fs::read_to_string(out.join("left_channel_bits.mem")).unwrap();
    assert_eq!(
        left.lines().collect::<Vec<_>>(),
        ["0000000000000000", "1111111111111111", "0111111111111111"]
    );
}

#[test]
fn test_rejects_non_16_bit_input() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("wide.wav");
    write_wav(&wav, 1, 24, &[1, 2, 3]);

    let save = dir.path().join("bits");
    assert!(matches!(
        convert_bitstream(&wav, &save),
        Err(TxError::UnsupportedSampleFormat(_))
    ));
    assert!(!save.join("wide").exists());
}
