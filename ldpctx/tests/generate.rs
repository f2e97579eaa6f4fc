use ldpctx::{generate, EncoderMapping, GeneratorConfig, LoadOptions, TxError};
use ldpctx_core::LdpcError;
use std::fs;
use std::path::Path;

fn write_matrix(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_writes_complete_transmit_chain() {
    let dir = tempfile::tempdir().unwrap();
    let h = write_matrix(dir.path(), "H.json", r#"{"H": [[1, 0, 1, 0], [1, 1, 0, 1]]}"#);
    let out = dir.path().join("build");

    let report = generate(
        &h,
        &out,
        &LoadOptions::default(),
        &GeneratorConfig::default(),
    )
    .unwrap();

    assert_eq!(
        (report.code_length, report.info_bits, report.parity_bits),
        (4, 2, 2)
    );
    assert!(report.already_systematic);
    assert_eq!(report.output_dir, out.join("verilog_code"));
    assert_eq!(report.files.len(), 6);
    for file in &report.files {
        assert!(file.exists(), "{}", file.display());
    }

    let encoder = fs::read_to_string(out.join("verilog_code").join("encoder.v")).unwrap();
    assert!(encoder.contains("assign out[1] = frame_data[0] ^ frame_data[1];"));
    let top = fs::read_to_string(out.join("verilog_code").join("transmitter.v")).unwrap();
    assert!(top.contains("encoder_input <= adc_data[1:0];"));
    let tx = fs::read_to_string(out.join("verilog_code").join("tx.v")).unwrap();
    assert!(tx.contains("if (count == 12)"));
}

#[test]
fn test_mapping_report_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    let h = write_matrix(dir.path(), "H.txt", "1010\n1101\n");
    let out = dir.path().join("build");
    let config = GeneratorConfig::default()
        .with_mapping_report(true)
        .with_output_dir("rtl");

    let report = generate(&h, &out, &LoadOptions::default(), &config).unwrap();
    assert_eq!(report.files.len(), 7);

    let json = fs::read_to_string(out.join("rtl").join("encoder_mapping.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["k"], 2);
    assert_eq!(value["n"], 4);
    assert_eq!(value["parity"], serde_json::json!([[0], [0, 1]]));

    let mapping: EncoderMapping = serde_json::from_str(&json).unwrap();
    assert_eq!(mapping.parity_sets(), &[vec![0], vec![0, 1]]);
    assert_eq!(mapping.encode(&[true, false]).unwrap(), [true, true, true, false]);
}

#[test]
fn test_malformed_mapping_report_is_rejected() {
    let oversized = r#"{"k": 5, "n": 3, "parity": []}"#;
    assert!(serde_json::from_str::<EncoderMapping>(oversized).is_err());
    let out_of_range = r#"{"k": 2, "n": 4, "parity": [[0], [0, 2]]}"#;
    assert!(serde_json::from_str::<EncoderMapping>(out_of_range).is_err());
}

#[test]
fn test_rank_deficient_matrix_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let h = write_matrix(dir.path(), "H.txt", "1100\n1100\n");
    let out = dir.path().join("build");

    let err = generate(&h, &out, &LoadOptions::default(), &GeneratorConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        TxError::Matrix(LdpcError::RankDeficiency { row: 0, column: 2 })
    ));
    assert!(!out.join("verilog_code").exists());
    if out.exists() {
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_matrix(dir.path(), "good.txt", "1010\n1101\n");
    let bad = write_matrix(dir.path(), "bad.txt", "1100\n1100\n");
    let out = dir.path().join("build");
    let config = GeneratorConfig::default();

    generate(&good, &out, &LoadOptions::default(), &config).unwrap();
    assert!(generate(&bad, &out, &LoadOptions::default(), &config).is_err());
    assert!(out.join("verilog_code").join("encoder.v").exists());
}

#[test]
fn test_random_codes_satisfy_parity_checks() {
    use ldpctx::{derive_encoder, Gf2Matrix};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;
    while checked < 20 {
        let (p, k) = (rng.gen_range(1..6), rng.gen_range(1..8));
        let h = Gf2Matrix::from_fn(p, p + k, |_, _| rng.gen_bool(0.5));
        let Ok(derived) = derive_encoder(&h) else {
            continue;
        };
        for _ in 0..8 {
            let message: Vec<bool> = (0..k).map(|_| rng.gen_bool(0.5)).collect();
            let codeword = derived.mapping.encode(&message).unwrap();
            assert_eq!(&codeword[p..], &message[..]);
            // codeword is parity-first; H expects information-first
            let reordered: Vec<bool> = codeword[p..].iter().chain(&codeword[..p]).copied().collect();
            for row in h.rows() {
                assert!(!ldpctx_core::dot(row, &reordered));
            }
        }
        checked += 1;
    }
}
