use clap::Parser;
use ldpctx::cli::{run, Cli, Commands};
use ldpctx::MatrixFormat;
use std::ffi::OsString;
use std::fs;

#[test]
fn test_parses_generate_with_options() {
    let cli = Cli::try_parse_from([
        "ldpctx",
        "-v",
        "generate",
        "--path-mat",
        "H.alist",
        "--path-out",
        "build",
        "--format",
        "alist",
        "--transpose",
        "--enable-div-freq",
        "1000",
    ])
    .unwrap();

    assert!(cli.verbose);
    let Commands::Generate {
        path_mat,
        matrix,
        enable_div_freq,
        mapping_json,
        ..
    } = cli.command
    else {
        panic!("expected generate");
    };
    assert_eq!(path_mat.to_str(), Some("H.alist"));
    assert_eq!(matrix.format, Some(MatrixFormat::Alist));
    assert!(matrix.transpose);
    assert_eq!(enable_div_freq, Some(1000));
    assert!(!mapping_json);
}

#[test]
fn test_accepts_underscore_spellings() {
    let cli = Cli::try_parse_from([
        "ldpctx",
        "bitstream",
        "--source_path",
        "a.wav",
        "--save_path",
        "out",
    ])
    .unwrap();
    assert!(matches!(cli.command, Commands::Bitstream { .. }));
}

#[test]
fn test_generate_requires_paths() {
    assert!(Cli::try_parse_from(["ldpctx", "generate", "--path-mat", "H.json"]).is_err());
}

#[test]
fn test_runs_generate_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("H.txt"), "1010\n1101\n").unwrap();
    fs::write(
        dir.path().join("ldpctx.toml"),
        "[generator]\nenable_div_freq = 500\noutput_dir = \"hdl\"\n",
    )
    .unwrap();

    let path_mat = dir.path().join("H.txt");
    let path_out = dir.path().join("out");
    let config = dir.path().join("ldpctx.toml");
    let args: Vec<OsString> = vec![
        "ldpctx".into(),
        "generate".into(),
        "--path-mat".into(),
        path_mat.into_os_string(),
        "--path-out".into(),
        path_out.clone().into_os_string(),
        "--config".into(),
        config.into_os_string(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();
    run(cli).unwrap();

    let ecu = fs::read_to_string(path_out.join("hdl").join("Enable_Control_Unit.v")).unwrap();
    assert!(ecu.contains("parameter div_freq = 500;"));
}

#[test]
fn test_info_reads_matrix_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path_mat = dir.path().join("H.txt");
    fs::write(&path_mat, "1010\n1101\n").unwrap();

    let args: Vec<OsString> = vec![
        "ldpctx".into(),
        "info".into(),
        "--path-mat".into(),
        path_mat.into_os_string(),
    ];
    run(Cli::try_parse_from(args).unwrap()).unwrap();
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
