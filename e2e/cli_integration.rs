//! End-to-end coverage of the `tscrunch` binary: real files on disk, the
//! actual argv parsing, and the stitched output shapes.

use std::fs;
use std::process::Command;

use tscrunch::parser::decode::decode_raw;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_tscrunch")
}

#[test]
fn compresses_a_plain_file_round_trippably() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("in.bin");
    let outfile = dir.path().join("out.tsc");
    fs::write(&infile, b"the quick brown fox jumps over the lazy dog".repeat(4)).unwrap();

    let status = Command::new(bin())
        .args(["-q", infile.to_str().unwrap(), outfile.to_str().unwrap()])
        .status()
        .expect("spawns tscrunch");
    assert!(status.success());

    let compressed = fs::read(&outfile).unwrap();
    let decoded = decode_raw(&compressed).expect("decodes");
    assert_eq!(decoded, fs::read(&infile).unwrap());
}

#[test]
fn prg_mode_strips_the_load_address_before_crunching() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("in.prg");
    let outfile = dir.path().join("out.tsc");
    let mut prg = vec![0x01, 0x08];
    prg.extend(b"hello hello hello hello hello hello hello hello".iter());
    fs::write(&infile, &prg).unwrap();

    let status = Command::new(bin())
        .args(["-q", "-p", infile.to_str().unwrap(), outfile.to_str().unwrap()])
        .status()
        .expect("spawns tscrunch");
    assert!(status.success());

    let compressed = fs::read(&outfile).unwrap();
    let decoded = decode_raw(&compressed).expect("decodes");
    assert_eq!(decoded, prg[2..].to_vec());
}

#[test]
fn sfx_flag_produces_a_file_larger_than_the_bare_token_stream() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("in.prg");
    let outfile = dir.path().join("out.prg");
    let mut prg = vec![0x01, 0x08];
    prg.extend(std::iter::repeat(b'z').take(200));
    fs::write(&infile, &prg).unwrap();

    let status = Command::new(bin())
        .args(["-q", "-x", "$0810", infile.to_str().unwrap(), outfile.to_str().unwrap()])
        .status()
        .expect("spawns tscrunch");
    assert!(status.success());

    let sfx_file = fs::read(&outfile).unwrap();
    assert_eq!(&sfx_file[0..2], &[0x01, 0x08]);
    assert!(sfx_file.len() > 200);
}

#[test]
fn missing_input_file_is_a_clean_failure() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(bin())
        .args([
            "-q",
            dir.path().join("missing.bin").to_str().unwrap(),
            dir.path().join("out.tsc").to_str().unwrap(),
        ])
        .status()
        .expect("spawns tscrunch");
    assert!(!status.success());
}

#[test]
fn conflicting_sfx_flags_are_rejected_before_touching_any_file() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("in.bin");
    fs::write(&infile, b"abc").unwrap();
    let outfile = dir.path().join("out.tsc");

    let status = Command::new(bin())
        .args([
            "-x",
            "$0810",
            "-x2",
            "$0810",
            infile.to_str().unwrap(),
            outfile.to_str().unwrap(),
        ])
        .status()
        .expect("spawns tscrunch");
    assert!(!status.success());
    assert!(!outfile.exists());
}
