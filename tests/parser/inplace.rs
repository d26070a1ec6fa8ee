//! Crate-level coverage of `CompressMode::InPlace` header layout.

use tscrunch::parser::{compress, CompressMode};

#[test]
fn inplace_header_starts_with_the_echoed_addr() {
    let input = b"hello world, hello world, hello world, hello world!!".to_vec();
    let out = compress(&input, CompressMode::InPlace { addr: [0x01, 0x08] }).expect("compresses");
    assert_eq!(&out.bytes[0..2], &[0x01, 0x08]);
}

#[test]
fn inplace_header_carries_run_minus_one_and_a_remainder_byte() {
    let input = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa!".to_vec();
    let out = compress(&input, CompressMode::InPlace { addr: [0, 0] }).expect("compresses");
    assert_eq!(out.bytes[2], (out.optimal_run - 1) as u8);
    assert!(out.bytes.len() >= 4);
}

#[test]
fn trivial_two_byte_input_still_produces_a_valid_header() {
    let input = b"ab".to_vec();
    let out = compress(&input, CompressMode::InPlace { addr: [0x34, 0x12] }).expect("compresses");
    assert_eq!(&out.bytes[0..2], &[0x34, 0x12]);
}
