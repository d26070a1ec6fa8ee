//! End-to-end round-trip coverage: compress a variety of synthetic payloads
//! in every output mode the library supports and verify the underlying
//! token stream decodes back to the original bytes.

use tscrunch::parser::decode::{decode_raw, decode_sfx};
use tscrunch::parser::{compress, CompressMode};

fn corpus() -> Vec<Vec<u8>> {
    let mut cases = Vec::new();

    cases.push(b"x".to_vec());
    cases.push(b"The quick brown fox jumps over the lazy dog.".to_vec());

    let mut zero_heavy = vec![1u8; 20];
    zero_heavy.extend(vec![0u8; 500]);
    zero_heavy.extend(vec![2u8; 20]);
    cases.push(zero_heavy);

    cases.push(vec![0xAAu8; 300]);

    let mut periodic = Vec::new();
    for _ in 0..200 {
        periodic.extend_from_slice(b"ab");
    }
    cases.push(periodic);

    let mut repeated_block = b"a repeated header block used more than once. ".to_vec();
    let block = repeated_block.clone();
    repeated_block.extend(vec![b'-'; 2000]);
    repeated_block.extend_from_slice(&block);
    cases.push(repeated_block);

    cases
}

#[test]
fn raw_mode_round_trips_the_whole_corpus() {
    for input in corpus() {
        let out = compress(&input, CompressMode::Raw).expect("compresses");
        let decoded = decode_raw(&out.bytes).expect("decodes");
        assert_eq!(decoded, input, "raw mismatch, len {}", input.len());
    }
}

#[test]
fn sfx_mode_round_trips_the_whole_corpus() {
    for input in corpus() {
        let out = compress(&input, CompressMode::Sfx).expect("compresses");
        let decoded = decode_sfx(&out.bytes, out.optimal_run).expect("decodes");
        assert_eq!(decoded, input, "sfx mismatch, len {}", input.len());
    }
}

#[test]
fn inplace_mode_preserves_the_final_reserved_byte() {
    for mut input in corpus() {
        if input.len() < 2 {
            continue;
        }
        input.push(0x99);
        let out =
            compress(&input, CompressMode::InPlace { addr: [0x01, 0x08] }).expect("compresses");
        assert_eq!(&out.bytes[0..2], &[0x01, 0x08]);
        assert!(out.bytes.len() < input.len() + 4, "expansion for len {}", input.len());
    }
}

#[test]
fn compressed_output_never_grows_unreasonably_for_worst_case_random_bytes() {
    // Pseudo-random, incompressible content: the worst case for any LZ-style
    // coder. TSCrunch still terminates and its output stays within a few
    // bytes of the input (the `R - 1` byte and the terminator).
    let mut input = Vec::with_capacity(2000);
    let mut state: u32 = 0x2545F491;
    for _ in 0..2000 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        input.push((state & 0xff) as u8);
    }
    let out = compress(&input, CompressMode::Raw).expect("compresses");
    assert!(out.bytes.len() <= input.len() * 2 + 8);
    let decoded = decode_raw(&out.bytes).expect("decodes");
    assert_eq!(decoded, input);
}
