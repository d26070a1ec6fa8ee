//! Round-trip coverage of `compress` through the reference decoder, across
//! inputs shaped to exercise each token kind.

use tscrunch::parser::decode::decode_raw;
use tscrunch::parser::{compress, CompressMode, CrunchError};

fn assert_round_trips(input: &[u8]) {
    let out = compress(input, CompressMode::Raw).expect("compresses");
    let decoded = decode_raw(&out.bytes).expect("decodes");
    assert_eq!(decoded, input, "round trip mismatch for {input:?}");
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(compress(&[], CompressMode::Raw), Err(CrunchError::EmptyInput));
}

#[test]
fn single_byte_round_trips() {
    assert_round_trips(b"x");
}

#[test]
fn all_literal_text_round_trips() {
    assert_round_trips(b"the quick brown fox jumps over the lazy dog");
}

#[test]
fn long_repeated_byte_round_trips_as_rle() {
    assert_round_trips(&[0x42u8; 90]);
}

#[test]
fn zero_padding_round_trips_as_zero_run() {
    let mut input = vec![1u8; 10];
    input.extend(std::iter::repeat(0u8).take(200));
    input.extend(vec![2u8; 10]);
    assert_round_trips(&input);
}

#[test]
fn short_periodic_pattern_round_trips_via_lz2() {
    assert_round_trips(b"ababababababababababababab");
}

#[test]
fn long_range_repetition_round_trips_via_long_lz() {
    let mut input = vec![0x11u8; 40];
    input.extend(vec![0x55u8; 40_000]);
    input.extend_from_slice(&input[..40].to_vec());
    assert_round_trips(&input);
}

#[test]
fn mixed_content_round_trips() {
    let mut input = Vec::new();
    input.extend_from_slice(b"header section, all literal bytes here.");
    input.extend(vec![0u8; 30]);
    input.extend(vec![b'A'; 50]);
    input.extend_from_slice(b"header section, all literal bytes here.");
    assert_round_trips(&input);
}

#[test]
fn sfx_stream_decodes_with_the_chosen_run_length() {
    let input = b"abcabcabcabcabcabcabcabcabcabcabcabc".to_vec();
    let out = compress(&input, CompressMode::Sfx).expect("compresses");
    let decoded =
        tscrunch::parser::decode::decode_sfx(&out.bytes, out.optimal_run).expect("decodes");
    assert_eq!(decoded, input);
}
