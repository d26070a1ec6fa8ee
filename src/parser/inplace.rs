//! In-place safety pass and in-place payload assembly.
//!
//! Corresponds to the `opt->inplace` branch of `crunch` (tscrunch.c:740–811).
//!
//! In-place output must decompress by writing into the same buffer it reads
//! from, cursor walking forward. That's only safe past the point where every
//! suffix of the token stream has emitted at least as many bytes as it
//! consumes — otherwise the write cursor could overtake bytes the read
//! cursor hasn't consumed yet. `safety` is the earliest token index at which
//! that invariant holds for the whole remaining suffix; everything before it
//! is left uncompressed as a literal "remainder" tail instead.

use super::emit::emit_token;
use super::types::{Token, TERMINATOR};

/// Finished in-place payload: `addr` (2-byte PRG load address) + `R - 1` +
/// one header byte + the safety-trimmed token stream + terminator + the
/// rest of the uncompressed remainder.
///
/// `src` is the already-truncated working buffer (the original input minus
/// its final byte, which was reserved as `remainder_byte` before parsing —
/// see `crunch`, tscrunch.c:515–518). `optimal_run` and `tokens` are the
/// values `find_optimal_zero` and the shortest-path search produced over
/// that same truncated buffer.
///
/// Equivalent to the in-place branch of `crunch`.
pub fn build_inplace_output(
    tokens: &[Token],
    src: &[u8],
    optimal_run: usize,
    remainder_byte: u8,
    addr: [u8; 2],
) -> Vec<u8> {
    let token_count = tokens.len();
    let mut safety = token_count;
    let mut segment_uncrunched = 0usize;
    let mut segment_crunched = 0usize;
    let mut total_uncrunched = 0usize;

    for i in (0..token_count).rev() {
        segment_crunched += tokens[i].payload_len();
        segment_uncrunched += tokens[i].size();
        if segment_uncrunched <= segment_crunched {
            safety = i;
            total_uncrunched += segment_uncrunched;
            segment_uncrunched = 0;
            segment_crunched = 0;
        }
    }

    let work_len = src.len();
    let mut remainder = Vec::with_capacity(total_uncrunched + 1);
    if total_uncrunched > 0 {
        remainder.extend_from_slice(&src[work_len - total_uncrunched..]);
    }
    remainder.push(remainder_byte);

    let mut out = Vec::new();
    for token in &tokens[..safety] {
        emit_token(&mut out, src, token);
    }
    out.push(TERMINATOR);
    if remainder.len() > 1 {
        out.extend_from_slice(&remainder[1..]);
    }

    let mut final_out = Vec::with_capacity(4 + out.len());
    final_out.extend_from_slice(&addr);
    final_out.push((optimal_run - 1) as u8);
    final_out.push(remainder[0]);
    final_out.extend_from_slice(&out);
    final_out
}
