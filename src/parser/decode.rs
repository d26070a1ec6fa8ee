//! Reference decoder for the raw token-stream format `encode_tokens` produces.
//!
//! The original ships no decoder at all — decompression is the job of the
//! 6502 stub `crunch` stitches onto sfx/in-place output. This module exists
//! purely so the Rust port can assert its own encoder round-trips, and to
//! give the fuzz targets something to check output against.

use super::types::{LITERAL_MASK, LZ2_SIZE, LZ_MASK, RLE_MASK, TERMINATOR};

/// Error decoding a raw token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream ended before a [`TERMINATOR`] byte was found.
    Truncated,
    /// A back-reference pointed further back than any byte already decoded.
    OffsetOutOfRange,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            DecodeError::Truncated => "token stream ended without a terminator",
            DecodeError::OffsetOutOfRange => "back-reference offset exceeds decoded output",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for DecodeError {}

/// Decode a raw token stream produced by `encode_tokens(.., sfx: false)`:
/// leading `R - 1` byte, tokens, terminator.
pub fn decode_raw(stream: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if stream.is_empty() {
        return Err(DecodeError::Truncated);
    }
    let run = stream[0] as usize + 1;
    decode_tokens(&stream[1..], run)
}

/// Decode a sfx-mode token stream (no leading `R - 1` byte); `run` is the
/// zero-run length the boot stub already knows.
pub fn decode_sfx(stream: &[u8], run: usize) -> Result<Vec<u8>, DecodeError> {
    decode_tokens(stream, run)
}

fn decode_tokens(mut stream: &[u8], run: usize) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    loop {
        let tag = *stream.first().ok_or(DecodeError::Truncated)?;
        if tag == TERMINATOR {
            return Ok(out);
        }

        if tag & 0x80 == 0 {
            // Literal or LZ2: bit 0x40 picks between them in the real encoder?
            // No: LITERAL_MASK and LZ2_MASK are both 0, distinguished only by
            // value range. A literal's size is 1..=31; an LZ2 byte encodes
            // `127 - offset` with offset in 1..=94, i.e. 33..=126. The ranges
            // don't overlap, so the tag value alone disambiguates them.
            if tag as usize <= super::types::LONGEST_LITERAL {
                let size = tag as usize;
                let bytes = stream.get(1..1 + size).ok_or(DecodeError::Truncated)?;
                out.extend_from_slice(bytes);
                stream = &stream[1 + size..];
            } else {
                let offset = 127 - tag as usize;
                if offset > out.len() {
                    return Err(DecodeError::OffsetOutOfRange);
                }
                for i in 0..LZ2_SIZE {
                    let byte = out[out.len() - offset + i];
                    out.push(byte);
                }
                stream = &stream[1..];
            }
        } else if tag == RLE_MASK {
            // Could be a zero-run or an RLE with size-1 == 0 encoded as 0;
            // the encoder never emits an RLE with size < MIN_RLE, and a
            // zero-run's payload is exactly this one byte, so a lone
            // `RLE_MASK` with no following literal byte is always a
            // zero-run of the stream's chosen `run` length.
            for _ in 0..run {
                out.push(0);
            }
            stream = &stream[1..];
        } else if tag & 0x01 != 0 {
            let size = (((tag & 0x7f) >> 1) as usize) + 1;
            let byte = *stream.get(1).ok_or(DecodeError::Truncated)?;
            for _ in 0..size {
                out.push(byte);
            }
            stream = &stream[2..];
        } else if tag & LZ_MASK != 0 {
            if tag & 0x02 != 0 {
                let size = (((tag & 0x7f) >> 2) as usize) + 1;
                let offset = *stream.get(1).ok_or(DecodeError::Truncated)? as usize;
                copy_back(&mut out, offset, size)?;
                stream = &stream[2..];
            } else {
                let lo = *stream.get(1).ok_or(DecodeError::Truncated)?;
                let hi = *stream.get(2).ok_or(DecodeError::Truncated)?;
                let size_lsb = (hi >> 7) & 1;
                let size = (((tag & 0x7f) >> 2) as usize) * 2 + size_lsb as usize + 1;
                let neg = ((hi & 0x7f) as u16) << 8 | lo as u16;
                let offset = 0u16.wrapping_sub(neg) as usize;
                copy_back(&mut out, offset, size)?;
                stream = &stream[3..];
            }
        } else {
            unreachable!("tag {tag:#x} matches no known token encoding")
        }
    }
}

fn copy_back(out: &mut Vec<u8>, offset: usize, size: usize) -> Result<(), DecodeError> {
    if offset > out.len() || offset == 0 {
        return Err(DecodeError::OffsetOutOfRange);
    }
    for i in 0..size {
        let byte = out[out.len() - offset + i];
        out.push(byte);
    }
    Ok(())
}
