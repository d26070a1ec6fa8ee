//! PRG load-address header handling.
//!
//! A Commodore 64 PRG file's first two bytes are a little-endian load
//! address. Equivalent to the `-p` handling woven through `main()`
//! (tscrunch.c:889–928): the header is stripped before the buffer reaches
//! the parser and reattached (or patched into an sfx/in-place header) on
//! the way out.

/// Failure splitting a PRG header off a buffer that is too short to hold one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooShortForPrgHeader;

impl std::fmt::Display for TooShortForPrgHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "input is too short to contain a 2-byte PRG load address")
    }
}

impl std::error::Error for TooShortForPrgHeader {}

/// Split `data`'s leading 2-byte little-endian load address off the rest of
/// the buffer.
pub fn strip_header(data: &[u8]) -> Result<([u8; 2], &[u8]), TooShortForPrgHeader> {
    if data.len() < 2 {
        return Err(TooShortForPrgHeader);
    }
    Ok(([data[0], data[1]], &data[2..]))
}

/// Prepend `addr` as a little-endian 2-byte header in front of `payload`.
pub fn prepend_header(addr: [u8; 2], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + payload.len());
    out.extend_from_slice(&addr);
    out.extend_from_slice(payload);
    out
}
