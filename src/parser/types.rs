//! Token model and format constants for the TSCrunch bitstream.
//!
//! Corresponds to `tscrunch.c` (v1.3.1) lines 16–48:
//!   - the `#define` block of size/offset limits
//!   - `TokenType` / `Token`
//!
//! The original C `Token` is a single flat struct with a `TokenType`
//! discriminant and fields that are only meaningful for some variants
//! (`offset` unused for `Literal`, `rlebyte` unused for everything but
//! `Rle`). Here each variant carries only the fields it needs.

// ─────────────────────────────────────────────────────────────────────────────
// Format limits  (tscrunch.c:16–25)
// ─────────────────────────────────────────────────────────────────────────────

/// Longest RLE run the bitstream can encode in one token.
pub const LONGEST_RLE: usize = 64;
/// Cap used by the match finder when measuring a raw run length: one past
/// [`LONGEST_RLE`], so the caller can tell "exactly at the cap" apart from
/// "longer than representable".
pub const LONGESTRLE_PLUS_ONE: usize = LONGEST_RLE + 1;
/// Longest LZ match using the long (3-byte) encoding.
pub const LONGEST_LONG_LZ: usize = 64;
/// Longest LZ match using the short (2-byte) encoding.
pub const LONGEST_LZ: usize = 32;
/// Longest literal run encodable in a single token.
pub const LONGEST_LITERAL: usize = 31;
/// Minimum RLE run length.
pub const MIN_RLE: usize = 2;
/// Minimum LZ match length.
pub const MIN_LZ: usize = 3;
/// Offsets below this value use the short LZ encoding.
pub const LZ_OFFSET: usize = 256;
/// Largest offset representable by the long LZ encoding.
pub const LONG_LZ_OFFSET: usize = 32767;
/// Largest offset representable by the LZ2 encoding.
pub const LZ2_OFFSET: usize = 94;
/// Fixed size of an LZ2 token.
pub const LZ2_SIZE: usize = 2;

/// Sentinel first byte marking end of stream: a literal with an
/// out-of-range size field (`LONGEST_LITERAL + 1`).
pub const TERMINATOR: u8 = (LONGEST_LITERAL + 1) as u8;

// ─────────────────────────────────────────────────────────────────────────────
// Bitstream tag masks  (tscrunch.c:27–30)
// ─────────────────────────────────────────────────────────────────────────────

/// Tag bits for an RLE token's first byte (also the lone `ZeroRun` byte).
pub const RLE_MASK: u8 = 0x81;
/// Tag bits for an LZ token's first byte.
pub const LZ_MASK: u8 = 0x80;
/// Tag bits for a literal token's first byte (zero: the size occupies the
/// low bits directly).
pub const LITERAL_MASK: u8 = 0x00;
/// Tag bits for an LZ2 token's byte (zero, same reasoning as `LITERAL_MASK`).
pub const LZ2_MASK: u8 = 0x00;

// ─────────────────────────────────────────────────────────────────────────────
// Token  (tscrunch.c:34–48)
// ─────────────────────────────────────────────────────────────────────────────

/// A single parse-graph edge label: one unit of the compressed token stream.
///
/// `pos` is the source position the token starts at; it is carried on every
/// variant because the emitter needs it to read raw bytes for `Literal` and
/// `Rle`, and because the in-place safety pass walks tokens independently of
/// the graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Raw passthrough of `size` bytes, `1 <= size <= 31`.
    Literal { pos: usize, size: usize },
    /// `size` repetitions of `byte`, `2 <= size <= 64`.
    Rle { pos: usize, size: usize, byte: u8 },
    /// `R` zero bytes, where `R` is the globally chosen optimal run length.
    ZeroRun { pos: usize, size: usize },
    /// Back-reference of `size` bytes from `offset` positions earlier.
    /// `offset <= 255` and `size <= 32` select the short encoding; anything
    /// with a larger offset or a longer size uses the long encoding.
    Lz { pos: usize, size: usize, offset: usize },
    /// Fixed 2-byte back-reference, `1 <= offset <= 94`.
    Lz2 { pos: usize, offset: usize },
}

impl Token {
    /// Number of source bytes this token consumes.
    #[inline]
    pub fn size(&self) -> usize {
        match *self {
            Token::Literal { size, .. } => size,
            Token::Rle { size, .. } => size,
            Token::ZeroRun { size, .. } => size,
            Token::Lz { size, .. } => size,
            Token::Lz2 { .. } => LZ2_SIZE,
        }
    }

    /// Source position this token starts at.
    #[inline]
    pub fn pos(&self) -> usize {
        match *self {
            Token::Literal { pos, .. }
            | Token::Rle { pos, .. }
            | Token::ZeroRun { pos, .. }
            | Token::Lz { pos, .. }
            | Token::Lz2 { pos, .. } => pos,
        }
    }

    /// `true` for an `Lz` token encoded in the long (3-byte) form.
    ///
    /// Equivalent to `lz_is_long` (tscrunch.c:371–373).
    #[inline]
    pub fn lz_is_long(&self) -> bool {
        match *self {
            Token::Lz { size, offset, .. } => offset >= LZ_OFFSET || size > LONGEST_LZ,
            _ => false,
        }
    }

    /// Number of bytes this token occupies in the encoded output.
    ///
    /// Equivalent to `payload_len` (tscrunch.c:398–413).
    #[inline]
    pub fn payload_len(&self) -> usize {
        match *self {
            Token::Literal { size, .. } => 1 + size,
            Token::Rle { .. } => 2,
            Token::ZeroRun { .. } => 1,
            Token::Lz2 { .. } => 1,
            Token::Lz { .. } => {
                if self.lz_is_long() {
                    3
                } else {
                    2
                }
            }
        }
    }
}
