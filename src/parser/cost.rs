//! Token cost model.
//!
//! Corresponds to `token_cost` (tscrunch.c:375–396). Costs are scaled so the
//! high bits count emitted bytes and the low bits break ties between
//! same-byte-count tokens in favor of the one consuming more source bytes
//! (longer match preferred at equal output size).

use super::types::{Token, LONGEST_LITERAL};

/// Scale factor separating byte-count from the tie-break remainder. Matches
/// `mdiv` in the source, `LONGESTLITERAL * 65536`.
const SCALE: i64 = LONGEST_LITERAL as i64 * 65536;

/// Edge weight for `token` in the shortest-path graph.
///
/// Equivalent to `token_cost`.
pub fn token_cost(token: &Token) -> i64 {
    let size = token.size() as i64;
    match *token {
        Token::Lz { .. } => {
            if token.lz_is_long() {
                SCALE * 3 + 138 - size
            } else {
                SCALE * 2 + 134 - size
            }
        }
        Token::Rle { .. } => SCALE * 2 + 128 - size,
        Token::ZeroRun { .. } => SCALE,
        Token::Lz2 { .. } => SCALE + 132 - size,
        Token::Literal { .. } => SCALE * (size + 1) + 130 - size,
    }
}
