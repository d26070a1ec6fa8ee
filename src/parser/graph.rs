//! Parse graph construction.
//!
//! Corresponds to the per-position candidate-building loop inside `crunch`
//! (tscrunch.c:529–651). For each source position, at most one token
//! occupies each possible output size `1..=256`: LZ candidates claim every
//! size longer than the RLE run at that position, RLE claims the rest up to
//! its own cap, LZ2 and the chosen zero-run length each override whatever
//! occupies their fixed size, and literals fill anything still unclaimed.
//! This keeps the graph's out-degree at each position bounded by the
//! longest candidate rather than by the full token-type count.

use super::cost::token_cost;
use super::match_finder::{lz2_offset, lz_best, rle_length, zerorun_at};
use super::types::{
    Token, LONGEST_LITERAL, LONGEST_LONG_LZ, LONGEST_RLE, LZ2_SIZE, MIN_LZ, MIN_RLE,
};

/// Widest size the per-position candidate table tracks. One more than the
/// longest possible zero-run (256), matching the C source's `tokens[257]`.
const MAX_TOKEN_SIZE: usize = 256;

/// A graph edge: `src[i..i+token.size()]` encoded as `token`, landing on
/// `dest = i + token.size()`, weighted by [`token_cost`].
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub dest: usize,
    pub token: Token,
    pub cost: i64,
}

/// Build the adjacency list for every position `0..=src.len()`.
/// `optimal_run` is the zero-run length selected by
/// [`super::zero_run::find_optimal_zero`].
///
/// Equivalent to the edge-building loop at the top of `crunch`.
pub fn build_graph(src: &[u8], optimal_run: usize) -> Vec<Vec<Edge>> {
    let work_len = src.len();
    let mut graph: Vec<Vec<Edge>> = vec![Vec::new(); work_len + 1];

    for i in 0..work_len {
        let mut slots: [Option<Token>; MAX_TOKEN_SIZE + 1] = [None; MAX_TOKEN_SIZE + 1];
        let mut max_size = 0usize;

        let rle_size = rle_length(src, i);
        let rle_cap = rle_size.min(LONGEST_RLE);

        let (mut lz_size, lz_offset) = if rle_cap < LONGEST_LONG_LZ - 1 {
            let minlz = (rle_cap + 1).max(MIN_LZ);
            lz_best(src, i, minlz)
        } else {
            (1, 0)
        };

        while lz_size >= MIN_LZ && lz_size > rle_cap {
            slots[lz_size] = Some(Token::Lz { pos: i, size: lz_size, offset: lz_offset });
            max_size = max_size.max(lz_size);
            lz_size -= 1;
        }

        if rle_size > LONGEST_RLE {
            slots[LONGEST_RLE] = Some(Token::Rle { pos: i, size: LONGEST_RLE, byte: src[i] });
            max_size = max_size.max(LONGEST_RLE);
        } else {
            for size in (MIN_RLE..=rle_size).rev() {
                slots[size] = Some(Token::Rle { pos: i, size, byte: src[i] });
                max_size = max_size.max(size);
            }
        }

        if let Some(offset) = lz2_offset(src, i) {
            slots[LZ2_SIZE] = Some(Token::Lz2 { pos: i, offset });
            max_size = max_size.max(LZ2_SIZE);
        }

        if optimal_run <= MAX_TOKEN_SIZE && zerorun_at(src, i, optimal_run) {
            slots[optimal_run] = Some(Token::ZeroRun { pos: i, size: optimal_run });
            max_size = max_size.max(optimal_run);
        }

        let lit_max = LONGEST_LITERAL.min(work_len - i);
        for size in 1..=lit_max {
            if slots[size].is_none() {
                slots[size] = Some(Token::Literal { pos: i, size });
                max_size = max_size.max(size);
            }
        }

        for size in 1..=max_size {
            if let Some(token) = slots[size] {
                if i + size > work_len {
                    continue;
                }
                graph[i].push(Edge { dest: i + size, token, cost: token_cost(&token) });
            }
        }
    }

    graph
}
