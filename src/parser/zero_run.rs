//! Zero-run length selector.
//!
//! Corresponds to `find_optimal_zero` (tscrunch.c:249–293). Picks the single
//! zero-run length `R` (`2 <= R <= 256`) most profitable to fold into a
//! one-byte [`super::types::Token::ZeroRun`] token, by scanning the whole
//! input once and scoring each observed run length by `r * count(r)^1.1`.

use super::types::LONGEST_RLE;

/// Histogram width: run lengths `0..=256` are tracked (lengths below
/// `MIN_RLE` never score, but the C source sizes its arrays `[257]` and this
/// mirrors that exactly).
const HISTOGRAM_LEN: usize = 257;

/// Minimum run length worth recording. Equivalent to `MINRLE`.
const MIN_RUN: usize = 2;

/// Scan `src` and return the optimal zero-run length `R`.
///
/// Equivalent to `find_optimal_zero`. Falls back to [`LONGEST_RLE`] (64) when
/// no qualifying zero run exists anywhere in `src`.
pub fn find_optimal_zero(src: &[u8]) -> usize {
    let len = src.len();
    let mut counts = [0u64; HISTOGRAM_LEN];
    let mut first_seen = [-1i64; HISTOGRAM_LEN];
    let mut order: i64 = 0;

    let mut i = 0usize;
    while i + 1 < len {
        if src[i] == 0 {
            let mut j = i + 1;
            while j < len && src[j] == 0 && (j - i) < 256 {
                j += 1;
            }
            let run = j - i;
            if (MIN_RUN..=256).contains(&run) {
                if first_seen[run] < 0 {
                    first_seen[run] = order;
                    order += 1;
                }
                counts[run] += 1;
            }
            i = j;
        } else {
            i += 1;
        }
    }

    let mut best_run = LONGEST_RLE;
    let mut best_score = 0.0f64;
    let mut best_first = i64::MAX;

    for run in MIN_RUN..=256 {
        if counts[run] > 0 {
            let score = run as f64 * (counts[run] as f64).powf(1.1);
            if score > best_score || (score == best_score && first_seen[run] < best_first) {
                best_score = score;
                best_run = run;
                best_first = first_seen[run];
            }
        }
    }

    best_run
}
