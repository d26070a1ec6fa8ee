//! Optimal parser: the core of the TSCrunch port.
//!
//! Ties together the zero-run selector, match finder, cost model, graph
//! builder, shortest-path search, and emitter into the single entry point
//! `compress`. Equivalent to `crunch` (tscrunch.c:506–833), minus the file
//! I/O and CLI argument handling that wraps it in `main`.

pub mod cost;
pub mod decode;
pub mod dijkstra;
pub mod emit;
pub mod graph;
pub mod inplace;
pub mod match_finder;
pub mod types;
pub mod zero_run;

pub use types::Token;

use dijkstra::shortest_path;
use emit::encode_tokens;
use graph::build_graph;
use inplace::build_inplace_output;
use zero_run::find_optimal_zero;

/// Which of the three payload shapes `compress` should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressMode {
    /// The bare token stream: `R - 1`, tokens, terminator.
    Raw,
    /// Token stream without the leading `R - 1` byte, to be stitched behind
    /// a self-extractor boot stub that already knows `R`.
    Sfx,
    /// Safety-trimmed in-place stream with its own 4-byte header.
    /// `addr` is the original PRG load address, echoed verbatim into the
    /// header so the boot stub can relocate the result.
    InPlace { addr: [u8; 2] },
}

/// Failure modes of the core parser. Distinct from I/O or CLI usage errors,
/// which are reported at a higher layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrunchError {
    /// `compress` was given a zero-length input.
    EmptyInput,
    /// The shortest-path search produced no route from start to end. Not
    /// reachable with the current graph builder (every position has at
    /// least one literal edge to the next), kept for parity with the
    /// original's own defensive check.
    NoPath,
    /// Reserved for allocation-failure paths exercised only under
    /// `#[cfg(test)]` fault injection; ordinary allocation failure aborts
    /// the process in safe Rust rather than returning an error.
    Alloc,
}

impl std::fmt::Display for CrunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            CrunchError::EmptyInput => "input is empty",
            CrunchError::NoPath => "no path through the parse graph",
            CrunchError::Alloc => "allocation failed",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CrunchError {}

/// Result of a successful `compress` call.
#[derive(Debug, Clone)]
pub struct CompressedOutput {
    /// The encoded payload, shaped according to the requested
    /// [`CompressMode`].
    pub bytes: Vec<u8>,
    /// The zero-run length chosen for this input, so callers can patch
    /// boot-stub headers without re-deriving it.
    pub optimal_run: usize,
}

/// Compress `input` into `mode`'s payload shape.
///
/// `CompressMode::InPlace` treats the final byte of `input` as the reserved
/// remainder byte (tscrunch.c:515–518) and parses only the bytes before it.
///
/// Equivalent to `crunch`.
pub fn compress(input: &[u8], mode: CompressMode) -> Result<CompressedOutput, CrunchError> {
    if input.is_empty() {
        return Err(CrunchError::EmptyInput);
    }

    let is_inplace = matches!(mode, CompressMode::InPlace { .. });
    let (work, remainder_byte) = if is_inplace {
        (&input[..input.len() - 1], input[input.len() - 1])
    } else {
        (input, 0u8)
    };

    let optimal_run = find_optimal_zero(work);
    let graph = build_graph(work, optimal_run);
    let tokens = shortest_path(&graph).ok_or(CrunchError::NoPath)?;

    let bytes = match mode {
        CompressMode::InPlace { addr } => {
            build_inplace_output(&tokens, work, optimal_run, remainder_byte, addr)
        }
        CompressMode::Sfx => encode_tokens(&tokens, work, optimal_run, true),
        CompressMode::Raw => encode_tokens(&tokens, work, optimal_run, false),
    };

    Ok(CompressedOutput { bytes, optimal_run })
}
