// TSCrunch — optimal-parse byte compressor for the Commodore 64, Rust port

pub mod cli;
pub mod io;
pub mod parser;

pub use parser::{compress, CompressMode, CompressedOutput, CrunchError, Token};

/// Crate version string, matching [`cli::constants::VERSION`].
pub const TSCRUNCH_VERSION: &str = cli::constants::VERSION;
