//! Whole-file load/save.
//!
//! Equivalent to `load_file`/`save_file`/`file_size` (tscrunch.c:99–161).
//! Unlike the teacher's streaming, sentinel-aware (`stdin`/`stdout`/`/dev/null`)
//! I/O layer, TSCrunch's own CLI only ever reads one real file into memory
//! and writes one real file back out — inputs are bounded to roughly 64 KiB
//! (SPEC_FULL.md §5) so there is no case for streaming here.

use std::fs;
use std::io;
use std::path::Path;

/// Read the entire contents of `path` into memory.
///
/// Equivalent to `load_file`.
pub fn load_file(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Write `data` to `path`, replacing any existing file.
///
/// Equivalent to `save_file`.
pub fn save_file(path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(path, data)
}
