#![no_main]

use libfuzzer_sys::fuzz_target;
use tscrunch::parser::{compress, CompressMode};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let _ = compress(data, CompressMode::Raw);
    let _ = compress(data, CompressMode::Sfx);
    let _ = compress(data, CompressMode::InPlace { addr: [0x01, 0x08] });
});
