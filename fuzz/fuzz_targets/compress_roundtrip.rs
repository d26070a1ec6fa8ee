#![no_main]

use libfuzzer_sys::fuzz_target;
use tscrunch::parser::decode::decode_raw;
use tscrunch::parser::{compress, CompressMode};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let Ok(out) = compress(data, CompressMode::Raw) else {
        return;
    };
    let decoded = decode_raw(&out.bytes).expect("a stream this crate emitted must decode");
    assert_eq!(decoded, data);
});
