//! Crate-level coverage of `CompressMode::Sfx` shape and the boot-stub
//! stitching helpers in `tscrunch::io::boot`.

use tscrunch::io::boot::{self, BootParams, SfxVariant};
use tscrunch::parser::{compress, CompressMode};

#[test]
fn sfx_payload_has_no_leading_run_byte() {
    let input = b"abababababababababababababab".to_vec();
    let raw = compress(&input, CompressMode::Raw).expect("compresses");
    let sfx = compress(&input, CompressMode::Sfx).expect("compresses");
    assert_eq!(sfx.bytes.len(), raw.bytes.len() - 1);
    assert_eq!(&sfx.bytes[..], &raw.bytes[1..]);
}

#[test]
fn transfer_address_uses_the_full_stitched_file_length() {
    let input = b"the quick brown fox jumps over the lazy dog".to_vec();
    let compressed = compress(&input, CompressMode::Sfx).expect("compresses");

    let boot_len = boot::stub_len(SfxVariant::Normal, false);
    let file_len = (boot_len + compressed.bytes.len()) as u16;
    let transfer = boot::transfer_addr(file_len);
    assert_eq!(transfer, file_len.wrapping_add(0x6ff));

    let stub = boot::build_boot_stub(
        SfxVariant::Normal,
        false,
        BootParams {
            transfer_addr: transfer,
            start_addr: boot::start_addr(compressed.bytes.len() as u16),
            decrunch_addr: 0x0801,
            jump_addr: 0x0810,
            run_minus_one: (compressed.optimal_run - 1) as u8,
        },
    );
    assert_eq!(stub.len(), boot_len);
    assert_eq!(&stub[0..2], &[0x01, 0x08]);
}

#[test]
fn blank_screen_variant_is_five_bytes_longer() {
    assert_eq!(
        boot::stub_len(SfxVariant::Normal, true),
        boot::stub_len(SfxVariant::Normal, false) + 5
    );
}

#[test]
fn stack_variant_has_no_blank_screen_counterpart_size_change() {
    assert_eq!(boot::stub_len(SfxVariant::Stack, true), boot::stub_len(SfxVariant::Stack, false));
}
