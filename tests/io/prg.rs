use tscrunch::io::prg::{prepend_header, strip_header};

#[test]
fn strip_and_prepend_round_trip() {
    let file = vec![0x01, 0x08, 1, 2, 3, 4];
    let (addr, body) = strip_header(&file).unwrap();
    assert_eq!(addr, [0x01, 0x08]);
    assert_eq!(prepend_header(addr, body), file);
}

#[test]
fn one_byte_input_cannot_hold_a_header() {
    assert!(strip_header(&[0x01]).is_err());
}
