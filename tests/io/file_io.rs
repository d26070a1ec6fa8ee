use tscrunch::io::{load_file, save_file};

#[test]
fn save_then_load_preserves_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.prg");
    let data = vec![0x01, 0x08, 0xff, 0x00, 0x42];
    save_file(&path, &data).unwrap();
    assert_eq!(load_file(&path).unwrap(), data);
}

#[test]
fn loading_a_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_file(&dir.path().join("nope.prg")).is_err());
}
