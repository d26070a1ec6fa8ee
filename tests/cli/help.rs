use tscrunch::cli::help::usage_text;

#[test]
fn usage_names_the_program_and_version() {
    let text = usage_text();
    assert!(text.contains("tscrunch"));
    assert!(text.contains("1.3.1"));
}
