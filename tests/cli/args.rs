//! Crate-level coverage of command-line option validation.

use tscrunch::cli::args::{normalize_argv, parse_jmp, ArgsError, Options, RawArgs, SfxVariant};
use clap::Parser;

fn options(extra: &[&str]) -> Result<Options, ArgsError> {
    let mut argv = vec!["tscrunch".to_string()];
    argv.extend(extra.iter().map(|s| s.to_string()));
    let raw = RawArgs::parse_from(normalize_argv(argv));
    Options::from_raw(raw)
}

#[test]
fn plain_compress_requests_raw_mode() {
    let opts = options(&["in.prg", "out.tsc"]).unwrap();
    assert!(!opts.prg);
    assert!(!opts.inplace);
    assert!(opts.sfx.is_none());
}

#[test]
fn dash_p_alone_strips_the_header_without_forcing_any_other_mode() {
    let opts = options(&["-p", "in.prg", "out.tsc"]).unwrap();
    assert!(opts.prg);
    assert!(!opts.inplace);
    assert!(opts.sfx.is_none());
}

#[test]
fn sfx_and_x2_are_mutually_exclusive() {
    let err = options(&["-x", "$0810", "-x2", "$0810", "in.prg", "out.tsc"]).unwrap_err();
    assert_eq!(err, ArgsError::ConflictingSfxFlags);
}

#[test]
fn sfx_cannot_combine_with_inplace() {
    let err = options(&["-x", "$0810", "-i", "in.prg", "out.tsc"]).unwrap_err();
    assert_eq!(err, ArgsError::SfxConflictsWithInplace);
}

#[test]
fn x2_selects_the_stack_variant_and_parses_hex_forms() {
    for addr in ["$1000", "0x1000", "1000"] {
        let opts = options(&["-x2", addr, "in.prg", "out.tsc"]).unwrap();
        assert_eq!(opts.sfx, Some((SfxVariant::Stack, 0x1000)));
    }
}

#[test]
fn bad_jump_address_is_rejected() {
    assert!(matches!(parse_jmp("zz"), Err(ArgsError::BadJumpAddress(_))));
}

#[test]
fn quiet_and_blank_and_selfcheck_are_independent_flags() {
    let opts = options(&["-q", "-b", "--selfcheck", "-x", "$0810", "in.prg", "out.tsc"]).unwrap();
    assert!(opts.quiet);
    assert!(opts.blank);
    assert!(opts.selfcheck);
}
