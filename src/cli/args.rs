//! CLI argument parsing.
//!
//! Grounded in `tscrunch.c`'s flag loop in `main()` (tscrunch.c:835–929) and
//! `parse_jmp` (tscrunch.c:481–504). Unlike the teacher's hand-rolled argv
//! loop, this crate puts its declared `clap` dependency (present but never
//! imported anywhere in the teacher) to actual use: TSCrunch's flag surface
//! is small and flat enough that a derived parser is the more idiomatic fit
//! here (see DESIGN.md).
//!
//! `clap`'s derive only supports single-character short flags, so `-x2`
//! (a genuine single-dash, two-character flag in the original) is handled
//! by [`normalize_argv`], which rewrites it to `--x2` before parsing.

use std::path::PathBuf;

use clap::Parser;

/// Raw flags as clap sees them, one field per original command-line switch.
#[derive(Debug, Parser)]
#[command(name = "tscrunch", about = "TSCrunch 1.3.1 - binary cruncher, by Antonio Savona")]
pub struct RawArgs {
    /// input file is a prg, first 2 bytes are discarded
    #[arg(short = 'p')]
    pub prg: bool,

    /// creates a self extracting file (forces -p)
    #[arg(short = 'x', value_name = "addr")]
    pub sfx: Option<String>,

    /// creates a self extracting file with sfx code in stack (forces -p)
    #[arg(long = "x2", value_name = "addr")]
    pub sfx2: Option<String>,

    /// blanks screen during decrunching (only with -x)
    #[arg(short = 'b')]
    pub blank: bool,

    /// inplace crunching (forces -p)
    #[arg(short = 'i')]
    pub inplace: bool,

    /// quiet mode
    #[arg(short = 'q')]
    pub quiet: bool,

    /// compare output sizes against python/go encoders
    #[arg(long = "selfcheck")]
    pub selfcheck: bool,

    pub infile: PathBuf,
    pub outfile: PathBuf,
}

/// Rewrite the single-dash `-x2` spelling to `--x2` so clap's derive parser
/// (which only understands one-character short flags) accepts it. Leaves
/// every other argument untouched.
pub fn normalize_argv<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|a| if a == "-x2" { "--x2".to_string() } else { a })
        .collect()
}

/// Which self-extractor boot stub variant, if any, was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxVariant {
    Normal,
    Stack,
}

/// Fully validated, higher-level view of the command line.
#[derive(Debug, Clone)]
pub struct Options {
    pub prg: bool,
    pub inplace: bool,
    pub quiet: bool,
    pub blank: bool,
    pub selfcheck: bool,
    pub sfx: Option<(SfxVariant, u16)>,
    pub infile: PathBuf,
    pub outfile: PathBuf,
}

/// Bad usage distinct from core parser or I/O failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    ConflictingSfxFlags,
    SfxConflictsWithInplace,
    BadJumpAddress(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgsError::ConflictingSfxFlags => write!(f, "-x and -x2 are mutually exclusive"),
            ArgsError::SfxConflictsWithInplace => write!(f, "-x/-x2 cannot be combined with -i"),
            ArgsError::BadJumpAddress(s) => write!(f, "invalid jump address: {s}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Parse a jump address in `$hhhh`, `0xhhhh`, or bare-hex form.
///
/// Equivalent to `parse_jmp`.
pub fn parse_jmp(s: &str) -> Result<u16, ArgsError> {
    let digits = if let Some(rest) = s.strip_prefix('$') {
        rest
    } else if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        rest
    } else {
        s
    };
    u16::from_str_radix(digits, 16).map_err(|_| ArgsError::BadJumpAddress(s.to_string()))
}

impl Options {
    /// Validate and combine [`RawArgs`] into [`Options`].
    pub fn from_raw(raw: RawArgs) -> Result<Options, ArgsError> {
        if raw.sfx.is_some() && raw.sfx2.is_some() {
            return Err(ArgsError::ConflictingSfxFlags);
        }
        let sfx = match (&raw.sfx, &raw.sfx2) {
            (Some(addr), None) => Some((SfxVariant::Normal, parse_jmp(addr)?)),
            (None, Some(addr)) => Some((SfxVariant::Stack, parse_jmp(addr)?)),
            _ => None,
        };
        if sfx.is_some() && raw.inplace {
            return Err(ArgsError::SfxConflictsWithInplace);
        }

        let prg = raw.prg || sfx.is_some() || raw.inplace;

        Ok(Options {
            prg,
            inplace: raw.inplace,
            quiet: raw.quiet,
            blank: raw.blank,
            selfcheck: raw.selfcheck,
            sfx,
            infile: raw.infile,
            outfile: raw.outfile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(extra: &[&str]) -> RawArgs {
        let mut argv = vec!["tscrunch".to_string()];
        argv.extend(extra.iter().map(|s| s.to_string()));
        RawArgs::parse_from(normalize_argv(argv))
    }

    #[test]
    fn normalize_rewrites_x2_only() {
        let argv = normalize_argv(
            ["tscrunch", "-x2", "$0810", "-p", "in", "out"].iter().map(|s| s.to_string()),
        );
        assert_eq!(argv[1], "--x2");
        assert_eq!(argv[3], "-p");
    }

    #[test]
    fn parse_jmp_accepts_all_three_forms() {
        assert_eq!(parse_jmp("$0810"), Ok(0x0810));
        assert_eq!(parse_jmp("0x0810"), Ok(0x0810));
        assert_eq!(parse_jmp("0810"), Ok(0x0810));
    }

    #[test]
    fn parse_jmp_rejects_garbage() {
        assert!(parse_jmp("not-hex").is_err());
    }

    #[test]
    fn plain_invocation_forces_nothing() {
        let opts = Options::from_raw(raw(&["in.prg", "out.tsc"])).unwrap();
        assert!(!opts.prg);
        assert!(opts.sfx.is_none());
    }

    #[test]
    fn sfx_forces_prg() {
        let opts = Options::from_raw(raw(&["-x", "$0810", "in.prg", "out.tsc"])).unwrap();
        assert!(opts.prg);
        assert_eq!(opts.sfx, Some((SfxVariant::Normal, 0x0810)));
    }

    #[test]
    fn x2_forces_prg_and_selects_stack_variant() {
        let opts = Options::from_raw(raw(&["-x2", "$1000", "in.prg", "out.tsc"])).unwrap();
        assert!(opts.prg);
        assert_eq!(opts.sfx, Some((SfxVariant::Stack, 0x1000)));
    }

    #[test]
    fn inplace_forces_prg() {
        let opts = Options::from_raw(raw(&["-i", "in.prg", "out.tsc"])).unwrap();
        assert!(opts.prg);
        assert!(opts.inplace);
    }

    #[test]
    fn sfx_and_inplace_conflict() {
        let raw = raw(&["-x", "$0810", "-i", "in.prg", "out.tsc"]);
        assert_eq!(Options::from_raw(raw), Err(ArgsError::SfxConflictsWithInplace));
    }
}
