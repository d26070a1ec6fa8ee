//! Binary entry point for the `tscrunch` command-line tool.
//!
//! Parses arguments, loads the input file, dispatches to the optimal parser,
//! stitches the requested output shape (raw token stream, self-extractor, or
//! in-place image), and writes the result. Corresponds to `main`
//! (tscrunch.c:835–1114).

use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use tscrunch::cli::args::{normalize_argv, Options, RawArgs, SfxVariant as ArgSfxVariant};
use tscrunch::cli::constants::set_display_level;
use tscrunch::cli::help::print_usage;
use tscrunch::displaylevel;
use tscrunch::io::boot::{self, BootParams, SfxVariant};
use tscrunch::io::prg;
use tscrunch::io::{load_file, save_file};
use tscrunch::parser::{compress, CompressMode};

fn to_boot_variant(v: ArgSfxVariant) -> SfxVariant {
    match v {
        ArgSfxVariant::Normal => SfxVariant::Normal,
        ArgSfxVariant::Stack => SfxVariant::Stack,
    }
}

/// Build the self-extractor's boot stub and stitch it in front of the
/// crunched token stream.
///
/// `file_len = boot_len + crunched_len` and the transfer address is derived
/// from that *total* length, not from the crunched payload alone
/// (tscrunch.c:990–1008).
fn build_sfx_output(
    variant: ArgSfxVariant,
    blank: bool,
    jump_addr: u16,
    decrunch_to: u16,
    optimal_run: usize,
    crunched: &[u8],
) -> Vec<u8> {
    let boot_variant = to_boot_variant(variant);
    let boot_len = boot::stub_len(boot_variant, blank);
    let crunched_len = crunched.len();
    let file_len = (boot_len + crunched_len) as u16;

    let stub = boot::build_boot_stub(
        boot_variant,
        blank,
        BootParams {
            transfer_addr: boot::transfer_addr(file_len),
            start_addr: boot::start_addr(crunched_len as u16),
            decrunch_addr: decrunch_to,
            jump_addr,
            run_minus_one: (optimal_run - 1) as u8,
        },
    );

    let mut out = Vec::with_capacity(stub.len() + crunched.len());
    out.extend_from_slice(&stub);
    out.extend_from_slice(crunched);
    out
}

/// Wrap an in-place image (already headered with `addr`/`R-1`/remainder byte
/// by [`compress`]) in the outer 2-byte PRG load address the file itself
/// should be loaded at.
///
/// `load_to = decrunch_end - crunched_len + 1`, where `decrunch_end` is the
/// last address the original, uncompressed program occupied
/// (tscrunch.c:1010–1027).
fn build_inplace_file(decrunch_to: u16, crunch_len: usize, crunched: &[u8]) -> Vec<u8> {
    let decrunch_end = decrunch_to.wrapping_add(crunch_len as u16).wrapping_sub(1);
    let load_to = decrunch_end.wrapping_sub(crunched.len() as u16).wrapping_add(1);
    prg::prepend_header(load_to.to_le_bytes(), crunched)
}

fn run() -> Result<ExitCode> {
    let argv = normalize_argv(std::env::args());
    let raw = RawArgs::parse_from(argv);
    let opts = match Options::from_raw(raw) {
        Ok(o) => o,
        Err(e) => {
            print_usage();
            bail!("{e}");
        }
    };

    if opts.quiet {
        set_display_level(0);
    }

    let input = load_file(&opts.infile)
        .with_context(|| format!("reading {}", opts.infile.display()))?;

    let (addr, body): ([u8; 2], &[u8]) = if opts.prg {
        prg::strip_header(&input).context("input is too short to be a prg")?
    } else {
        ([0, 0], input.as_slice())
    };
    let decrunch_to = u16::from_le_bytes(addr);
    let original_len = body.len();

    let mode = match (opts.sfx, opts.inplace) {
        (Some(_), _) => CompressMode::Sfx,
        (None, true) => CompressMode::InPlace { addr },
        (None, false) => CompressMode::Raw,
    };

    let compressed = compress(body, mode).map_err(|e| anyhow::anyhow!("{e}"))?;

    let (output, load_to_for_display): (Vec<u8>, u16) = match opts.sfx {
        Some((variant, jump_addr)) => {
            let out = build_sfx_output(
                variant,
                opts.blank,
                jump_addr,
                decrunch_to,
                compressed.optimal_run,
                &compressed.bytes,
            );
            (out, 0x0801)
        }
        None if opts.inplace => {
            let out = build_inplace_file(decrunch_to, original_len, &compressed.bytes);
            let load_to = u16::from_le_bytes([out[0], out[1]]);
            (out, load_to)
        }
        None => (compressed.bytes.clone(), decrunch_to),
    };

    save_file(&opts.outfile, &output)
        .with_context(|| format!("writing {}", opts.outfile.display()))?;

    if opts.selfcheck {
        displaylevel!(
            2,
            "--selfcheck: no sibling Python/Go encoders are bundled with this port, skipping\n"
        );
    }

    let in_end = decrunch_to.wrapping_add(original_len.saturating_sub(1) as u16);
    let out_end = load_to_for_display.wrapping_add(output.len().saturating_sub(1) as u16);
    displaylevel!(
        2,
        "{} (${decrunch_to:04x}-${in_end:04x}, {orig} bytes) -> {} (${load_to_for_display:04x}-${out_end:04x}, {out} bytes) {pct:.2}%\n",
        opts.infile.display(),
        opts.outfile.display(),
        orig = original_len,
        out = output.len(),
        pct = 100.0 * output.len() as f64 / original_len.max(1) as f64,
    );

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tscrunch: {e:#}");
            ExitCode::FAILURE
        }
    }
}
