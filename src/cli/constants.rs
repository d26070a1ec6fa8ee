//! Display infrastructure and CLI-wide identity constants.
//!
//! Grounded in the teacher's own `cli::constants`: a crate-level atomic
//! display level plus `display!`/`displayout!`/`displaylevel!` macros stand
//! in for a logging crate, exactly as the teacher uses them instead of
//! `log`/`tracing`. Corresponds to `tscrunch.c`'s `usage()` banner
//! (tscrunch.c:87–97) for the identity constants.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "tscrunch";
pub const VERSION: &str = "1.3.1";
pub const AUTHOR: &str = "Antonio Savona";

/// 0 = silent, 1 = errors only, 2 = normal (the default: summary line plus
/// errors), 3 = verbose (also reports the chosen zero-run length and output
/// filename).
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout — equivalent to C `DISPLAYOUT(...)`.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr — equivalent to C `DISPLAY(...)`.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level` — equivalent to C
/// `DISPLAYLEVEL(l, ...)`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print debug output, active only in debug builds.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        eprint!($($arg)*);
    };
}

/// Print a diagnostic and terminate the process with `error` as the exit
/// code. Equivalent to the C `END_PROCESS(error, ...)` macro.
#[macro_export]
macro_rules! end_process {
    ($error:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        eprint!("Error in {}, line {} : \n", file!(), line!());
        if $crate::cli::constants::display_level() >= 1 {
            eprint!("Error {} : ", $error);
            eprint!($($arg)*);
            eprint!("\n");
        }
        std::process::exit($error as i32);
    }};
}
