//! Shared plumbing for the command-line tools.

use std::fmt::Display;
use std::io::{self, Write};

const RED: &str = "\x1b[0;31m";
const RESET: &str = "\x1b[0m";

/// Where the line break of an error message sits relative to the color reset.
///
/// Build scripts match on the exact bytes each tool has always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLayout {
    /// `ESC[0;31mError: ...\nESC[0m`, written by compiler-config
    NewlineInsideColor,
    /// `ESC[0;31mError: ...ESC[0m\n`, written by version-config
    NewlineAfterReset,
}

/// Initialise `env_logger` on stderr, `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Render an error the way build scripts expect to see it.
pub fn error_message(error: &dyn Display, layout: ErrorLayout) -> String {
    match layout {
        ErrorLayout::NewlineInsideColor => format!("{RED}Error: {error}\n{RESET}"),
        ErrorLayout::NewlineAfterReset => format!("{RED}Error: {error}{RESET}\n"),
    }
}

/// Write `output` to stdout without a trailing newline.
pub fn emit(output: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}

/// Report `error` on stderr and exit with status 1.
pub fn fail(error: &dyn Display, layout: ErrorLayout) -> ! {
    eprint!("{}", error_message(error, layout));
    std::process::exit(1);
}
