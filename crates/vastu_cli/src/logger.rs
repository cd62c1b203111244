//! stderr logging via `simplelog`.

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Log level for the `--verbose` flag: Debug when set, Warn otherwise.
pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the stderr logger.
pub fn init(verbose: bool) {
    if let Err(e) = TermLogger::init(
        level(verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    ) {
        eprintln!("logger already initialized: {e}");
    }
}
