//! Process exit statuses shared by every command.

use std::process::ExitCode;

use clap::Error;

/// The command succeeded.
pub const OK: ExitCode = ExitCode::SUCCESS;
/// Check errors, unmatched mirrors, or invalid arguments or configuration.
pub const FAILURE: ExitCode = ExitCode::FAILURE;
/// Raw status for a manifest that cannot be read or parsed.
pub const INPUT_FAILURE: u8 = 2;

/// Status for a manifest that cannot be read or parsed.
pub fn input_failure() -> ExitCode {
    ExitCode::from(INPUT_FAILURE)
}

/// Status for a command line that clap rejected.
///
/// `--help` and `--version` surface as errors too, but print to stdout and
/// succeed.
pub fn for_usage(err: &Error) -> ExitCode {
    if err.use_stderr() { FAILURE } else { OK }
}
