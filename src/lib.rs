//! Run a child process and collect its output.
//!
//! [`run_command`] captures stdout and stderr and reports the exit code.
//! [`run_command_or_exit`] is the script-mode variant: it returns stdout on
//! success and terminates the calling process on failure.
//!
//! ```no_run
//! let result = runcmd::run_command("curl", ["https://example.com"])?;
//! println!("{} {} {}", result.exit_code, result.stdout, result.stderr);
//!
//! let stdout = runcmd::run_command_or_exit("curl", ["https://example.com"], None);
//! println!("{}", stdout);
//! # Ok::<(), runcmd::SpawnError>(())
//! ```

mod runner;
mod script;
mod testutil;

pub use runner::{run_command, CommandResult, SpawnError};
pub use script::{
    display_name, run_command_or_exit, run_script, Failure, FailureHandler, FailureKind,
};
