//! Fail-fast wrapper around [`run_command`] for script-style callers.
//!
//! [`run_script`] is the pure core and returns a [`Failure`] value.
//! [`run_command_or_exit`] reports that failure and terminates the process.

use std::ffi::OsStr;
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

use crate::runner::run_command;

/// Called with (command name, exit code, message) in place of the default
/// error line.
pub type FailureHandler<'a> = &'a dyn Fn(&str, i32, &str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The executable could not be launched.
    Spawn,
    /// The executable ran and exited with a non-zero code.
    NonZeroExit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub name: String,
    pub code: i32,
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] (exit code: {}) stderr-> {}",
            self.name,
            self.code,
            self.message.trim_end()
        )
    }
}

impl Failure {
    /// Hand the failure to `handler`, or write the default line to `err`.
    pub fn report<W: Write>(
        &self,
        handler: Option<FailureHandler<'_>>,
        err: &mut W,
    ) -> io::Result<()> {
        match handler {
            Some(handler) => {
                handler(&self.name, self.code, &self.message);
                Ok(())
            }
            None => writeln!(err, "{}", self),
        }
    }
}

/// Last path segment of `path`, split on either separator.
pub fn display_name(path: &str) -> &str {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(path)
}

/// Run the command and return its stdout, or the failure that script mode
/// would report.
pub fn run_script<P, I, S>(program: P, args: I) -> Result<String, Failure>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let name = display_name(&program.to_string_lossy()).to_string();

    match run_command(program, args) {
        Ok(result) if result.ok => Ok(result.stdout),
        Ok(result) => {
            let message = if result.stderr.is_empty() {
                result.stdout
            } else {
                result.stderr
            };
            Err(Failure {
                kind: FailureKind::NonZeroExit,
                name,
                code: result.exit_code,
                message,
            })
        }
        Err(e) => Err(Failure {
            kind: FailureKind::Spawn,
            name,
            code: 1,
            message: e.describe(),
        }),
    }
}

/// Run the command and return its stdout; on any failure, report it and
/// exit the current process with the failure's code.
pub fn run_command_or_exit<P, I, S>(
    program: P,
    args: I,
    handler: Option<FailureHandler<'_>>,
) -> String
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    match run_script(program, args) {
        Ok(stdout) => stdout,
        Err(failure) => {
            debug!(?failure, "command failed, exiting");
            // Nowhere left to report a broken stderr.
            let _ = failure.report(handler, &mut io::stderr().lock());
            std::process::exit(failure.code)
        }
    }
}
