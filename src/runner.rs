use serde::Serialize;
use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

/// Captured outcome of a single child process run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub ok: bool,
}

#[derive(Debug, Error)]
#[error("failed to spawn {program}")]
pub struct SpawnError {
    pub program: String,
    #[source]
    pub source: std::io::Error,
}

impl SpawnError {
    /// One-line description including the underlying io error.
    pub fn describe(&self) -> String {
        format!("{}: {}", self, self.source)
    }
}

/// Run `program` with `args`, capturing stdout and stderr in full.
///
/// Stdin is closed. A non-zero exit is reported through `ok`, never as an
/// error; only a failure to launch the executable returns `Err`.
pub fn run_command<P, I, S>(program: P, args: I) -> Result<CommandResult, SpawnError>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
    debug!(?program, ?args, "spawning");

    let output = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| SpawnError {
            program: program.to_string_lossy().into_owned(),
            source,
        })?;

    let exit_code = exit_code(output.status);
    debug!(
        ?program,
        exit_code,
        stdout_len = output.stdout.len(),
        stderr_len = output.stderr.len(),
        "exited"
    );

    Ok(CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code,
        ok: exit_code == 0,
    })
}

// Signal deaths map to 128 + signo, as shells report them.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}
