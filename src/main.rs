mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io::Write;

use runcmd::CommandResult;

#[derive(Debug, Serialize)]
struct ScriptOutput {
    stdout: String,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let code = match cli.command {
        Command::Run { cmd } => {
            let (program, args) = split_cmd(&cmd)?;
            let result = runcmd::run_command(program, args)?;
            output(&result, cli.json, write_result_human)?;
            result.exit_code
        }
        Command::Script { cmd } => {
            let (program, args) = split_cmd(&cmd)?;
            let stdout = runcmd::run_command_or_exit(program, args, None);
            output(&ScriptOutput { stdout }, cli.json, write_script_human)?;
            0
        }
    };
    // process::exit skips destructors, so buffered stdout must go out now.
    std::io::stdout().flush().context("failed to flush stdout")?;
    Ok(code)
}

fn split_cmd(cmd: &[String]) -> Result<(&str, &[String])> {
    let (program, args) = cmd.split_first().context("no command specified")?;
    Ok((program.as_str(), args))
}

fn write_result_human(result: &CommandResult) -> Result<()> {
    std::io::stdout().write_all(result.stdout.as_bytes())?;
    std::io::stderr().write_all(result.stderr.as_bytes())?;
    Ok(())
}

fn write_script_human(result: &ScriptOutput) -> Result<()> {
    std::io::stdout().write_all(result.stdout.as_bytes())?;
    Ok(())
}

fn output<T: Serialize>(result: &T, json: bool, human_fn: fn(&T) -> Result<()>) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        human_fn(result)?;
    }
    Ok(())
}
