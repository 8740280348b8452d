use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "runcmd", about = "Run a command and capture its output")]
pub struct Cli {
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a command, pass its output through, and exit with its code
    Run {
        /// Command and arguments to run
        #[arg(last = true, required = true)]
        cmd: Vec<String>,
    },
    /// Run a command; print stdout on success, report and exit on failure
    Script {
        /// Command and arguments to run
        #[arg(last = true, required = true)]
        cmd: Vec<String>,
    },
}
