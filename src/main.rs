// src/main.rs
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use file_manager::{repl, ui::output};

const DEFAULT_USERNAME: &str = "Unknown user";

/// Interactive file-navigation shell.
#[derive(Parser, Debug)]
#[command(name = "file-manager", version)]
struct Args {
    /// Name shown in the welcome and farewell messages.
    #[arg(long, default_value = DEFAULT_USERNAME)]
    username: String,
}

/// A bad command line falls back to the placeholder username instead of
/// aborting; the shell itself is the product, not the flag parsing.
/// `--help` and `--version` still get to print, though.
fn resolve_args(parsed: Result<Args, clap::Error>) -> Result<Args, clap::Error> {
    match parsed {
        Ok(args) => Ok(args),
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            Err(err)
        }
        Err(_) => Ok(Args {
            username: DEFAULT_USERNAME.to_owned(),
        }),
    }
}

fn main() -> Result<()> {
    let args = match resolve_args(Args::try_parse()) {
        Ok(args) => args,
        Err(err) => err.exit(),
    };

    let farewell_name = args.username.clone();
    ctrlc::set_handler(move || {
        // Same farewell as `.exit`; an in-flight operation is not awaited.
        output::farewell(&farewell_name);
        std::process::exit(0);
    })?;

    repl::run(args.username)
}
