//! `recase` command-line entry point.

use anyhow::Result;
use clap::Parser;
use std::io::Write as _;

use recase_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match args.command {
        cli::Command::Convert(opts) => {
            commands::convert::run(&args.global, &opts, &log, std::io::stdin().lock(), &mut out)
        }
        cli::Command::Batch(opts) => commands::batch::run(&args.global, &opts, &log, &mut out),
        cli::Command::Demo => commands::demo::run(&mut out).map_err(Into::into),
        cli::Command::Version => commands::version::run(&mut out).map_err(Into::into),
    };
    out.flush()?;
    result
}
