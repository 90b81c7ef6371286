use anyhow::Result;
use clap::Parser;
use secret_report::{cli::Cli, logging, ProcessEnvironment};

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    log::trace!("{cli:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli.command
        .unwrap_or_default()
        .execute(&ProcessEnvironment, &mut out)
}
