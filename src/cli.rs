use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};

use crate::convert::convert;
use crate::env::Environment;
use crate::report::{run, DEFAULT_TITLE};
use crate::secrets::default_names;

#[derive(Debug, Parser)]
#[command(name = "secret-report", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print which required secrets are set in the environment (the default)
    Report(ReportArgs),
    /// Convert a JSON object of secrets into .env lines
    Convert(ConvertArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Report(ReportArgs::default())
    }
}

#[derive(Debug, Default, Args)]
pub struct ReportArgs {
    /// Secret to check. Repeat to build a custom list; the built-in list is used when omitted
    #[arg(long = "secret", value_name = "NAME")]
    pub secrets: Vec<String>,

    /// Heading printed above the report
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct ConvertArgs {
    /// JSON file to read. Standard input is read when omitted
    pub file: Option<String>,
}

impl Command {
    pub fn execute<E, W>(self, env: &E, out: &mut W) -> Result<()>
    where
        E: Environment + ?Sized,
        W: Write + ?Sized,
    {
        match self {
            Command::Report(args) => args.execute(env, out),
            Command::Convert(args) => args.execute(out),
        }
    }
}

impl ReportArgs {
    fn execute<E, W>(self, env: &E, out: &mut W) -> Result<()>
    where
        E: Environment + ?Sized,
        W: Write + ?Sized,
    {
        let names = if self.secrets.is_empty() {
            default_names()
        } else {
            self.secrets
        };

        let title = self.title.as_deref().unwrap_or(DEFAULT_TITLE);
        run(&names, env, title, out)?;
        Ok(())
    }
}

impl ConvertArgs {
    fn execute<W: Write + ?Sized>(self, out: &mut W) -> Result<()> {
        let stdin = std::io::stdin();
        if self.file.is_none() && stdin.is_terminal() {
            eprintln!("Paste JSON and press Ctrl+D:");
        }
        self.convert_from(stdin.lock(), out)
    }

    /// Convert the file argument, or `stdin` when no file was given
    pub fn convert_from<R, W>(self, mut stdin: R, out: &mut W) -> Result<()>
    where
        R: Read,
        W: Write + ?Sized,
    {
        let json = match self.file {
            Some(file) => {
                let path = PathBuf::from(&*shellexpand::tilde(&file));
                std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?
            }
            None => {
                let mut json = String::new();
                stdin
                    .read_to_string(&mut json)
                    .context("reading standard input")?;
                json
            }
        };

        out.write_all(convert(&json, Utc::now())?.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
