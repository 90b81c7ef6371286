use std::fmt::{self, Display, Formatter};
use std::io::Write;

use anyhow::{Context, Result};

use crate::env::Environment;

pub const DEFAULT_TITLE: &str = "KO LAKE VILLA - REQUIRED SECRETS ONLY";
const RULE_WIDTH: usize = 60;

/// One looked-up secret
#[derive(Debug, Clone, PartialEq, Eq, fieldwork::Fieldwork)]
#[fieldwork(get)]
pub struct Entry {
    name: String,
    value: Option<String>,
}

impl Entry {
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={value}", self.name),
            None => write!(f, "# {}=NOT_FOUND", self.name),
        }
    }
}

/// Presence of each requested secret, in request order
#[derive(Debug, Clone, PartialEq, Eq, fieldwork::Fieldwork)]
#[fieldwork(get)]
pub struct Report {
    title: String,
    entries: Vec<Entry>,
}

impl Report {
    /// Look up every name in `env`, keeping the order of `names`
    pub fn collect<I, E>(names: I, env: &E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: Environment + ?Sized,
    {
        let entries: Vec<Entry> = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref().to_string();
                let value = env.lookup(&name);
                log::debug!(
                    "{name}: {}",
                    if value.is_some() { "found" } else { "missing" }
                );
                Entry { name, value }
            })
            .collect();

        let report = Self {
            title: DEFAULT_TITLE.to_string(),
            entries,
        };
        log::info!("found {}/{} secrets", report.found().len(), report.total());
        report
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn found(&self) -> Vec<&str> {
        self.names_where(true)
    }

    pub fn missing(&self) -> Vec<&str> {
        self.names_where(false)
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    fn names_where(&self, found: bool) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.is_found() == found)
            .map(|entry| entry.name.as_str())
            .collect()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;

        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "✅ Found: {}/{} secrets",
            self.found().len(),
            self.total()
        )?;
        let missing = self.missing();
        if !missing.is_empty() {
            writeln!(f, "❌ Missing: {}", missing.join(", "))?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(
            f,
            "📋 COPY EVERYTHING ABOVE (excluding # lines) and paste to Cascade"
        )
    }
}

/// Collect a report for `names` under `title` and write it to `out`
pub fn run<I, E, W>(names: I, env: &E, title: &str, out: &mut W) -> Result<Report>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    E: Environment + ?Sized,
    W: Write + ?Sized,
{
    let report = Report::collect(names, env).with_title(title);
    write!(out, "{report}").context("writing report")?;
    out.flush()?;
    Ok(report)
}
