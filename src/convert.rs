//! Conversion of a JSON dump of secrets (as exported from a Replit workspace)
//! into `.env` text, grouped by the service each key belongs to.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Service grouping for a secret key. Variant order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Supabase,
    Guesty,
    Openai,
    Stripe,
    Database,
    Github,
    Sendgrid,
    Session,
    Storage,
    Other,
}

impl Category {
    /// First matching rule wins
    pub fn classify(key: &str) -> Self {
        let has = |needle: &str| key.contains(needle);

        if has("SUPABASE") {
            Self::Supabase
        } else if has("GUESTY") {
            Self::Guesty
        } else if has("OPENAI") {
            Self::Openai
        } else if has("STRIPE") {
            Self::Stripe
        } else if has("PG") || has("DATABASE") {
            Self::Database
        } else if has("GITHUB") {
            Self::Github
        } else if has("SENDGRID") {
            Self::Sendgrid
        } else if has("SESSION") {
            Self::Session
        } else if has("STORAGE") || has("BUCKET") {
            Self::Storage
        } else {
            Self::Other
        }
    }
}

fn needs_quotes(value: &str) -> bool {
    value.contains([' ', '#', '$', '"'])
}

/// Render one `KEY=value` line. Only string values are ever quoted, and their
/// contents are not escaped.
pub fn format_assignment(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) if needs_quotes(s) => format!("{key}=\"{s}\""),
        Value::String(s) => format!("{key}={s}"),
        other => format!("{key}={other}"),
    }
}

/// Convert a JSON object of secrets into `.env` text
pub fn convert(json: &str, generated_at: DateTime<Utc>) -> Result<String> {
    let value: Value = serde_json::from_str(json).context("parsing secrets JSON")?;
    let secrets = match value {
        Value::Object(secrets) => secrets,
        other => bail!("expected a JSON object of secrets, found {}", kind(&other)),
    };

    log::debug!("converting {} secrets", secrets.len());

    let mut out = String::new();
    out.push_str("# ==========================================\n");
    out.push_str("# Environment Variables from Replit JSON\n");
    out.push_str(&format!(
        "# Generated: {}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    out.push_str("# ==========================================\n");
    out.push('\n');

    for category in Category::iter() {
        let mut lines = secrets
            .iter()
            .filter(|(key, _)| Category::classify(key) == category)
            .map(|(key, value)| format_assignment(key, value))
            .peekable();

        if lines.peek().is_none() {
            continue;
        }

        out.push_str(&format!("# {category}\n"));
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("# Copy the above output to your .env file\n");
    Ok(out)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
