use std::collections::HashMap;

use clap::Parser;
use secret_report::cli::{Cli, Command, ConvertArgs};

fn execute(args: &[&str], env: &HashMap<String, String>) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    cli.command.unwrap_or_default().execute(env, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn no_subcommand_runs_default_report() {
    let output = execute(&["secret-report"], &HashMap::new()).unwrap();
    assert!(output.contains("KO LAKE VILLA - REQUIRED SECRETS ONLY"));
    assert!(output.contains("✅ Found: 0/9 secrets"));
}

#[test]
fn custom_secret_list_and_title() {
    let env = HashMap::from([("DATABASE_URL".to_string(), "postgres://db".to_string())]);
    let output = execute(
        &[
            "secret-report",
            "report",
            "--secret",
            "DATABASE_URL",
            "--secret",
            "API_TOKEN",
            "--title",
            "BACKEND",
        ],
        &env,
    )
    .unwrap();

    assert!(output.contains("\nBACKEND\n"));
    assert!(output.contains("\nDATABASE_URL=postgres://db\n"));
    assert!(output.contains("✅ Found: 1/2 secrets"));
    assert!(output.contains("❌ Missing: API_TOKEN\n"));
}

#[test]
fn convert_reads_file() {
    let path = std::env::temp_dir().join(format!(
        "secret-report-convert-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{"STRIPE_KEY": "sk live", "BUCKET_NAME": "photos"}"#).unwrap();

    let output = execute(
        &["secret-report", "convert", path.to_str().unwrap()],
        &HashMap::new(),
    );
    std::fs::remove_file(&path).unwrap();
    let output = output.unwrap();

    assert!(output.contains("# STRIPE\nSTRIPE_KEY=\"sk live\"\n\n# STORAGE\nBUCKET_NAME=photos\n"));
}

#[test]
fn convert_reads_stdin_without_file() {
    let stdin = std::io::Cursor::new(r#"{"GITHUB_TOKEN": "ghp_1", "SESSION_SECRET": "s"}"#);
    let mut out = Vec::new();
    ConvertArgs { file: None }
        .convert_from(stdin, &mut out)
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("# GITHUB\nGITHUB_TOKEN=ghp_1\n\n# SESSION\nSESSION_SECRET=s\n"));
}

#[test]
fn convert_rejects_invalid_stdin() {
    let stdin = std::io::Cursor::new("\"just a string\"");
    let err = ConvertArgs { file: None }
        .convert_from(stdin, &mut Vec::<u8>::new())
        .unwrap_err();
    assert!(err.to_string().contains("a string"));
}

#[test]
fn convert_missing_file_is_an_error() {
    let err = execute(
        &["secret-report", "convert", "/nonexistent/secrets.json"],
        &HashMap::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/secrets.json"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["secret-report", "rotate"]).is_err());
    assert!(matches!(
        Cli::try_parse_from(["secret-report", "convert"]).unwrap().command,
        Some(Command::Convert(_))
    ));
}
