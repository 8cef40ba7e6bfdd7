//! SafeArgs CLI — generates PHP request-argument classes from a YAML schema.
//!
//! # Usage
//!
//! ```text
//! safeargs app/res/safe_args.yaml -o app/build/generated_classes.php \
//!     --table SessionKey=app/res/session_keys.yaml \
//!     --table Text=app/res/texts.yaml
//! ```
//!
//! Without `-o` the generated PHP is printed to stdout. `RUST_LOG` overrides
//! the `--log-level` filter when set.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "safeargs", version, about = "Generate PHP request-argument classes from a YAML schema")]
struct Cli {
    /// Path to the safe-args YAML schema.
    schema: PathBuf,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extra constants-only class from a YAML value file, as `NAME=PATH`.
    /// The file is either a sequence of names or a name-to-value mapping.
    /// May be repeated; classes render after the schema entries, in order.
    #[arg(long = "table", value_name = "NAME=PATH")]
    tables: Vec<String>,

    /// Log level filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let schema_text = fs::read_to_string(&cli.schema)
        .with_context(|| format!("failed to read schema: {}", cli.schema.display()))?;
    let doc = safeargs_core::parse_schema(&schema_text)
        .with_context(|| format!("invalid schema: {}", cli.schema.display()))?;

    let mut tables = Vec::with_capacity(cli.tables.len());
    for spec in &cli.tables {
        let (name, path) = parse_table_spec(spec)?;
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read table file: {path}"))?;
        let table = safeargs_core::parse_table(&text)
            .with_context(|| format!("invalid table file: {path}"))?;
        tables.push((name.to_owned(), table));
    }

    let generated =
        safeargs_core::generate(&doc, &tables).context("code generation failed")?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &generated)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(output = %path.display(), "wrote generated classes");
        }
        None => print!("{generated}"),
    }

    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `--log-level` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Split a `NAME=PATH` table option into its parts.
fn parse_table_spec(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => Ok((name, path)),
        _ => bail!("invalid --table value `{spec}`, expected NAME=PATH"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_should_split_table_spec() {
        let (name, path) = parse_table_spec("SessionKey=res/session_keys.yaml").unwrap();
        assert_eq!(name, "SessionKey");
        assert_eq!(path, "res/session_keys.yaml");
    }

    #[test]
    fn test_should_reject_malformed_table_spec() {
        assert!(parse_table_spec("SessionKey").is_err());
        assert!(parse_table_spec("=res/session_keys.yaml").is_err());
        assert!(parse_table_spec("SessionKey=").is_err());
    }

    #[test]
    fn test_should_round_trip_schema_file_to_php_file() {
        let mut schema = tempfile::NamedTempFile::new().unwrap();
        schema
            .write_all(b"- Login:\n    method: POST\n    arguments:\n      - username: string\n")
            .unwrap();

        let text = fs::read_to_string(schema.path()).unwrap();
        let doc = safeargs_core::parse_schema(&text).unwrap();
        let generated = safeargs_core::generate(&doc, &[]).unwrap();

        let out_dir = tempfile::tempdir().unwrap();
        let out_path = out_dir.path().join("generated_classes.php");
        fs::write(&out_path, &generated).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.starts_with("<?php\n"));
        assert!(written.contains("class LoginArg {"));
        assert!(written.contains("class LoginArgs {"));
    }
}
