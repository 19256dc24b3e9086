//! `stringables` CLI — parse, describe, and adjust setting values from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse a value and print its canonical rendering
//! stringables parse integer 10MiB
//!
//! # Pass kind options as JSON
//! stringables parse float 1kB --options '{"convert_to": "b"}'
//!
//! # Try several kinds in order; print what matched as JSON
//! stringables parse bool,integer 42 --json
//!
//! # Read the value from stdin
//! echo "a, b, a" | stringables parse tuple --options '{"dedup": true}'
//!
//! # Describe the accepted syntax
//! stringables syntax option --options '{"options": ["red", "green"]}'
//!
//! # Apply a relative adjustment
//! stringables adjust 10k +=500
//! ```
//!
//! Set `RUST_LOG=stringables=debug` to see which kinds were tried.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value as JsonValue};
use std::io::{self, Read};
use stringables::{
    parse_arithmetic_operator, Adjustment, Constructor, Multitype, Number, NumberOptions,
    Stringable,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stringables",
    version,
    about = "Parse, describe, and adjust self-validating setting values"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct a value and print its canonical rendering
    Parse {
        /// Kind name (string, bool, path, option, tuple, integer, float);
        /// join several with commas to try them in order
        kind: String,
        /// Raw value (reads from stdin if omitted)
        value: Option<String>,
        /// Kind options as a JSON object
        #[arg(long)]
        options: Option<String>,
        /// Print kind, typename, syntax, and value as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the typename and accepted syntax of a kind
    Syntax {
        /// Kind name, or several joined with commas
        kind: String,
        /// Kind options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
    /// Apply `+=N` or `-=N` to a number, or replace it with an absolute value
    Adjust {
        /// Current number, e.g. `10k`
        #[arg(allow_hyphen_values = true)]
        current: String,
        /// Adjustment (`+=5`, `-=1.5`) or a new absolute value
        #[arg(allow_hyphen_values = true)]
        new: String,
        /// Number options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            kind,
            value,
            options,
            json,
        } => {
            let multitype = build_multitype(&kind, options.as_deref())?;
            let raw = match value {
                Some(value) => value,
                None => read_stdin()?,
            };
            let value = multitype
                .construct(raw.as_str())
                .with_context(|| format!("Invalid {}", multitype.typename()))?;
            tracing::debug!(kind = %value.kind(), "constructed value");

            if json {
                let report = json!({
                    "kind": value.kind().name(),
                    "typename": value.typename(),
                    "syntax": value.syntax(),
                    "value": value.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{value}");
            }
        }
        Commands::Syntax { kind, options } => {
            let multitype = build_multitype(&kind, options.as_deref())?;
            println!("{}: {}", multitype.typename(), multitype.syntax());
        }
        Commands::Adjust {
            current,
            new,
            options,
        } => {
            let options: NumberOptions = match options.as_deref() {
                Some(raw) => serde_json::from_str(raw).context("Failed to parse --options")?,
                None => NumberOptions::default(),
            };
            let current = Number::new(current.as_str(), options)
                .context("Invalid current value")?;
            let adjusted = match parse_arithmetic_operator(&current, new.as_str())
                .context("Failed to apply adjustment")?
            {
                Adjustment::Applied(number) => number,
                Adjustment::Passthrough(raw) => current.rebuild(raw).context("Invalid new value")?,
            };
            println!("{adjusted}");
        }
    }

    Ok(())
}

/// Build a multitype from `bool,integer`-style kind lists.
///
/// `options` must be a JSON object; it is applied to every member, and keys a
/// member does not know are ignored.
fn build_multitype(kinds: &str, options: Option<&str>) -> Result<Multitype> {
    let options: Map<String, JsonValue> = match options {
        Some(raw) => serde_json::from_str(raw).context("Failed to parse --options")?,
        None => Map::new(),
    };

    let mut members = Vec::new();
    for name in kinds.split(',') {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let mut declaration = options.clone();
        declaration.insert("type".to_string(), JsonValue::String(name.to_string()));
        let member: Constructor = serde_json::from_value(JsonValue::Object(declaration))
            .with_context(|| format!("Unknown kind or invalid options for '{name}'"))?;
        members.push(member);
    }

    if members.is_empty() {
        anyhow::bail!("No kind given. Available kinds: string, bool, path, option, tuple, integer, float");
    }
    Ok(Multitype::new(members))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}
