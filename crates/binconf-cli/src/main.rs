//! `binconf` CLI — convert, inspect, and edit binary configuration
//! documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to the binary format (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | binconf encode > app.bc
//!
//! # Encode from file to file
//! binconf encode -i app.json -o app.bc
//!
//! # Decode back to pretty-printed JSON
//! binconf decode -i app.bc
//!
//! # Read one value by dotted path
//! binconf get -i app.bc server.port
//!
//! # Write a value and save the result in place
//! binconf set -i app.bc server.port 9090
//!
//! # Show JSON vs binary sizes
//! binconf stats -i app.json
//! ```

use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use binconf_core::{Document, Value};

#[derive(Parser)]
#[command(name = "binconf", version, about = "Binary configuration document CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON document to the binary format
    Encode {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode a binary document back to pretty-printed JSON
    Decode {
        /// Input binary file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the value at a dotted path
    Get {
        /// Input binary file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Dotted path, e.g. server.port
        path: String,
    },
    /// Set the value at a dotted path and save the document
    Set {
        /// Input binary file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (defaults to the input file, or stdout when reading
        /// from stdin)
        #[arg(short, long)]
        output: Option<String>,
        /// Dotted path, e.g. server.port
        path: String,
        /// New value as a JSON scalar; unquoted text is taken as a string
        value: String,
    },
    /// Show JSON size vs binary size for a JSON input
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => {
            let json = read_text(input.as_deref())?;
            let doc = Document::from_json_str(&json).context("Failed to parse JSON input")?;
            write_bytes(output.as_deref(), &binconf_core::encode(&doc))?;
        }
        Commands::Decode { input, output } => {
            let bytes = read_bytes(input.as_deref())?;
            let doc = binconf_core::decode(&bytes).context("Failed to decode binary document")?;
            let mut pretty = doc
                .to_json_string_pretty()
                .context("Failed to render JSON")?;
            pretty.push('\n');
            write_text(output.as_deref(), &pretty)?;
        }
        Commands::Get { input, path } => {
            let bytes = read_bytes(input.as_deref())?;
            let doc = binconf_core::decode(&bytes).context("Failed to decode binary document")?;
            let value = doc
                .get(&path)
                .with_context(|| format!("No value at path: {path}"))?;
            println!("{}", render_value(value));
        }
        Commands::Set {
            input,
            output,
            path,
            value,
        } => {
            let bytes = read_bytes(input.as_deref())?;
            let mut doc =
                binconf_core::decode(&bytes).context("Failed to decode binary document")?;
            doc.set(&path, parse_value_arg(&value)?)
                .with_context(|| format!("Failed to set path: {path}"))?;
            // In-place edit when reading from a file and no explicit output.
            let dest = output.as_deref().or(input.as_deref());
            write_bytes(dest, &binconf_core::encode(&doc))?;
        }
        Commands::Stats { input } => {
            let json = read_text(input.as_deref())?;
            let doc = Document::from_json_str(&json).context("Failed to parse JSON input")?;
            let json_bytes = json.len();
            let binary_bytes = binconf_core::encode(&doc).len();
            let ratio = if json_bytes > 0 {
                (1.0 - (binary_bytes as f64 / json_bytes as f64)) * 100.0
            } else {
                0.0
            };
            println!("JSON size:    {} bytes", json_bytes);
            println!("Binary size:  {} bytes", binary_bytes);
            println!("Reduction:    {:.1}%", ratio);
        }
    }

    Ok(())
}

/// Interpret the `set` value argument: a JSON scalar when it parses as one,
/// otherwise a plain string. Objects and arrays are rejected; paths address
/// one leaf at a time.
fn parse_value_arg(raw: &str) -> Result<Value> {
    let parsed: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return Ok(Value::from(raw)),
    };
    match parsed {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::from(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::from(f))
            } else {
                Ok(Value::Null)
            }
        }
        serde_json::Value::String(s) => Ok(Value::from(s)),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            bail!("Value must be a scalar, not an array or object")
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Blob(bytes) => serde_json::Value::from(bytes.clone()).to_string(),
        other => other.to_display_string().unwrap_or_default(),
    }
}

fn read_text(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn read_bytes(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {path}")),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_text(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {path}"))?,
        None => print!("{content}"),
    }
    Ok(())
}

fn write_bytes(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {path}"))?,
        None => io::stdout()
            .write_all(content)
            .context("Failed to write to stdout")?,
    }
    Ok(())
}
