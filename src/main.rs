use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::io::Read;
use tracing::info;

use textkey::{normalize_html, normalize_text, singularize};

#[derive(Parser, Debug)]
#[command(name = "textkey")]
#[command(about = "Normalize free-form text into canonical ASCII search keys")]
#[command(version)]
struct Args {
    /// Text to normalize; reads stdin when omitted
    text: Option<String>,

    /// Treat input as markup: decode character references and strip tags first
    #[arg(long)]
    html: bool,

    /// Singularize each token of the normalized output
    #[arg(long)]
    singular: bool,

    /// Emit a JSON report of every stage instead of the final line
    #[arg(long)]
    json: bool,
}

/// Per-stage transcript for `--json` output
#[derive(Serialize, Debug)]
struct StageReport<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    markup_stripped: Option<&'a str>,
    normalized: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    singularized: Option<&'a str>,
}

fn main() -> Result<()> {
    // WHY: structured JSON logging on stderr keeps diagnostics separable from
    // the transformation result printed on stdout
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let input = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if input.is_empty() {
        anyhow::bail!("No input text: pass TEXT as an argument or pipe it to stdin");
    }

    let markup_stripped = args.html.then(|| normalize_html(&input));
    let plain = markup_stripped.as_deref().unwrap_or(&input);
    info!(chars = plain.chars().count(), "Input ready for normalization");

    let normalized = normalize_text(plain);

    let singularized = args.singular.then(|| {
        normalized
            .split_whitespace()
            .map(singularize)
            .collect::<Vec<_>>()
            .join(" ")
    });

    if args.json {
        let report = StageReport {
            input: &input,
            markup_stripped: markup_stripped.as_deref(),
            normalized: &normalized,
            singularized: singularized.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", singularized.as_deref().unwrap_or(&normalized));
    }

    info!("Normalization complete");
    Ok(())
}
