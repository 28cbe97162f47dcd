//! Unhide - Reveal anything hidden in text
//!
//! A CLI for scanning text for hidden-Unicode steganography and for
//! producing hidden payloads of its own. Scanning never fails on any
//! input; only I/O can error.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use unhide::{
    aggregate, detected_chars, encode_sneaky_bits, encode_tags, scan, DetectedChar, HiddenCounts,
    Token,
};

/// Unhide - Reveal anything hidden in text
///
/// Scans for Unicode Tag payloads, sneaky-bit channels, variation
/// selectors, zero-width characters, directional overrides, and control
/// codes; decodes what can be decoded.
#[derive(Parser)]
#[command(name = "unhide")]
#[command(version)]
#[command(about = "Scan text for hidden-Unicode steganography and decode it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text for hidden characters
    ///
    /// Reads the given file, or stdin when no file is given. Exits with
    /// status 1 when hidden content is found, so the command can gate CI
    /// pipelines.
    Scan {
        /// Path to the text file to scan (stdin if omitted)
        input: Option<PathBuf>,

        /// Emit the full result (tokens, counts, detected list) as JSON
        #[arg(long)]
        json: bool,

        /// Print summary counts only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Encode a message into invisible characters
    ///
    /// With --cover, the payload is spliced into the middle of the cover
    /// text; otherwise the bare invisible payload is printed.
    Hide {
        /// The message to hide
        #[arg(short, long)]
        message: String,

        /// Encoding channel: tags (ASCII only) or bits (any UTF-8)
        #[arg(long, default_value = "tags")]
        method: String,

        /// Visible text to splice the payload into
        #[arg(long)]
        cover: Option<String>,
    },
}

/// Everything the scanner produced, for --json output.
#[derive(Serialize)]
struct ScanReport {
    tokens: Vec<Token>,
    counts: HiddenCounts,
    detected: Vec<DetectedChar>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input, json, quiet } => cmd_scan(input, json, quiet),
        Commands::Hide {
            message,
            method,
            cover,
        } => {
            cmd_hide(&message, &method, cover.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_scan(input: Option<PathBuf>, json: bool, quiet: bool) -> Result<ExitCode> {
    let text = read_input(input)?;

    let tokens = scan(&text);
    let counts = aggregate(&tokens);
    let detected = detected_chars(&tokens);
    let found_hidden = counts.total_hidden > 0;

    if json {
        let report = ScanReport {
            tokens,
            counts,
            detected,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize scan report")?
        );
    } else {
        if !quiet {
            if detected.is_empty() {
                println!("No hidden characters found.");
            } else {
                println!("Hidden characters found:");
                for d in &detected {
                    println!("  [{}] {}", d.position, d.description);
                    print_decoded_preview(&tokens, d.position);
                }
            }
        }
        print_counts(&counts);
    }

    if found_hidden {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Shows what a decodable run at the given position actually says.
fn print_decoded_preview(tokens: &[Token], position: usize) {
    let Some(token) = tokens.iter().find(|t| t.start() == position) else {
        return;
    };

    let decoded = match token {
        Token::UnicodeTag { decoded, .. } => decoded,
        Token::SneakyBits {
            decoded,
            is_decoded: true,
            ..
        } => decoded,
        _ => return,
    };

    let payload: String = decoded.iter().map(|t| t.source_text()).collect();
    if !payload.is_empty() {
        println!("        decodes to: {:?}", payload);
    }
}

fn print_counts(counts: &HiddenCounts) {
    println!(
        "Totals: hidden={} (tags={}, selectors={}, sneaky-bit runs={}, \
         sneaky-bit markers={}, invisibles={})",
        counts.total_hidden,
        counts.unicode_tags,
        counts.variant_selectors,
        counts.sneaky_bit_chars,
        counts.sneaky_bit_bytes,
        counts.invisible_others,
    );
}

fn cmd_hide(message: &str, method: &str, cover: Option<&str>) -> Result<()> {
    let payload = match method {
        "tags" => encode_tags(message).context("Tag encoding failed")?,
        "bits" => encode_sneaky_bits(message),
        other => bail!("Unknown method '{}' (expected 'tags' or 'bits')", other),
    };

    match cover {
        Some(cover) => {
            // Splice at the midpoint so the payload hides inside a word
            let chars: Vec<char> = cover.chars().collect();
            let mid = chars.len() / 2;
            let head: String = chars[..mid].iter().collect();
            let tail: String = chars[mid..].iter().collect();
            println!("{}{}{}", head, payload, tail);
        }
        None => println!("{}", payload),
    }

    Ok(())
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
