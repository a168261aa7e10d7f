//! Simple CLI that reads a page from stdin and prints the extracted record as JSON.
//!
//! Usage:
//!   extract_stdin catalog        < search-results.html
//!   extract_stdin detail <id>    < product-page.html
//!
//! Logs go to stderr; set `RUST_LOG=gamestop_extract=debug` to see skipped labels.

use std::io::{self, Read};
use std::process::ExitCode;

use gamestop_extract::{extract_catalog_bytes, extract_game_bytes};
use tracing_subscriber::EnvFilter;

fn usage() -> ExitCode {
    eprintln!("usage: extract_stdin catalog | extract_stdin detail <id>");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!(error = %err, "failed to read stdin");
        return ExitCode::FAILURE;
    }

    let json = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["catalog"] => extract_catalog_bytes(&html).map(|r| serde_json::to_string_pretty(&r)),
        ["detail", id] => {
            let Ok(id) = id.parse::<u32>() else {
                return usage();
            };
            extract_game_bytes(id, &html)
                .map(|game| serde_json::to_string_pretty(&game))
        }
        _ => return usage(),
    };

    match json {
        Ok(Ok(json)) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            tracing::error!(error = %err, "failed to serialize record");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(error = %err, "extraction failed");
            ExitCode::FAILURE
        }
    }
}
