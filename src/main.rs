use std::path::PathBuf;
use std::process::ExitCode;

use cat_tweets::{CatExtractor, ExtractError};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use tracing::Level;

/// Extract #每日一猫 tweets from a Twitter data export into cats.json
#[derive(Parser)]
struct Args {
    /// Path to the data export zip file
    // clap's PathBuf parser rejects "", which has to reach the usage message
    #[arg(value_parser = OsStringValueParser::new().map(PathBuf::from))]
    archive: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let archive = match args.archive {
        Some(archive) if !archive.as_os_str().is_empty() => archive,
        _ => {
            let program = std::env::args_os()
                .next()
                .map(|arg| arg.to_string_lossy().into_owned())
                .unwrap_or_else(|| "cat-tweets".to_owned());
            println!("usage: {} <path to zip file>", program);
            return ExitCode::from(1);
        }
    };

    let extractor = CatExtractor::builder().archive(archive).build();
    match run(&extractor) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(extractor: &CatExtractor) -> Result<(), ExtractError> {
    let cats = extractor.extract()?;
    println!("{}", cats.len());
    extractor.write(&cats)
}
