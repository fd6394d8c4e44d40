//! Clueload CLI - Convert Jeopardy clue CSV archives to JSON
//!
//! ```bash
//! clueload                                  # data/single_jeopardy.csv → data/single_jeopardy.json
//! clueload -i clues.csv -o clues.json      # explicit paths
//! clueload -i clues.csv -d ';'             # semicolon-delimited input
//! ```

use clap::Parser;
use clueload::{convert, ConvertOptions};
use std::path::PathBuf;

/// Input path of the reference data set.
const DEFAULT_INPUT: &str = "data/single_jeopardy.csv";
/// Output path the game board loads.
const DEFAULT_OUTPUT: &str = "data/single_jeopardy.json";

#[derive(Parser)]
#[command(name = "clueload")]
#[command(about = "Convert a Jeopardy clue CSV archive to JSON", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// CSV delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Converting: {}", cli.input.display());

    let options = ConvertOptions {
        delimiter: delimiter_byte(cli.delimiter)?,
    };

    let report = convert(&cli.input, &cli.output, &options)?;

    eprintln!("   Columns: {}", report.headers.join(", "));
    println!(
        "✅ Converted {} rows → {}",
        report.rows,
        report.output.display()
    );

    Ok(())
}

fn delimiter_byte(d: char) -> Result<u8, Box<dyn std::error::Error>> {
    if d.is_ascii() {
        Ok(d as u8)
    } else {
        Err(format!("Delimiter must be a single ASCII character, got '{}'", d).into())
    }
}
