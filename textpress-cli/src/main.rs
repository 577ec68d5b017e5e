//! textpress CLI - adaptive-dictionary text compression.
//!
//! Compresses from a file or stdin to a file or stdout, and back. Both
//! directions use the canonical configuration (byte alphabet, 12-bit
//! codes); a stream must be expanded by the same build that compressed it.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use textpress::{compress_text, expand_text};

#[derive(Parser)]
#[command(name = "textpress")]
#[command(author, version, about = "Adaptive-dictionary text compression")]
#[command(long_about = "
textpress replaces repeated substrings with fixed-width numeric codes,
learned in a single pass and never stored in the stream.

Examples:
  textpress compress input.txt -o input.txt.tp
  textpress expand input.txt.tp -o input.txt
  textpress compress < input.txt > input.txt.tp
  textpress expand -v archive.tp
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file (or stdin) into a code stream
    #[command(alias = "c")]
    Compress {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Output file; writes stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report sizes and ratio on stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Expand a code stream back into the original bytes
    #[command(alias = "x")]
    Expand {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Output file; writes stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report sizes and ratio on stderr
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            verbose,
        } => run(input.as_deref(), output.as_deref(), verbose, compress_text),
        Commands::Expand {
            input,
            output,
            verbose,
        } => run(input.as_deref(), output.as_deref(), verbose, expand_text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(
    input: Option<&Path>,
    output: Option<&Path>,
    verbose: bool,
    transform: fn(&[u8]) -> textpress::Result<Vec<u8>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let transformed = transform(&data)?;

    if verbose {
        let ratio = if data.is_empty() {
            100.0
        } else {
            transformed.len() as f64 / data.len() as f64 * 100.0
        };
        eprintln!(
            "{} bytes in, {} bytes out ({:.2}%)",
            data.len(),
            transformed.len(),
            ratio
        );
    }

    write_output(output, &transformed)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()
        }
    }
}
