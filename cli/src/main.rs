//! unembed CLI - embedded JSON extraction tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use unembed::{extract_file, extract_to_file, ExtractOptions, JsonFormat};

#[derive(Parser)]
#[command(name = "unembed")]
#[command(version)]
#[command(about = "Extract an embedded JSON configuration object from an HTML page", long_about = None)]
struct Cli {
    /// Input HTML/text file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Target key literal, including quotes and colon
    #[arg(long, value_name = "KEY")]
    key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the payload and write it to a JSON file
    Extract {
        /// Input HTML/text file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output JSON file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Target key literal, including quotes and colon
        #[arg(long, value_name = "KEY")]
        key: Option<String>,

        /// Sub-mapping counted in the extraction summary
        #[arg(long, value_name = "KEY")]
        summary_key: Option<String>,

        /// Skip braces inside string literals while scanning
        #[arg(long)]
        quote_aware: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract the payload and print statistics without writing output
    Info {
        /// Input HTML/text file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Target key literal, including quotes and colon
        #[arg(long, value_name = "KEY")]
        key: Option<String>,

        /// Sub-mapping counted in the extraction summary
        #[arg(long, value_name = "KEY")]
        summary_key: Option<String>,

        /// Skip braces inside string literals while scanning
        #[arg(long)]
        quote_aware: bool,
    },

    /// Show version information
    Version,
}

fn build_options(
    key: Option<String>,
    summary_key: Option<String>,
    quote_aware: bool,
    compact: bool,
) -> ExtractOptions {
    let mut options = ExtractOptions::new();
    if let Some(key) = key {
        options = options.with_key(key);
    }
    if let Some(summary_key) = summary_key {
        options = options.with_summary_key(summary_key);
    }
    if quote_aware {
        options = options.quote_aware();
    }
    if compact {
        options = options.compact();
    }
    options
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            key,
            summary_key,
            quote_aware,
            compact,
        }) => cmd_extract(
            &input,
            &output,
            build_options(key, summary_key, quote_aware, compact),
        ),
        Some(Commands::Info {
            input,
            key,
            summary_key,
            quote_aware,
        }) => cmd_info(&input, build_options(key, summary_key, quote_aware, false)),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if both paths are provided
            match (cli.input, cli.output) {
                (Some(input), Some(output)) => {
                    cmd_extract(&input, &output, build_options(cli.key, None, false, false))
                }
                _ => {
                    println!("{}", "Usage: unembed <INPUT> <OUTPUT>".yellow());
                    println!("       unembed --help for more information");
                    Ok(())
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    input: &Path,
    output: &Path,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("extracting {:?} from {}", options.key, input.display());
    let extraction = extract_to_file(input, output, &options)?;

    println!(
        "{} {} entries extracted",
        "Done!".green().bold(),
        extraction.stats.entry_count
    );
    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn cmd_info(input: &Path, options: ExtractOptions) -> Result<(), Box<dyn std::error::Error>> {
    let extraction = extract_file(input, &options)?;

    println!("{}", "Extraction Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Key".bold(), options.key);
    println!("{}: {}", "Payload span".bold(), extraction.span);
    println!("{}: {} bytes", "Payload size".bold(), extraction.stats.payload_len);
    println!(
        "{}: {} (in {:?})",
        "Entries".bold(),
        extraction.stats.entry_count,
        options.summary_key
    );

    if let Some(map) = extraction.value.as_object() {
        println!();
        println!("{}", "Top-level keys".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for key in map.keys() {
            println!("  {} {}", "-".dimmed(), key);
        }
    }

    // Pretty length is what an actual write would produce
    let rendered = extraction.to_json(JsonFormat::Pretty)?;
    println!();
    println!("{}: {} bytes", "Serialized size".bold(), rendered.len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unembed".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Embedded JSON extraction tool");
    println!();
    println!("License: MIT");
}
