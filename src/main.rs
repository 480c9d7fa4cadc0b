//! Wordlist Dedupe - wordlist deduplication and merging
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_dedupe::cli::Args;
use wordlist_dedupe::processor::{Processor, ProcessorConfig};
use wordlist_dedupe::progress::{print_error, Console};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; RUST_LOG still wins when set
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "off"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let console = Console::new(args.quiet);
    console.banner();

    let config = ProcessorConfig::from_args(&args)?;

    if args.verbose {
        print_config(&console, &args, &config);
    }

    let processor = Processor::new(config)?;
    processor.process(&args.input_path)?;

    Ok(())
}

/// Print configuration summary
fn print_config(console: &Console, args: &Args, config: &ProcessorConfig) {
    console.section("Configuration");

    console.note(&format!("Mode:          {:?}", config.mode));
    console.note(&format!("Input:         {:?}", args.input_path));
    console.note(&format!("Output dir:    {:?}", config.output_dir));
    console.note(&format!("Normalization: {:?}", config.normalization));
    console.note(&format!("Sorted output: {}", config.sort_output));
}
