use clap::Parser;
use jma_tide_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("JMA Tide Processor - Japan Meteorological Agency Tide Table Converter");
    println!("=====================================================================");
    println!();
    println!("Download JMA hourly tide tables and convert them from fixed-width");
    println!("text into structured JSON files for analysis.");
    println!();
    println!("USAGE:");
    println!("    jma_tide_processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Download and decode tide tables for every station (main command)");
    println!("    decode      Decode already-downloaded tide text files offline");
    println!("    stations    Generate station catalog reports grouped by region");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch the current year's tide tables for all stations:");
    println!("    jma_tide_processor fetch");
    println!();
    println!("    # Fetch selected stations for a specific year:");
    println!("    jma_tide_processor fetch --stations TK,OS --year 2027 --output /path/to/data");
    println!();
    println!("    # Re-decode a cached text file without touching the network:");
    println!("    jma_tide_processor decode data/raw_txt/TK.txt");
    println!();
    println!("    # Generate a station catalog report:");
    println!("    jma_tide_processor stations --format json");
    println!();
    println!("    # Get help for specific commands:");
    println!("    jma_tide_processor fetch --help");
    println!("    jma_tide_processor stations --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    jma_tide_processor <COMMAND> --help");
}
