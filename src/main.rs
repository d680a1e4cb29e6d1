use aerodrome_ingest::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            // Without a signal handler, never resolve and let the command finish
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(aerodrome_ingest::Error::processing_interrupted(
                    "Processing interrupted by user",
                )
                .into())
            }
        }
    });

    match result {
        Ok(stats) if stats.has_failures() => {
            // Failures have already been reported by the command
            process::exit(1);
        }
        Ok(_) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Aerodrome Ingest - Aerodrome Register Ingestion Pipeline");
    println!("========================================================");
    println!();
    println!("Convert free-form aerodrome register entries into validated, structured");
    println!("aerodrome records and store them as JSON aggregates.");
    println!();
    println!("USAGE:");
    println!("    aerodrome-ingest <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Parse, validate and store register entries (main command)");
    println!("    validate    Parse and validate a single entry without storing it");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ingest every *.txt entry under a directory:");
    println!("    aerodrome-ingest process ./entries");
    println!();
    println!("    # Preview changes without storing anything:");
    println!("    aerodrome-ingest process ./entries --dry-run -v");
    println!();
    println!("    # Check one entry and print warnings as JSON:");
    println!("    aerodrome-ingest validate SBSP.txt --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    aerodrome-ingest <COMMAND> --help");
}
