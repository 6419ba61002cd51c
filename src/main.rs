use brazilian_holidays::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Brazilian Holidays - National, State and Municipal Holiday Importer");
    println!("===================================================================");
    println!();
    println!("List the holidays of the bundled Brazilian datasets for a given year.");
    println!();
    println!("USAGE:");
    println!("    brazilian-holidays <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    list        List national, state and municipal holidays for a year");
    println!("    datasets    Show the available datasets and their row counts");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Holidays of the current year:");
    println!("    brazilian-holidays list");
    println!();
    println!("    # São Paulo holidays for 2025 as JSON:");
    println!("    brazilian-holidays list --year 2025 --state SP --format json");
    println!();
    println!("    # Municipal holidays from a custom dataset directory:");
    println!("    brazilian-holidays list --scope municipal --data-dir ./datasets --strict");
    println!();
    println!("For detailed help on any command, use:");
    println!("    brazilian-holidays <COMMAND> --help");
}
