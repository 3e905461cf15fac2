//! conversely CLI
//!
//! Entry point for the `conversely` tool. Parses CLI arguments, builds the
//! Runtime and prints one conversion per value.

use clap::Parser as ClapParser;
use conversely_cli::{Cli, Runtime};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let mut runtime = match Runtime::from_cli(&cli) {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.show_options {
        println!("{}", runtime.options_json());
    }

    for value in &cli.values {
        println!("{}", runtime.execute_string(value));
    }

    if cli.repl {
        if let Err(e) = runtime.repl() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    } else if cli.values.is_empty() && !cli.show_options {
        // Default: show usage
        println!("conversely v{}", conversion::Conversely::version());
        println!();
        println!("Usage:");
        println!("  conversely [OPTIONS] <VALUE>...   Convert values");
        println!("  conversely --repl                 Start interactive REPL");
        println!("  conversely --show-options         Print the effective options");
        println!();
        println!("Run 'conversely --help' for more options.");
    }
}
