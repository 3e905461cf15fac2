//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which conversion to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// `numberify`
    Number,
    /// `stringify`
    String,
    /// `booleanify`
    Boolean,
    /// All three, as one JSON object per value
    #[default]
    All,
}

impl Target {
    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Number => "number",
            Target::String => "string",
            Target::Boolean => "boolean",
            Target::All => "all",
        }
    }
}

/// Strict conversion of values to number, string and boolean
#[derive(Debug, Parser)]
#[command(name = "conversely", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Values to convert (JSON, `undefined`, `NaN`, `Infinity`, or raw text)
    pub values: Vec<String>,

    /// Conversion to apply
    #[arg(short, long, value_enum, default_value_t = Target::All)]
    pub to: Target,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override one option, e.g. `valueOfBlank=0` or `boolean.trimString=true`
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Start interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Print the effective options as JSON
    #[arg(long)]
    pub show_options: bool,
}
