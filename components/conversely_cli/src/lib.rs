//! Conversely CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `conversely`
//! command-line tool.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod literal;
pub mod repl;
pub mod runtime;

pub use cli::{Cli, Target};
pub use error::{CliError, CliResult};
pub use literal::parse_literal;
pub use runtime::{Conversion, Runtime};
