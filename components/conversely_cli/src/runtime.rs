//! Runtime behind the `conversely` command
//!
//! The Runtime owns one frozen [`Conversely`] instance built from the
//! configuration file and `--set` overrides, and renders conversions of
//! command-line literals.

use std::path::Path;

use conversion::{ConversionOptions, Conversely, LenientOptions};
use core_types::format_number;
use serde_json::{json, Map, Value as JsonValue};

use crate::cli::{Cli, Target};
use crate::error::{CliError, CliResult};
use crate::literal::parse_literal;

/// Results of all three conversions of one literal
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// `numberify` result
    pub number: Option<f64>,
    /// `stringify` result
    pub string: Option<String>,
    /// `booleanify` result
    pub boolean: Option<bool>,
}

impl Conversion {
    /// JSON object with the three results; indeterminate results are `null`
    pub fn to_json(&self) -> JsonValue {
        json!({
            "number": self.number.map(number_json),
            "string": self.string,
            "boolean": self.boolean,
        })
    }
}

/// Whole numbers print without a fractional part.
fn number_json(n: f64) -> JsonValue {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        json!(n as i64)
    } else {
        json!(n)
    }
}

/// Conversion runtime for the CLI and REPL
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    conversely: Conversely,
    target: Target,
}

impl Runtime {
    /// Create a runtime with the given options, printing all three conversions
    ///
    /// # Example
    /// ```
    /// use conversely_cli::Runtime;
    /// use conversion::ConversionOptions;
    ///
    /// let runtime = Runtime::new(ConversionOptions::default());
    /// assert_eq!(runtime.execute_string("\"2\""), r#"{"boolean":null,"number":2,"string":"2"}"#);
    /// ```
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            conversely: Conversely::with_options(options),
            target: Target::All,
        }
    }

    /// Select the conversion to print
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Build a runtime from parsed command-line arguments
    ///
    /// # Errors
    /// Returns `CliError` if the configuration file cannot be read or parsed,
    /// or a `--set` argument is malformed
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let options = load_options(cli.config.as_deref(), &cli.set)?;
        Ok(Self::new(options).with_target(cli.to))
    }

    /// Currently selected target
    pub fn target(&self) -> Target {
        self.target
    }

    /// Change the selected target
    pub fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    /// The conversion facade
    pub fn conversely(&self) -> &Conversely {
        &self.conversely
    }

    /// Run all three conversions on a literal
    pub fn convert(&self, literal: &str) -> Conversion {
        let value = parse_literal(literal);
        tracing::trace!(literal, value = ?value, "parsed literal");
        Conversion {
            number: self.conversely.numberify(&value),
            string: self.conversely.stringify(&value),
            boolean: self.conversely.booleanify(&value),
        }
    }

    /// Convert a literal and render it for the selected target
    ///
    /// A single target prints the bare result (`null` when indeterminate);
    /// `all` prints one JSON object.
    pub fn execute_string(&self, literal: &str) -> String {
        let conversion = self.convert(literal);
        let indeterminate = || "null".to_string();
        match self.target {
            Target::Number => conversion.number.map(format_number).unwrap_or_else(indeterminate),
            Target::String => conversion.string.unwrap_or_else(indeterminate),
            Target::Boolean => conversion
                .boolean
                .map(|b| b.to_string())
                .unwrap_or_else(indeterminate),
            Target::All => conversion.to_json().to_string(),
        }
    }

    /// Effective options as pretty JSON
    pub fn options_json(&self) -> String {
        serde_json::to_string_pretty(&self.conversely.options()).unwrap_or_default()
    }

    /// Start the interactive REPL
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}

/// Read the configuration file (if any) and apply `KEY=VALUE` overrides.
///
/// Keys may address nested tables with dots (`boolean.trimString`). Values
/// are JSON; a value that is not JSON is taken as a string.
pub fn load_options(config: Option<&Path>, settings: &[String]) -> CliResult<ConversionOptions> {
    let mut raw = match config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| CliError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => JsonValue::Object(Map::new()),
    };
    if !raw.is_object() {
        tracing::warn!("configuration is not a JSON object; using defaults");
        raw = JsonValue::Object(Map::new());
    }

    for setting in settings {
        let (key, value) = parse_setting(setting)?;
        insert_path(&mut raw, &key, value);
    }

    tracing::debug!(config = %raw, "loading options");
    Ok(ConversionOptions::from_json(&raw))
}

/// Split `KEY=VALUE` and parse the value.
pub fn parse_setting(setting: &str) -> CliResult<(String, JsonValue)> {
    let Some((key, value)) = setting.split_once('=') else {
        return Err(CliError::InvalidSetting(setting.to_string()));
    };
    let key = key.trim();
    if key.is_empty() || key.split('.').any(str::is_empty) {
        return Err(CliError::InvalidSetting(setting.to_string()));
    }
    let value = serde_json::from_str(value.trim())
        .unwrap_or_else(|_| JsonValue::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn insert_path(root: &mut JsonValue, key: &str, value: JsonValue) {
    let mut node = root;
    let mut segments = key.split('.').peekable();
    while let Some(segment) = segments.next() {
        if !node.is_object() {
            *node = JsonValue::Object(Map::new());
        }
        let JsonValue::Object(map) = node else {
            return;
        };
        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return;
        }
        node = map
            .entry(segment.to_string())
            .or_insert_with(|| JsonValue::Object(Map::new()));
    }
}
