//! Configuration for tsexpr parsing and output.
//!
//! The defaults live in `defaults/tsexpr.default.toml` and are compiled in. A [Loader]
//! starts from them and layers TOML files, inline TOML and single-key overrides on top;
//! each layer only needs the keys it changes.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tsexpr_parser::tsexpr::formats::{FormatRegistry, JsonFormatter, TreeFormatter, TreeWriterOptions};
use tsexpr_parser::tsexpr::parsing::{BlankLinePolicy, ParseOptions, MAX_DEPTH_CEILING};

const DEFAULT_TOML: &str = include_str!("../defaults/tsexpr.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct TsexprConfig {
    pub parsing: ParsingConfig,
    pub formatting: FormattingConfig,
}

/// The `[parsing]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub indented_blank_lines: BlankLinePolicy,
    pub max_depth: usize,
}

impl ParsingConfig {
    /// Parser options for this table. `max_depth` is capped at [MAX_DEPTH_CEILING].
    pub fn to_parse_options(&self) -> ParseOptions {
        ParseOptions {
            indented_blank_lines: self.indented_blank_lines,
            max_depth: self.max_depth.min(MAX_DEPTH_CEILING),
        }
    }
}

/// The `[formatting]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub trailing_newline: bool,
    pub json_pretty: bool,
}

impl FormattingConfig {
    pub fn to_tree_writer_options(&self) -> TreeWriterOptions {
        TreeWriterOptions {
            trailing_newline: self.trailing_newline,
        }
    }

    /// The default formats, with `tree` and `json` set up from this table.
    pub fn format_registry(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(TreeFormatter {
            options: self.to_tree_writer_options(),
        });
        registry.register(JsonFormatter {
            pretty: self.json_pretty,
        });
        registry
    }
}

/// Layers configuration sources over the compiled-in defaults. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Layer TOML text, such as settings embedded in a host application.
    pub fn with_toml(mut self, text: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(text, FileFormat::Toml));
        self
    }

    /// Set one dotted key, e.g. `parsing.max_depth`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TsexprConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<TsexprConfig, ConfigError> {
    Loader::new().build()
}
