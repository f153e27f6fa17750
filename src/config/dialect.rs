use crate::utils::error::{BenchError, Result};
use crate::utils::validation::{validate_delimiters, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How many fields each record must have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCount {
    /// The first record decides; every later record must match it.
    #[default]
    Inferred,
    Fixed(usize),
    Variable,
}

/// The CSV dialect understood by [`crate::core::reader::Reader`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    pub comma: char,
    pub comment: Option<char>,
    pub fields_per_record: FieldCount,
    pub lazy_quotes: bool,
    pub trim_leading_space: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            comma: ',',
            comment: None,
            fields_per_record: FieldCount::Inferred,
            lazy_quotes: false,
            trim_leading_space: false,
        }
    }
}

impl ReaderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| BenchError::Config {
            field: "dialect".to_string(),
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_comma(mut self, comma: char) -> Self {
        self.comma = comma;
        self
    }

    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_fields_per_record(mut self, count: FieldCount) -> Self {
        self.fields_per_record = count;
        self
    }

    pub fn with_lazy_quotes(mut self, lazy: bool) -> Self {
        self.lazy_quotes = lazy;
        self
    }

    pub fn with_trim_leading_space(mut self, trim: bool) -> Self {
        self.trim_leading_space = trim;
        self
    }
}

impl Validate for ReaderConfig {
    fn validate(&self) -> Result<()> {
        validate_delimiters(self.comma, self.comment)
    }
}
