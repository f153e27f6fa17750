pub mod dialect;

pub use dialect::{FieldCount, ReaderConfig};

#[cfg(feature = "cli")]
use crate::domain::model::EngineChoice;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Switches for the benchmark binary. None of them move the input file,
/// which is always `benchmark/players_20.csv` under the working directory.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "rcsv-bench")]
#[command(about = "Times a full record-by-record read of benchmark/players_20.csv")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, value_enum, default_value_t = EngineChoice::Native)]
    pub engine: EngineChoice,

    /// TOML file with the reader dialect (comma, comment, lazy_quotes, ...)
    #[arg(long)]
    pub dialect: Option<PathBuf>,

    /// Print the run reports as JSON on stdout
    #[arg(long)]
    pub report: bool,

    #[arg(long, help = "Log process CPU and memory usage after the run")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_dialect(&self) -> Result<ReaderConfig> {
        match &self.dialect {
            Some(path) => ReaderConfig::from_file(path),
            None => Ok(ReaderConfig::default()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.dialect {
            validate_path("dialect", path)?;
        }
        Ok(())
    }
}
