pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{FieldCount, ReaderConfig};
pub use crate::core::{bench::Benchmark, reader::Reader};
pub use domain::model::{BenchReport, BenchState, Engine, Record};
pub use utils::error::{BenchError, ParseError, ParseErrorKind, ReaderError, Result};
