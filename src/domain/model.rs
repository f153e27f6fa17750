use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// One decoded row.
pub type Record = Vec<String>;

/// A decoder the benchmark can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    Native,
    CsvCrate,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Native => f.write_str("rcsv"),
            Engine::CsvCrate => f.write_str("csv crate"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EngineChoice {
    #[default]
    Native,
    Csv,
    All,
}

impl EngineChoice {
    pub fn engines(&self) -> &'static [Engine] {
        match self {
            EngineChoice::Native => &[Engine::Native],
            EngineChoice::Csv => &[Engine::CsvCrate],
            EngineChoice::All => &[Engine::Native, Engine::CsvCrate],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchState {
    Opening,
    Reading,
    Done,
    Failed,
}

impl BenchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BenchState::Done | BenchState::Failed)
    }
}

/// Outcome of one successful read-to-exhaustion pass.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub engine: Engine,
    pub file_name: String,
    pub records: usize,
    #[serde(serialize_with = "serialize_duration_ms")]
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
}

fn serialize_duration_ms<S: serde::Serializer>(
    d: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_nanos() as f64 / 1_000_000.0)
}
