use crate::adapters::{check_dialect, open_source};
use crate::config::ReaderConfig;
use crate::domain::model::{BenchReport, BenchState, Engine};
use crate::utils::error::{BenchError, Result};
use chrono::Utc;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where the benchmark binary looks for its input, relative to the
/// working directory it was started from.
pub const DEFAULT_INPUT: &str = "benchmark/players_20.csv";

/// One timed pass over a CSV file: open, drain record by record, report.
pub struct Benchmark {
    path: PathBuf,
    config: ReaderConfig,
    state: BenchState,
}

impl Benchmark {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, ReaderConfig::default())
    }

    pub fn with_config<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
            state: BenchState::Opening,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> BenchState {
        self.state
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Runs the pass with `engine`. A run can be repeated; each call starts
    /// over from `Opening`.
    pub fn run(&mut self, engine: Engine) -> Result<BenchReport> {
        self.state = BenchState::Opening;
        let result = self.drain(engine);
        self.state = match result {
            Ok(_) => BenchState::Done,
            Err(_) => BenchState::Failed,
        };
        result
    }

    fn drain(&mut self, engine: Engine) -> Result<BenchReport> {
        check_dialect(engine, &self.config)?;
        tracing::debug!("opening {} for {}", self.path.display(), engine);
        let file = File::open(&self.path).map_err(|source| BenchError::Open {
            path: self.path.clone(),
            source,
        })?;

        let started_at = Utc::now();
        let start = Instant::now();

        let mut source = open_source(engine, file, &self.config)?;
        self.state = BenchState::Reading;
        let mut records = 0;
        while source.advance()? {
            records += 1;
        }

        let elapsed = start.elapsed();
        let file_name = self.file_name();
        match engine {
            Engine::Native => tracing::info!("Read {} took {:?}", file_name, elapsed),
            Engine::CsvCrate => {
                tracing::info!("Read {} with {} took {:?}", file_name, engine, elapsed)
            }
        }
        tracing::debug!("{} consumed {} records", engine, records);

        Ok(BenchReport {
            engine,
            file_name,
            records,
            elapsed,
            started_at,
        })
    }
}
