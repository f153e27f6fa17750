pub mod bench;
pub mod line_reader;
pub mod reader;
pub mod record_buffer;

pub use crate::domain::model::{BenchReport, BenchState, Engine, Record};
pub use crate::domain::ports::RecordSource;
pub use crate::utils::error::Result;
