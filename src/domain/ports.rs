use crate::domain::model::Engine;
use crate::utils::error::Result;

/// A decoder positioned somewhere in a CSV stream.
pub trait RecordSource {
    fn engine(&self) -> Engine;

    /// Decodes and discards the next record. Returns `false` once the
    /// stream is exhausted.
    fn advance(&mut self) -> Result<bool>;
}
