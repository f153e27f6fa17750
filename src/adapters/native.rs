use crate::config::ReaderConfig;
use crate::core::reader::Reader;
use crate::domain::model::Engine;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use std::io::Read;

pub struct NativeSource<R> {
    reader: Reader<R>,
}

impl<R: Read> NativeSource<R> {
    pub fn new(rdr: R, config: ReaderConfig) -> Result<Self> {
        Ok(Self {
            reader: Reader::with_config(rdr, config)?,
        })
    }
}

impl<R: Read> RecordSource for NativeSource<R> {
    fn engine(&self) -> Engine {
        Engine::Native
    }

    fn advance(&mut self) -> Result<bool> {
        Ok(self.reader.read()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BenchError;

    #[test]
    fn test_invalid_delimiter_is_a_config_error() {
        let config = ReaderConfig::default().with_comma('\n');
        let err = NativeSource::new(&b"a,b\n"[..], config).err().unwrap();
        assert!(matches!(err, BenchError::Config { .. }));
        assert!(!err.is_fatal_decode());
    }
}
