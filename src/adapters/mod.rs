// Adapters layer: concrete decoders behind the RecordSource port.

pub mod csv_crate;
pub mod native;

use crate::config::ReaderConfig;
use crate::domain::model::Engine;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Read;

/// Fails with a config error if `engine` cannot decode `config`.
pub fn check_dialect(engine: Engine, config: &ReaderConfig) -> Result<()> {
    config.validate()?;
    match engine {
        Engine::Native => Ok(()),
        Engine::CsvCrate => csv_crate::check_dialect(config),
    }
}

/// Builds the source for `engine` on top of an already opened stream.
pub fn open_source<'a, R: Read + 'a>(
    engine: Engine,
    rdr: R,
    config: &ReaderConfig,
) -> Result<Box<dyn RecordSource + 'a>> {
    Ok(match engine {
        Engine::Native => Box::new(native::NativeSource::new(rdr, config.clone())?),
        Engine::CsvCrate => Box::new(csv_crate::CsvCrateSource::new(rdr, config)?),
    })
}
