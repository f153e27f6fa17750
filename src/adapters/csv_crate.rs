use crate::config::{FieldCount, ReaderConfig};
use crate::domain::model::Engine;
use crate::domain::ports::RecordSource;
use crate::utils::error::{BenchError, ParseError, ParseErrorKind, ReaderError, Result};
use std::io::Read;

fn single_byte(field: &str, c: char) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| BenchError::Config {
            field: field.to_string(),
            message: format!("the csv crate engine only supports ASCII, got {:?}", c),
        })
}

fn unsupported(field: &str, message: &str) -> BenchError {
    BenchError::Config {
        field: field.to_string(),
        message: format!("the csv crate engine {}", message),
    }
}

/// Fails for dialects the `csv` crate cannot decode the same way as the
/// native reader. The crate always tolerates stray quotes and has no
/// leading-space-only trim.
pub fn check_dialect(config: &ReaderConfig) -> Result<()> {
    single_byte("comma", config.comma)?;
    if let Some(comment) = config.comment {
        single_byte("comment", comment)?;
    }
    if !config.lazy_quotes {
        return Err(unsupported(
            "lazy_quotes",
            "always accepts bare quotes; set lazy_quotes = true",
        ));
    }
    if config.trim_leading_space {
        return Err(unsupported(
            "trim_leading_space",
            "cannot trim only leading whitespace",
        ));
    }
    Ok(())
}

/// The `csv` crate's reader, for comparison runs. The header row is read
/// as an ordinary record so both engines count the same rows.
pub struct CsvCrateSource<R> {
    reader: csv::Reader<R>,
    record: csv::ByteRecord,
    fixed_fields: Option<usize>,
}

impl<R: Read> CsvCrateSource<R> {
    pub fn new(rdr: R, config: &ReaderConfig) -> Result<Self> {
        check_dialect(config)?;
        let comment = config
            .comment
            .map(|c| single_byte("comment", c))
            .transpose()?;
        let fixed_fields = match config.fields_per_record {
            FieldCount::Fixed(n) => Some(n),
            _ => None,
        };
        // Only an inferred count is left to the crate; fixed counts are
        // checked in `advance`.
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(single_byte("comma", config.comma)?)
            .comment(comment)
            .flexible(config.fields_per_record != FieldCount::Inferred)
            .from_reader(rdr);

        Ok(Self {
            reader,
            record: csv::ByteRecord::new(),
            fixed_fields,
        })
    }
}

impl<R: Read> RecordSource for CsvCrateSource<R> {
    fn engine(&self) -> Engine {
        Engine::CsvCrate
    }

    fn advance(&mut self) -> Result<bool> {
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(false);
        }
        if let Some(expected) = self.fixed_fields {
            if self.record.len() != expected {
                let line = self
                    .record
                    .position()
                    .map_or(0, |pos| pos.line() as usize);
                return Err(ReaderError::from(ParseError {
                    start_line: line,
                    line,
                    column: 0,
                    kind: ParseErrorKind::FieldCount,
                })
                .into());
            }
        }
        Ok(true)
    }
}
