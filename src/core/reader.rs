//! Record decoder for the `encoding/csv` dialect.
//!
//! Records are read line by line. Quoted fields may span several lines, in
//! which case the reader keeps pulling lines until the closing quote.

use crate::config::{FieldCount, ReaderConfig};
use crate::core::line_reader::LineReader;
use crate::core::record_buffer::RecordBuffer;
use crate::domain::model::Record;
use crate::utils::error::{ParseError, ParseErrorKind, ReaderError};
use crate::utils::validation::is_valid_delimiter;
use std::io::Read;

/// Number of bytes taken by a trailing `\n`.
fn length_nl(b: &[u8]) -> usize {
    match b.last() {
        Some(b'\n') => 1,
        _ => 0,
    }
}

/// Decodes the first character of `b`, if it is valid UTF-8.
fn first_char(b: &[u8]) -> Option<(char, usize)> {
    let window = &b[..b.len().min(4)];
    let chunk = window.utf8_chunks().next()?;
    let c = chunk.valid().chars().next()?;
    Some((c, c.len_utf8()))
}

fn trim_leading_space(mut b: &[u8]) -> &[u8] {
    while let Some((c, len)) = first_char(b) {
        if !c.is_whitespace() {
            break;
        }
        b = &b[len..];
    }
    b
}

/// Character count where every byte of an invalid sequence counts as one.
fn rune_count(b: &[u8]) -> usize {
    b.utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + chunk.invalid().len())
        .sum()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    match needle {
        [byte] => haystack.iter().position(|b| b == byte),
        _ => haystack
            .windows(needle.len())
            .position(|window| window == needle),
    }
}

pub struct Reader<R> {
    config: ReaderConfig,
    expected_fields: Option<usize>,
    lines: LineReader<R>,
    record: RecordBuffer,
}

impl<R: Read> Reader<R> {
    /// A reader for plain comma-separated input.
    pub fn new(rdr: R) -> Self {
        Self::build(rdr, ReaderConfig::default())
    }

    pub fn with_config(rdr: R, config: ReaderConfig) -> Result<Self, ReaderError> {
        let comment_ok = config.comment.map_or(true, is_valid_delimiter);
        if !is_valid_delimiter(config.comma) || !comment_ok || config.comment == Some(config.comma)
        {
            return Err(ReaderError::InvalidDelimiter);
        }
        Ok(Self::build(rdr, config))
    }

    fn build(rdr: R, config: ReaderConfig) -> Self {
        let expected_fields = match config.fields_per_record {
            FieldCount::Fixed(n) => Some(n),
            _ => None,
        };
        Self {
            config,
            expected_fields,
            lines: LineReader::new(rdr),
            record: RecordBuffer::new(),
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Lines consumed so far, counting the final read that hit end of input.
    pub fn line(&self) -> usize {
        self.lines.num_line()
    }

    /// Reads one record. `Ok(None)` means the input is exhausted.
    pub fn read(&mut self) -> Result<Option<Record>, ReaderError> {
        if !self.read_record()? {
            return Ok(None);
        }
        Ok(Some(self.record.to_record()))
    }

    pub fn read_all(&mut self) -> Result<Vec<Record>, ReaderError> {
        self.records().collect()
    }

    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            reader: self,
            done: false,
        }
    }

    /// Decodes the next record into the internal buffer.
    fn read_record(&mut self) -> Result<bool, ReaderError> {
        let mut comma_buf = [0u8; 4];
        let comma = self.config.comma.encode_utf8(&mut comma_buf).as_bytes();
        let mut comment_buf = [0u8; 4];
        let comment = match self.config.comment {
            Some(c) => Some(c.encode_utf8(&mut comment_buf).as_bytes()),
            None => None,
        };
        let lazy_quotes = self.config.lazy_quotes;
        let trim = self.config.trim_leading_space;

        // Skip empty lines and comments.
        loop {
            if !self.lines.read_line()? {
                return Ok(false);
            }
            let line = self.lines.line();
            if comment.is_some_and(|comment| line.starts_with(comment)) {
                continue;
            }
            if line.len() == length_nl(line) {
                continue;
            }
            break;
        }

        let rec_line = self.lines.num_line();
        self.record.clear();
        // Offset of the unparsed remainder in the current line.
        let mut pos = 0;

        'parse_field: loop {
            let line = self.lines.line();
            if trim {
                pos = line.len() - trim_leading_space(&line[pos..]).len();
            }
            let rest = &line[pos..];

            if rest.first() != Some(&b'"') {
                let comma_at = find(rest, comma);
                let field = match comma_at {
                    Some(i) => &rest[..i],
                    None => &rest[..rest.len() - length_nl(rest)],
                };
                if !lazy_quotes {
                    if let Some(j) = field.iter().position(|&b| b == b'"') {
                        return Err(ParseError {
                            start_line: rec_line,
                            line: self.lines.num_line(),
                            column: rune_count(&line[..pos + j]),
                            kind: ParseErrorKind::BareQuote,
                        }
                        .into());
                    }
                }
                self.record.extend(field);
                self.record.end_field();
                match comma_at {
                    Some(i) => {
                        pos += i + comma.len();
                        continue 'parse_field;
                    }
                    None => break 'parse_field,
                }
            }

            // Quoted field.
            pos += 1;
            loop {
                let line = self.lines.line();
                let rest = &line[pos..];
                if let Some(i) = rest.iter().position(|&b| b == b'"') {
                    self.record.extend(&rest[..i]);
                    pos += i + 1;
                    let rest = &line[pos..];
                    if rest.first() == Some(&b'"') {
                        // `""` is an escaped quote.
                        self.record.push(b'"');
                        pos += 1;
                    } else if rest.starts_with(comma) {
                        pos += comma.len();
                        self.record.end_field();
                        continue 'parse_field;
                    } else if length_nl(rest) == rest.len() {
                        self.record.end_field();
                        break 'parse_field;
                    } else if lazy_quotes {
                        self.record.push(b'"');
                    } else {
                        return Err(ParseError {
                            start_line: rec_line,
                            line: self.lines.num_line(),
                            column: rune_count(&line[..pos - 1]),
                            kind: ParseErrorKind::Quote,
                        }
                        .into());
                    }
                } else if !rest.is_empty() {
                    // The field continues on the next line.
                    self.record.extend(rest);
                    self.lines.read_line()?;
                    pos = 0;
                } else {
                    // End of input inside the quotes.
                    if !lazy_quotes {
                        return Err(ParseError {
                            start_line: rec_line,
                            line: self.lines.num_line(),
                            column: rune_count(line),
                            kind: ParseErrorKind::Quote,
                        }
                        .into());
                    }
                    self.record.end_field();
                    break 'parse_field;
                }
            }
        }

        self.check_field_count(rec_line)?;
        Ok(true)
    }

    fn check_field_count(&mut self, rec_line: usize) -> Result<(), ReaderError> {
        if self.config.fields_per_record == FieldCount::Variable {
            return Ok(());
        }
        let got = self.record.len();
        match self.expected_fields {
            Some(expected) if expected != got => Err(ParseError {
                start_line: rec_line,
                line: rec_line,
                column: 0,
                kind: ParseErrorKind::FieldCount,
            }
            .into()),
            Some(_) => Ok(()),
            None => {
                tracing::trace!("inferred {} fields per record from line {}", got, rec_line);
                self.expected_fields = Some(got);
                Ok(())
            }
        }
    }
}

/// Iterator over the remaining records. Stops after the first error.
pub struct Records<'r, R> {
    reader: &'r mut Reader<R>,
    done: bool,
}

impl<R: Read> Iterator for Records<'_, R> {
    type Item = Result<Record, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
