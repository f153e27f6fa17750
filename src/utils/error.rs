use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What went wrong while decoding a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    BareQuote,
    Quote,
    FieldCount,
}

impl ParseErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::BareQuote => "bare \" in non-quoted-field",
            ParseErrorKind::Quote => "extraneous or missing \" in quoted-field",
            ParseErrorKind::FieldCount => "wrong number of fields",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A malformed record. Lines are 1-based, columns are 0-based rune offsets
/// into the line the error was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub start_line: usize,
    pub line: usize,
    pub column: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == ParseErrorKind::FieldCount {
            return write!(f, "record on line {}: {}", self.line, self.kind);
        }
        if self.start_line != self.line {
            return write!(
                f,
                "record on line {}; parse error on line {}, column {}: {}",
                self.start_line, self.line, self.column, self.kind
            );
        }
        write!(
            f,
            "parse error on line {}, column {}: {}",
            self.line, self.column, self.kind
        )
    }
}

impl std::error::Error for ParseError {}

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("csv: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Parse(#[from] ParseError),

    #[error("csv: invalid field or comment delimiter")]
    InvalidDelimiter,
}

impl ReaderError {
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            ReaderError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode failed: {0}")]
    Decode(#[source] ReaderError),

    #[error("decode failed (csv crate): {0}")]
    CsvCrate(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// An unusable delimiter is a dialect mistake, not a property of the input.
impl From<ReaderError> for BenchError {
    fn from(err: ReaderError) -> Self {
        match err {
            ReaderError::InvalidDelimiter => BenchError::Config {
                field: "comma".to_string(),
                message: ReaderError::InvalidDelimiter.to_string(),
            },
            other => BenchError::Decode(other),
        }
    }
}

impl BenchError {
    /// True for failures raised while draining the input, as opposed to
    /// failing to get at it.
    pub fn is_fatal_decode(&self) -> bool {
        matches!(self, BenchError::Decode(_) | BenchError::CsvCrate(_))
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BenchError::Open { path, .. } => format!(
                "Cannot open {}. Run the benchmark from the directory that contains it.",
                path.display()
            ),
            BenchError::Decode(ReaderError::Parse(e)) => {
                format!("The input is not valid CSV ({e})")
            }
            BenchError::Decode(ReaderError::Io(e)) => format!("Reading the input failed: {e}"),
            BenchError::Decode(e @ ReaderError::InvalidDelimiter) => e.to_string(),
            BenchError::CsvCrate(e) => format!("The input is not valid CSV ({e})"),
            BenchError::Config { field, message } => format!("Invalid setting {field}: {message}"),
            BenchError::Io(e) => format!("I/O failure: {e}"),
            BenchError::Serialization(e) => format!("Could not encode the report: {e}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
