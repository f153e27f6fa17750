use crate::utils::error::{BenchError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A delimiter or comment character must be a real character that cannot
/// be confused with quoting or line structure.
pub fn is_valid_delimiter(c: char) -> bool {
    c != '"' && c != '\r' && c != '\n' && c != char::REPLACEMENT_CHARACTER
}

pub fn validate_delimiters(comma: char, comment: Option<char>) -> Result<()> {
    if !is_valid_delimiter(comma) {
        return Err(BenchError::Config {
            field: "comma".to_string(),
            message: format!("{:?} cannot be used as a field delimiter", comma),
        });
    }
    if let Some(comment) = comment {
        if !is_valid_delimiter(comment) {
            return Err(BenchError::Config {
                field: "comment".to_string(),
                message: format!("{:?} cannot be used as a comment character", comment),
            });
        }
        if comment == comma {
            return Err(BenchError::Config {
                field: "comment".to_string(),
                message: "comment character must differ from the field delimiter".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let as_str = path.to_string_lossy();
    if as_str.is_empty() {
        return Err(BenchError::Config {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if as_str.contains('\0') {
        return Err(BenchError::Config {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
