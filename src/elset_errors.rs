use thiserror::Error;

use crate::layout::Field;

/// Errors produced while ingesting a two-line element set.
///
/// Every parse defect is attributable: it names the logical [`Field`] it
/// affects and carries the raw text that failed, so a caller can report the
/// offending column range of the offending line without re-deriving it.
#[derive(Error, Debug, PartialEq)]
pub enum ElsetError {
    #[error(
        "line {line} too short: {field} occupies columns up to {required}, line has {actual} characters"
    )]
    LineTooShort {
        line: u8,
        field: Field,
        required: usize,
        actual: usize,
    },

    #[error("invalid {field} {raw:?}: {source}")]
    InvalidInteger {
        field: Field,
        raw: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid {field} {raw:?}: {source}")]
    InvalidDecimal {
        field: Field,
        raw: String,
        source: std::num::ParseFloatError,
    },

    #[error("malformed compressed-notation fragment for {field}: {raw:?}")]
    MalformedFragment { field: Field, raw: String },

    #[error("epoch day-of-year {days} outside year {year}")]
    EpochDayOutOfRange { year: i32, days: f64 },

    #[error("propagator initialization failed: {0}")]
    PropagatorInit(String),
}

impl ElsetError {
    /// The logical field a parse defect is attributed to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            ElsetError::LineTooShort { field, .. }
            | ElsetError::InvalidInteger { field, .. }
            | ElsetError::InvalidDecimal { field, .. }
            | ElsetError::MalformedFragment { field, .. } => Some(*field),
            ElsetError::EpochDayOutOfRange { .. } | ElsetError::PropagatorInit(_) => None,
        }
    }
}
