//! # Fixed-column layout of a two-line element set
//!
//! A TLE packs every quantity into a fixed, non-overlapping column range of
//! one of its two 69-character lines. This module names each logical field
//! ([`Field`]), records its line and half-open 0-indexed column range
//! ([`FieldSpec`]), and extracts the raw substring for a field.
//!
//! Extraction performs no validation of the character content; that is the
//! job of the scalar parsers in [`crate::conversion`]. A line shorter than a
//! field's end column is a structural defect.

use std::fmt;

use crate::elset_errors::ElsetError;

/// Logical fields of a two-line element set, used to attribute defects to the
/// quantity they affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Satellite catalog number (line 1)
    CatalogNumber,
    /// Two-digit epoch year (line 1)
    EpochYear,
    /// Fractional epoch day-of-year (line 1)
    EpochDays,
    /// First derivative of mean motion, rev/day² (line 1)
    MeanMotionDot,
    /// Second derivative of mean motion, rev/day³, compressed notation (line 1)
    MeanMotionDdot,
    /// B* drag term, compressed notation (line 1)
    Bstar,
    /// Inclination, degrees (line 2)
    Inclination,
    /// Right ascension of the ascending node, degrees (line 2)
    RightAscension,
    /// Eccentricity digits with implied leading "0." (line 2)
    Eccentricity,
    /// Argument of perigee, degrees (line 2)
    ArgPerigee,
    /// Mean anomaly, degrees (line 2)
    MeanAnomaly,
    /// Mean motion, rev/day (line 2)
    MeanMotion,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::CatalogNumber => "catalog number",
            Field::EpochYear => "epoch year",
            Field::EpochDays => "epoch day-of-year",
            Field::MeanMotionDot => "mean motion first derivative",
            Field::MeanMotionDdot => "mean motion second derivative",
            Field::Bstar => "drag term (bstar)",
            Field::Inclination => "inclination",
            Field::RightAscension => "right ascension of ascending node",
            Field::Eccentricity => "eccentricity",
            Field::ArgPerigee => "argument of perigee",
            Field::MeanAnomaly => "mean anomaly",
            Field::MeanMotion => "mean motion",
        };
        write!(f, "{name}")
    }
}

/// Column location of a field: line number (1 or 2) and a half-open,
/// 0-indexed byte range within that line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub field: Field,
    pub line: u8,
    pub start: usize,
    pub end: usize,
}

impl FieldSpec {
    /// Extract the raw substring of this field from its line.
    ///
    /// Arguments
    /// ---------
    /// * `line`: the full text of the TLE line this field lives on
    ///
    /// Return
    /// ------
    /// * the raw field substring, spaces and all, or a
    ///   [`ElsetError::LineTooShort`] structural defect if the line does not
    ///   reach the field's end column
    pub(crate) fn extract<'a>(&self, line: &'a str) -> Result<&'a str, ElsetError> {
        line.get(self.start..self.end)
            .ok_or(ElsetError::LineTooShort {
                line: self.line,
                field: self.field,
                required: self.end,
                actual: line.len(),
            })
    }
}

// Line 1 fields
pub(crate) const CATALOG_NUMBER: FieldSpec = FieldSpec {
    field: Field::CatalogNumber,
    line: 1,
    start: 2,
    end: 7,
};
pub(crate) const EPOCH_YEAR: FieldSpec = FieldSpec {
    field: Field::EpochYear,
    line: 1,
    start: 18,
    end: 20,
};
pub(crate) const EPOCH_DAYS: FieldSpec = FieldSpec {
    field: Field::EpochDays,
    line: 1,
    start: 20,
    end: 32,
};
pub(crate) const MEAN_MOTION_DOT: FieldSpec = FieldSpec {
    field: Field::MeanMotionDot,
    line: 1,
    start: 33,
    end: 43,
};
pub(crate) const MEAN_MOTION_DDOT: FieldSpec = FieldSpec {
    field: Field::MeanMotionDdot,
    line: 1,
    start: 44,
    end: 52,
};
pub(crate) const BSTAR: FieldSpec = FieldSpec {
    field: Field::Bstar,
    line: 1,
    start: 53,
    end: 61,
};

// Line 2 fields
pub(crate) const INCLINATION: FieldSpec = FieldSpec {
    field: Field::Inclination,
    line: 2,
    start: 8,
    end: 16,
};
pub(crate) const RIGHT_ASCENSION: FieldSpec = FieldSpec {
    field: Field::RightAscension,
    line: 2,
    start: 17,
    end: 25,
};
pub(crate) const ECCENTRICITY: FieldSpec = FieldSpec {
    field: Field::Eccentricity,
    line: 2,
    start: 26,
    end: 33,
};
pub(crate) const ARG_PERIGEE: FieldSpec = FieldSpec {
    field: Field::ArgPerigee,
    line: 2,
    start: 34,
    end: 42,
};
pub(crate) const MEAN_ANOMALY: FieldSpec = FieldSpec {
    field: Field::MeanAnomaly,
    line: 2,
    start: 43,
    end: 51,
};
pub(crate) const MEAN_MOTION: FieldSpec = FieldSpec {
    field: Field::MeanMotion,
    line: 2,
    start: 52,
    end: 63,
};
