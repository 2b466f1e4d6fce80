//! Raw and normalized element records, and the assembler joining them.
//!
//! [`ElementFields`] holds the quantities exactly as the format encodes them
//! (degrees, revolutions/day, two-digit year). [`NormalizedRecord`] is the
//! propagator-facing result: angles in radians, rates in radians/minute,
//! epoch as a Julian date, with the selected gravitational-model bundle
//! attached. One `RawElementLines` pair yields one `ElementFields` yields one
//! `NormalizedRecord`; nothing is shared or mutated between conversions.
//!
//! Each type carries a strict and a validating constructor; both are thin
//! wrappers over the same fallible pipeline, so the strict path fails on
//! exactly the inputs the validating path reports.

use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, JulianDate, RadPerMin, Radian, RevPerDay, JD_1950, MINUTES_PER_DAY, RADEG, XPDOTP,
};
use crate::conversion::{
    parse_catalog_number, parse_compressed, parse_decimal, parse_eccentricity, parse_integer,
};
use crate::elset_errors::ElsetError;
use crate::epoch::resolve_epoch;
use crate::gravity::{GravityConstants, GravityModel};
use crate::layout;

/// The element set exactly as extracted from the two lines, prior to unit
/// normalization.
///
/// Units:
/// * `epoch_year`: two-digit year (0–99), `epoch_days`: fractional day-of-year
/// * `ndot`: rev/day², `nddot`: rev/day³
/// * `bstar`: 1/Earth-radii
/// * `inclination`, `right_ascension`, `arg_perigee`, `mean_anomaly`: degrees
/// * `eccentricity`: dimensionless
/// * `mean_motion`: rev/day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementFields {
    pub catalog_number: u32,
    pub epoch_year: i32,
    pub epoch_days: f64,
    pub ndot: f64,
    pub nddot: f64,
    pub bstar: f64,
    pub inclination: Degree,
    pub right_ascension: Degree,
    pub eccentricity: f64,
    pub arg_perigee: Degree,
    pub mean_anomaly: Degree,
    pub mean_motion: RevPerDay,
}

impl ElementFields {
    /// Extract and parse every field of a two-line element set, validating
    /// policy: the first defect is returned as an attributable error and no
    /// partial record is produced.
    pub fn try_from_lines(line1: &str, line2: &str) -> Result<Self, ElsetError> {
        Ok(ElementFields {
            catalog_number: parse_catalog_number(layout::CATALOG_NUMBER, line1)?,
            epoch_year: parse_integer(layout::EPOCH_YEAR, line1)?,
            epoch_days: parse_decimal(layout::EPOCH_DAYS, line1)?,
            ndot: parse_decimal(layout::MEAN_MOTION_DOT, line1)?,
            nddot: parse_compressed(layout::MEAN_MOTION_DDOT, line1)?,
            bstar: parse_compressed(layout::BSTAR, line1)?,
            inclination: parse_decimal(layout::INCLINATION, line2)?,
            right_ascension: parse_decimal(layout::RIGHT_ASCENSION, line2)?,
            eccentricity: parse_eccentricity(layout::ECCENTRICITY, line2)?,
            arg_perigee: parse_decimal(layout::ARG_PERIGEE, line2)?,
            mean_anomaly: parse_decimal(layout::MEAN_ANOMALY, line2)?,
            mean_motion: parse_decimal(layout::MEAN_MOTION, line2)?,
        })
    }

    /// Strict policy: like [`ElementFields::try_from_lines`] but any defect
    /// is an unrecoverable process fault. Only for input already known good.
    pub fn from_lines(line1: &str, line2: &str) -> Self {
        match Self::try_from_lines(line1, line2) {
            Ok(fields) => fields,
            Err(err) => panic!("element set ingestion failed: {err}"),
        }
    }
}

/// The propagator-facing element record.
///
/// Units:
/// * `epoch`: Julian date (UTC)
/// * `ndot`: rad/min², `nddot`: rad/min³
/// * `bstar`: 1/Earth-radii
/// * `inclination`, `right_ascension`, `arg_perigee`, `mean_anomaly`: radians
/// * `eccentricity`: dimensionless fraction (not range-checked here)
/// * `mean_motion`: rad/min
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub catalog_number: u32,
    pub epoch: JulianDate,
    pub ndot: f64,
    pub nddot: f64,
    pub bstar: f64,
    pub inclination: Radian,
    pub right_ascension: Radian,
    pub eccentricity: f64,
    pub arg_perigee: Radian,
    pub mean_anomaly: Radian,
    pub mean_motion: RadPerMin,
    pub gravity: GravityConstants,
}

impl NormalizedRecord {
    /// Assemble a normalized record from parsed fields: resolve the epoch to
    /// a Julian date, rescale angles to radians and rates to per-minute
    /// units, and attach the selected gravitational-model bundle.
    pub fn try_from_fields(
        fields: &ElementFields,
        model: GravityModel,
    ) -> Result<Self, ElsetError> {
        let epoch = resolve_epoch(fields.epoch_year, fields.epoch_days)?;
        Ok(NormalizedRecord {
            catalog_number: fields.catalog_number,
            epoch,
            ndot: fields.ndot / (XPDOTP * MINUTES_PER_DAY),
            nddot: fields.nddot / (XPDOTP * MINUTES_PER_DAY * MINUTES_PER_DAY),
            bstar: fields.bstar,
            inclination: fields.inclination * RADEG,
            right_ascension: fields.right_ascension * RADEG,
            eccentricity: fields.eccentricity,
            arg_perigee: fields.arg_perigee * RADEG,
            mean_anomaly: fields.mean_anomaly * RADEG,
            mean_motion: fields.mean_motion / XPDOTP,
            gravity: model.constants(),
        })
    }

    /// Parse and normalize a two-line element set, validating policy.
    pub fn try_from_lines(
        line1: &str,
        line2: &str,
        model: GravityModel,
    ) -> Result<Self, ElsetError> {
        let fields = ElementFields::try_from_lines(line1, line2)?;
        Self::try_from_fields(&fields, model)
    }

    /// Parse and normalize a two-line element set, strict policy: any defect
    /// is an unrecoverable process fault.
    pub fn from_lines(line1: &str, line2: &str, model: GravityModel) -> Self {
        match Self::try_from_lines(line1, line2, model) {
            Ok(record) => record,
            Err(err) => panic!("element set ingestion failed: {err}"),
        }
    }

    /// Epoch in the convention the propagator initializer expects: days since
    /// 1949 December 31 00:00 UT.
    pub fn epoch_since_1950(&self) -> f64 {
        self.epoch - JD_1950
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;
    use crate::constants::DPI;
    use crate::layout::Field;

    const LINE1: &str = "1 25544U 98067A   24001.50000000  .00016717  00000-0  10270-3 0  9003";
    const LINE2: &str = "2 25544  51.6400 208.5000 0007417  68.0000 292.1000 15.49560000400000";

    #[test]
    fn test_fields_native_units() {
        let fields = ElementFields::try_from_lines(LINE1, LINE2).unwrap();
        assert_eq!(fields.catalog_number, 25544);
        assert_eq!(fields.epoch_year, 24);
        assert_eq!(fields.epoch_days, 1.5);
        assert_eq!(fields.ndot, 0.00016717);
        assert_eq!(fields.nddot, 0.0);
        assert_eq!(fields.bstar, 0.1027e-3);
        assert_eq!(fields.inclination, 51.64);
        assert_eq!(fields.right_ascension, 208.5);
        assert_eq!(fields.eccentricity, 0.0007417);
        assert_eq!(fields.arg_perigee, 68.0);
        assert_eq!(fields.mean_anomaly, 292.1);
        assert_eq!(fields.mean_motion, 15.4956);
    }

    #[test]
    fn test_unit_normalization() {
        let record = NormalizedRecord::try_from_lines(LINE1, LINE2, GravityModel::Wgs72).unwrap();
        assert_eq!(record.mean_motion, 15.4956 / XPDOTP);
        assert_eq!(record.ndot, 0.00016717 / (XPDOTP * 1440.0));
        assert_eq!(record.nddot, 0.0);
        assert_eq!(record.inclination, 51.64 * RADEG);
        assert_eq!(record.right_ascension, 208.5 * RADEG);
        assert_eq!(record.arg_perigee, 68.0 * RADEG);
        assert_eq!(record.mean_anomaly, 292.1 * RADEG);
        // bstar and eccentricity are already dimensionless
        assert_eq!(record.bstar, 0.1027e-3);
        assert_eq!(record.eccentricity, 0.0007417);
        assert_eq!(record.gravity.radius_earth_km, 6378.135);
    }

    #[test]
    fn test_reference_conversions() {
        // 1 rev/day is 2π/1440 rad/min; 180 degrees is π radians
        assert!((1.0 / XPDOTP - DPI / 1440.0).abs() < 1e-17);
        assert!((180.0 * RADEG - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_epoch_resolution() {
        let record = NormalizedRecord::try_from_lines(LINE1, LINE2, GravityModel::Wgs72).unwrap();
        assert!((record.epoch - 2460311.0).abs() < 1e-9);
        assert!((record.epoch_since_1950() - (2460311.0 - JD_1950)).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let a = NormalizedRecord::try_from_lines(LINE1, LINE2, GravityModel::Wgs84).unwrap();
        let b = NormalizedRecord::try_from_lines(LINE1, LINE2, GravityModel::Wgs84).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_truncated_line_names_field() {
        let err = NormalizedRecord::try_from_lines(&LINE1[..40], LINE2, GravityModel::Wgs72)
            .unwrap_err();
        assert!(matches!(
            err,
            ElsetError::LineTooShort {
                line: 1,
                field: Field::MeanMotionDot,
                ..
            }
        ));
    }

    #[test]
    fn test_corrupt_field_names_field() {
        let corrupt = LINE2.replace("0007417", "00x7417");
        let err = NormalizedRecord::try_from_lines(LINE1, &corrupt, GravityModel::Wgs72)
            .unwrap_err();
        assert_eq!(err.field(), Some(Field::Eccentricity));
    }

    #[test]
    fn test_epoch_day_out_of_range() {
        let bad = LINE1.replace("24001.50000000", "23366.00000000");
        let err = NormalizedRecord::try_from_lines(&bad, LINE2, GravityModel::Wgs72).unwrap_err();
        assert_eq!(
            err,
            ElsetError::EpochDayOutOfRange {
                year: 2023,
                days: 366.0,
            }
        );
    }

    #[test]
    #[should_panic(expected = "element set ingestion failed")]
    fn test_strict_policy_faults() {
        NormalizedRecord::from_lines(&LINE1[..40], LINE2, GravityModel::Wgs72);
    }
}
