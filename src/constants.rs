//! # Constants and type definitions for elset
//!
//! This module centralizes the **conversion factors** and **common type
//! definitions** used throughout the `elset` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, revolutions/day ↔ radians/minute)
//! - The propagator reference epoch offset
//! - Core type aliases used across the crate
//!
//! These definitions are used by the field parsers, the epoch resolver, and the
//! record assembler.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of minutes in a day
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Revolutions/day per radian/minute: dividing a mean motion in rev/day by
/// this factor yields rad/min
pub const XPDOTP: f64 = MINUTES_PER_DAY / DPI;

/// Julian date of the propagator reference epoch (1949 December 31 00:00 UT).
/// The propagator initializer receives epochs as `jd - JD_1950`.
pub const JD_1950: f64 = 2433281.5;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Angular rate in radians per minute
pub type RadPerMin = f64;
/// Angular rate in revolutions per day
pub type RevPerDay = f64;
/// Julian date (days)
pub type JulianDate = f64;
