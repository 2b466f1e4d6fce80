//! Gravitational-model constant bundles.
//!
//! The propagation engine is parameterized by a named set of geopotential
//! constants. The three standard sets are exposed through [`GravityModel`]
//! and resolved by a pure lookup into immutable tables built once at first
//! use; nothing here is ever mutated after process start, so the bundles can
//! be shared freely across threads.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Selector for a named gravitational-model constant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GravityModel {
    /// Legacy WGS-72 values with the historically published `xke`
    Wgs72Old,
    /// WGS-72 with `xke` derived from `mu` and the Earth radius
    Wgs72,
    /// WGS-84
    Wgs84,
}

/// A bundle of physical constants required by the propagation engine.
///
/// Units:
/// * `mu`: km³/s²
/// * `radius_earth_km`: km
/// * `xke`: sqrt(mu) in Earth-radii^1.5 per minute
/// * `tumin`: minutes per time unit (1/xke)
/// * `j2`, `j3`, `j4`: zonal harmonics, dimensionless
/// * `j3oj2`: j3/j2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityConstants {
    pub mu: f64,
    pub radius_earth_km: f64,
    pub xke: f64,
    pub tumin: f64,
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
    pub j3oj2: f64,
}

impl GravityConstants {
    fn new(mu: f64, radius_earth_km: f64, xke: f64, j2: f64, j3: f64, j4: f64) -> Self {
        GravityConstants {
            mu,
            radius_earth_km,
            xke,
            tumin: 1.0 / xke,
            j2,
            j3,
            j4,
            j3oj2: j3 / j2,
        }
    }
}

/// xke derived from mu and the Earth radius: 60 / sqrt(r³/mu).
fn derived_xke(mu: f64, radius_earth_km: f64) -> f64 {
    60.0 / (radius_earth_km * radius_earth_km * radius_earth_km / mu).sqrt()
}

static WGS72_OLD: LazyLock<GravityConstants> = LazyLock::new(|| {
    GravityConstants::new(
        398600.79964,
        6378.135,
        0.0743669161,
        0.001082616,
        -0.00000253881,
        -0.00000165597,
    )
});

static WGS72: LazyLock<GravityConstants> = LazyLock::new(|| {
    let (mu, radius) = (398600.8, 6378.135);
    GravityConstants::new(
        mu,
        radius,
        derived_xke(mu, radius),
        0.001082616,
        -0.00000253881,
        -0.00000165597,
    )
});

static WGS84: LazyLock<GravityConstants> = LazyLock::new(|| {
    let (mu, radius) = (398600.5, 6378.137);
    GravityConstants::new(
        mu,
        radius,
        derived_xke(mu, radius),
        0.00108262998905,
        -0.00000253215306,
        -0.00000161098761,
    )
});

impl GravityModel {
    /// Resolve the selector to its constant bundle.
    pub fn constants(self) -> GravityConstants {
        match self {
            GravityModel::Wgs72Old => *WGS72_OLD,
            GravityModel::Wgs72 => *WGS72,
            GravityModel::Wgs84 => *WGS84,
        }
    }
}
