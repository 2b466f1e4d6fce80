//! Ingestion policies: the two historical entry points that parse a two-line
//! element set, normalize it, and hand it to the propagator initializer.
//!
//! Both policies run the identical fallible pipeline
//! ([`crate::elements::NormalizedRecord::try_from_lines`]) and then invoke
//! the external propagator's initialization step through the
//! [`PropagatorInit`] seam. The validating policy ([`try_ingest`]) returns
//! either a complete record or a structured, attributable error; the strict
//! policy ([`ingest`]) turns the same defects into unrecoverable process
//! faults and is only appropriate for pre-validated batch input.

use serde::{Deserialize, Serialize};

use crate::elements::NormalizedRecord;
use crate::elset_errors::ElsetError;
use crate::gravity::GravityModel;

/// Operational mode handed to the propagator initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpsMode {
    /// Improved mode, the modern default
    #[default]
    Improved,
    /// AFSPC compatibility mode
    Afspc,
}

impl OpsMode {
    /// Single-character flag as the propagator interface encodes it.
    pub fn as_char(self) -> char {
        match self {
            OpsMode::Improved => 'i',
            OpsMode::Afspc => 'a',
        }
    }
}

/// The seam to the external propagation engine.
///
/// The propagator receives the operational mode, the reference epoch as days
/// since 1949 December 31 00:00 UT, and the normalized record. It may reject
/// numerically degenerate orbits; such failures surface as
/// [`ElsetError::PropagatorInit`] and are passed through unmodified by the
/// validating policy.
pub trait PropagatorInit {
    fn initialize(
        &mut self,
        opsmode: OpsMode,
        epoch_since_1950: f64,
        record: &NormalizedRecord,
    ) -> Result<(), ElsetError>;
}

/// Validating policy: parse, normalize, and initialize the propagator.
///
/// Arguments
/// ---------
/// * `line1`, `line2`: the two fixed-column element lines
/// * `model`: the gravitational-model selector
/// * `opsmode`: operational mode forwarded to the propagator
/// * `propagator`: the external propagator initializer
///
/// Return
/// ------
/// * the complete [`NormalizedRecord`] on success; otherwise the first
///   defect encountered, naming the offending field, or the propagator's
///   own initialization error
pub fn try_ingest<P: PropagatorInit>(
    line1: &str,
    line2: &str,
    model: GravityModel,
    opsmode: OpsMode,
    propagator: &mut P,
) -> Result<NormalizedRecord, ElsetError> {
    let record = NormalizedRecord::try_from_lines(line1, line2, model)?;
    propagator.initialize(opsmode, record.epoch_since_1950(), &record)?;
    Ok(record)
}

/// Strict policy: like [`try_ingest`] but every defect, including propagator
/// rejection, is an unrecoverable process fault.
pub fn ingest<P: PropagatorInit>(
    line1: &str,
    line2: &str,
    model: GravityModel,
    opsmode: OpsMode,
    propagator: &mut P,
) -> NormalizedRecord {
    match try_ingest(line1, line2, model, opsmode, propagator) {
        Ok(record) => record,
        Err(err) => panic!("element set ingestion failed: {err}"),
    }
}
