pub mod constants;
mod conversion;
pub mod elements;
pub mod elset_errors;
pub mod epoch;
pub mod gravity;
pub mod ingest;
pub mod layout;

pub use elements::{ElementFields, NormalizedRecord};
pub use elset_errors::ElsetError;
pub use gravity::{GravityConstants, GravityModel};
pub use ingest::{ingest, try_ingest, OpsMode, PropagatorInit};
pub use layout::Field;
