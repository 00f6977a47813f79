//! Brood snapshot ingestion.
//!
//! Reads an export of the broods table into [`LineageRecord`] values that the
//! lineage index can serve. Ingestion is read-only.
//!
//! [`LineageRecord`]: brood_model::LineageRecord

pub mod broods;
pub mod error;

pub use broods::{load_broods, read_broods};
pub use error::{IngestError, Result};
