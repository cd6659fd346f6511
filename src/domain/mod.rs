//! Domain layer: address rules, resource readings, and ingestion outcomes.
//!
//! Everything here is pure: no I/O, no clocks other than the timestamp
//! passed in by the caller.

pub mod address;
pub mod ingest;
pub mod snapshot;

pub use address::is_valid_address;
pub use ingest::{IngestFailure, IngestOutcome};
pub use snapshot::{NewSnapshot, ResourceReading, NULL_TOKEN};
