//! Tjänster för Resplan
//!
//! Innehåller mediainläsning, maskering av dokumentbilder och
//! referensuppslag mellan collections.

pub mod ingest;
pub mod obfuscate;
pub mod resolve;

pub use ingest::{BatchOutcome, IngestOptions, ProcessedUpload, UploadFile};
pub use resolve::{DayGrouped, RelationResolver};
