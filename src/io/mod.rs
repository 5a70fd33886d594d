//! Input/output helpers.
//!
//! - CSV sample ingest (`ingest`)
//! - CSV point exports (`export`)
//! - model JSON read/write (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
