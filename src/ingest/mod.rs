//! Access to ingestion artifacts
//!
//! - `store` - the ingestion output directory layout
//! - `source` - command line input resolution

mod source;
mod store;

pub use source::{load_source, IngestSource};
pub use store::{repository_id, IngestStore, StoredRepository};
