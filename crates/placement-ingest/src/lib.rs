//! Candidate data ingestion: CSV loading, column typing, skill extraction.

pub mod error;
pub mod reader;
pub mod skills;

pub use error::{IngestError, Result};
pub use reader::{load_dataset, read_dataset};
pub use skills::extract_skills;
