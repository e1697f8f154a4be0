//! CSV ingestion of connections and jobs.
//!
//! The core selectors assume well-formed [`Connection`](crate::models::Connection)
//! and [`Job`](crate::models::Job) records; validation of external input
//! ends here.

mod csv;

use std::path::PathBuf;

use thiserror::Error;

pub use self::csv::{load_problem, read_connections, read_jobs};

/// Errors raised while reading problem data from CSV files.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A row could not be parsed into a record.
    #[error("malformed csv record: {0}")]
    Csv(#[from] ::csv::Error),
}
