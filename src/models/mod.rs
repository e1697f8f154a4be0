//! Domain model types for daily dispatch problems.
//!
//! Provides the core abstractions: directed connections with travel times,
//! delivery jobs with deadlines and payouts, and the catalog that owns all
//! candidate jobs for a run.

mod catalog;
mod connection;
mod job;

pub use catalog::JobCatalog;
pub use connection::Connection;
pub use job::Job;
