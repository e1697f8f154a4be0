//! Catalog of candidate delivery jobs.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::Job;

/// Owns all candidate delivery jobs for a run.
///
/// Jobs are stored in load order and are read-only after construction,
/// so a catalog can be shared freely across concurrent selection calls.
/// Job ids are expected to be unique; if duplicates are loaded, lookups
/// by id resolve to the first match.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_dispatch::models::{Job, JobCatalog};
///
/// let deadline = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
/// let catalog = JobCatalog::new(vec![Job::new("J1", "A", "B", deadline, 100.0, 20.0)]);
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("J1").is_some());
/// assert!(catalog.get("J2").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<Job>,
    by_id: HashMap<String, usize>,
}

impl JobCatalog {
    /// Creates a catalog from jobs in load order.
    pub fn new(jobs: Vec<Job>) -> Self {
        let mut by_id = HashMap::with_capacity(jobs.len());
        for (idx, job) in jobs.iter().enumerate() {
            by_id.entry(job.id().to_string()).or_insert(idx);
        }
        Self { jobs, by_id }
    }

    /// Returns all jobs in load order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Looks up a job by id. First match wins on duplicate ids.
    pub fn get(&self, id: &str) -> Option<&Job> {
        self.by_id.get(id).map(|&idx| &self.jobs[idx])
    }

    /// Returns the jobs whose deadline is on or after the reference date,
    /// in load order.
    pub fn valid_jobs(&self, reference_date: NaiveDate) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|job| job.is_valid_on(reference_date))
            .collect()
    }

    /// Number of jobs in the catalog.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns `true` if the catalog holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
