//! Highest-bonus-first baseline selection.
//!
//! Ranks the jobs still within deadline by bonus, descending, and takes
//! the first `capacity` of them. Travel time plays no part in the
//! ranking; callers report it afterwards via
//! [`SelectionEvaluator`](crate::evaluation::SelectionEvaluator).
//!
//! # Complexity
//!
//! O(n log n) where n = number of valid jobs.

use chrono::NaiveDate;

use crate::models::{Job, JobCatalog};

/// Selects up to `capacity` jobs for the reference date, preferring the
/// highest bonus.
///
/// The sort is stable: jobs with equal bonuses keep their catalog order.
/// Identical inputs always produce an identical output sequence. An empty
/// catalog, or one with no valid jobs for the date, yields an empty
/// vector.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_dispatch::constructive::bonus_first;
/// use u_dispatch::models::{Job, JobCatalog};
///
/// let deadline = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
/// let catalog = JobCatalog::new(vec![
///     Job::new("J1", "A", "B", deadline, 100.0, 5.0),
///     Job::new("J2", "B", "C", deadline, 100.0, 50.0),
///     Job::new("J3", "C", "D", deadline, 100.0, 30.0),
/// ]);
/// let today = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
///
/// let selected = bonus_first(&catalog, today, 2);
/// let ids: Vec<&str> = selected.iter().map(|j| j.id()).collect();
/// assert_eq!(ids, vec!["J2", "J3"]);
/// ```
pub fn bonus_first(catalog: &JobCatalog, reference_date: NaiveDate, capacity: usize) -> Vec<Job> {
    let mut valid = catalog.valid_jobs(reference_date);
    valid.sort_by(|a, b| b.bonus().total_cmp(&a.bonus()));
    valid.truncate(capacity);
    valid.into_iter().cloned().collect()
}
