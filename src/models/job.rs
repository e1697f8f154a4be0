//! Delivery job type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A delivery job: a payload to move between two locations before a
/// deadline, for a base value plus a bonus.
///
/// Jobs are immutable once loaded. Selectors read them by reference from
/// the [`JobCatalog`](super::JobCatalog) and never mutate them.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_dispatch::models::Job;
///
/// let deadline = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
/// let job = Job::new("J1", "A", "B", deadline, 100.0, 20.0);
/// assert_eq!(job.id(), "J1");
/// assert_eq!(job.profit(), 120.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    id: String,
    origin: String,
    destination: String,
    deadline: NaiveDate,
    value: f64,
    bonus: f64,
}

impl Job {
    /// Creates a job with the given deadline, base value, and bonus.
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        deadline: NaiveDate,
        value: f64,
        bonus: f64,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            deadline,
            value,
            bonus,
        }
    }

    /// Job id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pickup location id.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Drop-off location id.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Last calendar date on which this job may still be dispatched.
    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Base value paid on delivery.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Bonus paid on top of the base value.
    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    /// Total payout: value plus bonus.
    pub fn profit(&self) -> f64 {
        self.value + self.bonus
    }

    /// Returns `true` if this job may still be dispatched on the given
    /// reference date.
    pub fn is_valid_on(&self, reference_date: NaiveDate) -> bool {
        self.deadline >= reference_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_job_accessors() {
        let job = Job::new("J1", "A", "B", date(2023, 11, 20), 100.0, 20.0);
        assert_eq!(job.id(), "J1");
        assert_eq!(job.origin(), "A");
        assert_eq!(job.destination(), "B");
        assert_eq!(job.deadline(), date(2023, 11, 20));
        assert_eq!(job.value(), 100.0);
        assert_eq!(job.bonus(), 20.0);
    }

    #[test]
    fn test_job_profit() {
        let job = Job::new("J1", "A", "B", date(2023, 11, 20), 100.0, 20.0);
        assert_eq!(job.profit(), 120.0);
    }

    #[test]
    fn test_job_validity() {
        let job = Job::new("J1", "A", "B", date(2023, 11, 20), 100.0, 20.0);
        assert!(job.is_valid_on(date(2023, 11, 15)));
        assert!(job.is_valid_on(date(2023, 11, 20)));
        assert!(!job.is_valid_on(date(2023, 11, 21)));
    }
}
