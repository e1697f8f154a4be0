//! Selection evaluator that computes total travel time and total profit.

use chrono::NaiveDate;

use crate::distance::TravelTimes;
use crate::models::JobCatalog;

/// Aggregate score of a candidate selection: total travel time in minutes
/// and total profit (value plus bonus) over the selected jobs.
///
/// # Examples
///
/// ```
/// use u_dispatch::evaluation::Score;
///
/// let a = Score::new(10, 120.0);
/// let b = Score::new(15, 200.0);
/// assert!(a.improves_on(&b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    total_time: u64,
    total_profit: f64,
}

impl Score {
    /// Creates a score from a total time and a total profit.
    pub fn new(total_time: u64, total_profit: f64) -> Self {
        Self {
            total_time,
            total_profit,
        }
    }

    /// Total travel time in minutes.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Total profit: sum of value plus bonus over the scored jobs.
    pub fn total_profit(&self) -> f64 {
        self.total_profit
    }

    /// Returns `true` if this score is strictly better than `other` under
    /// the time-first rule: lower total time wins, and on equal total time
    /// strictly higher profit wins.
    ///
    /// Note that generation ranking in [`ga`](crate::ga) orders the
    /// opposite way (profit first, then time); the two rules are distinct
    /// on purpose.
    pub fn improves_on(&self, other: &Score) -> bool {
        self.total_time < other.total_time
            || (self.total_time == other.total_time && self.total_profit > other.total_profit)
    }
}

/// Evaluates candidate selections against a job catalog and a travel-time
/// index.
///
/// Evaluation is deterministic and side-effect free: the same ids and
/// reference date always produce the same [`Score`], which the genetic
/// engine relies on for repeatable fitness comparisons.
///
/// Ids that do not resolve in the catalog and jobs whose deadline has
/// passed are skipped silently. A job whose origin/destination pair has no
/// connection still contributes its profit but no travel time, so a
/// selection of unroutable jobs scores as zero-time; callers deciding on
/// data quality should check [`TravelTimes::time_between`] up front.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_dispatch::distance::TravelTimes;
/// use u_dispatch::evaluation::SelectionEvaluator;
/// use u_dispatch::models::{Connection, Job, JobCatalog};
///
/// let travel = TravelTimes::from_connections(vec![Connection::new("A", "B", 10)]);
/// let deadline = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
/// let catalog = JobCatalog::new(vec![Job::new("J1", "A", "B", deadline, 100.0, 20.0)]);
///
/// let evaluator = SelectionEvaluator::new(&catalog, &travel);
/// let today = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let score = evaluator.evaluate(&["J1".to_string()], today);
/// assert_eq!(score.total_time(), 10);
/// assert_eq!(score.total_profit(), 120.0);
/// ```
pub struct SelectionEvaluator<'a> {
    catalog: &'a JobCatalog,
    travel: &'a TravelTimes,
}

impl<'a> SelectionEvaluator<'a> {
    /// Creates an evaluator over the given problem data.
    pub fn new(catalog: &'a JobCatalog, travel: &'a TravelTimes) -> Self {
        Self { catalog, travel }
    }

    /// Scores a sequence of job ids against the reference date.
    ///
    /// Each id is resolved through the catalog and rechecked against the
    /// reference date before it contributes to the totals.
    pub fn evaluate(&self, ids: &[String], reference_date: NaiveDate) -> Score {
        let mut total_time: u64 = 0;
        let mut total_profit = 0.0;

        for id in ids {
            let Some(job) = self.catalog.get(id) else {
                continue;
            };
            if !job.is_valid_on(reference_date) {
                continue;
            }
            total_profit += job.profit();
            if let Some(minutes) = self.travel.time_between(job.origin(), job.destination()) {
                total_time += u64::from(minutes);
            }
        }

        Score::new(total_time, total_profit)
    }
}
