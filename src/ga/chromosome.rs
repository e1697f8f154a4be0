//! Job-subset chromosome.

use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered, duplicate-free sequence of job ids of length at most the
/// daily capacity. One individual of the genetic population.
///
/// # Examples
///
/// ```
/// use u_dispatch::ga::Selection;
///
/// let selection = Selection::new(vec!["J1".into(), "J2".into()]);
/// assert_eq!(selection.len(), 2);
/// assert!(selection.contains("J1"));
/// assert!(!selection.contains("J3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Creates a selection from job ids.
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// Draws a random individual from the valid-job ids.
    ///
    /// When the valid set fits within `capacity`, the individual is the
    /// full valid set in its given order. Otherwise it is a uniform random
    /// sample of `capacity` distinct ids.
    pub fn sample<R: Rng>(valid_ids: &[String], capacity: usize, rng: &mut R) -> Self {
        if valid_ids.len() <= capacity {
            return Self::new(valid_ids.to_vec());
        }
        let mut ids = valid_ids.to_vec();
        ids.shuffle(rng);
        ids.truncate(capacity);
        Self::new(ids)
    }

    /// The job ids in selection order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Mutable access to the job ids, for genetic operators.
    pub fn ids_mut(&mut self) -> &mut Vec<String> {
        &mut self.ids
    }

    /// Number of selected jobs.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no jobs are selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns `true` if the given id is already selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Drops ids beyond `capacity`, keeping the first `capacity` entries.
    pub fn truncate(&mut self, capacity: usize) {
        self.ids.truncate(capacity);
    }
}
