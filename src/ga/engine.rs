//! Evolutionary selection engine.
//!
//! Evolves a population of job subsets for one operating day and returns
//! the best-ever individual's jobs. Reproduction is elitist: the top
//! individuals of each generation are carried over unchanged and also
//! serve as the parent pool for crossover.

use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::distance::TravelTimes;
use crate::evaluation::{Score, SelectionEvaluator};
use crate::models::{Job, JobCatalog};

use super::chromosome::Selection;
use super::operators::{fill_with_unused, replace_mutation, single_point_crossover};

/// Tuning knobs for [`evolve`].
///
/// # Examples
///
/// ```
/// use u_dispatch::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30);
/// assert_eq!(config.population_size(), 20);
/// assert_eq!(config.generations(), 30);
/// assert_eq!(config.elite_size(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    population_size: usize,
    generations: usize,
    elite_size: usize,
    mutation_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            elite_size: 10,
            mutation_rate: 0.1,
        }
    }
}

impl GaConfig {
    /// Creates a config with the default knobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of individuals per generation.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations to run.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets how many top-ranked individuals carry over unchanged.
    pub fn with_elite_size(mut self, elite_size: usize) -> Self {
        self.elite_size = elite_size;
        self
    }

    /// Sets the per-offspring mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate.clamp(0.0, 1.0);
        self
    }

    /// Individuals per generation.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Generations to run.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Top-ranked individuals carried over unchanged.
    pub fn elite_size(&self) -> usize {
        self.elite_size
    }

    /// Per-offspring mutation probability.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }
}

/// Evolves a capacity-bounded job selection for the reference date and
/// returns the best-ever individual's jobs, in that individual's order.
///
/// The initial population is drawn from the valid-job set: when the valid
/// set fits within `capacity` every individual is the full valid set,
/// otherwise each is an independent uniform sample of `capacity` distinct
/// ids. Each generation is scored, ranked by descending profit then
/// ascending time, and the elite reproduce through single-point crossover,
/// capacity padding, and low-probability replace mutation. Best-ever
/// tracking uses the opposite, time-first order ([`Score::improves_on`]);
/// the asymmetry between the two rules is deliberate.
///
/// All randomness flows through `rng`: a fixed seed makes the run
/// reproducible. No valid jobs for the date yields an empty vector, never
/// an error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_dispatch::distance::TravelTimes;
/// use u_dispatch::ga::{evolve, GaConfig};
/// use u_dispatch::models::{Connection, Job, JobCatalog};
///
/// let travel = TravelTimes::from_connections(vec![Connection::new("A", "B", 10)]);
/// let deadline = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
/// let catalog = JobCatalog::new(vec![Job::new("J1", "A", "B", deadline, 100.0, 20.0)]);
/// let today = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let selected = evolve(&catalog, &travel, today, 5, &GaConfig::default(), &mut rng);
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].id(), "J1");
/// ```
pub fn evolve<R: Rng>(
    catalog: &JobCatalog,
    travel: &TravelTimes,
    reference_date: NaiveDate,
    capacity: usize,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Job> {
    let valid_ids: Vec<String> = catalog
        .valid_jobs(reference_date)
        .iter()
        .map(|job| job.id().to_string())
        .collect();
    if valid_ids.is_empty() {
        return Vec::new();
    }

    let evaluator = SelectionEvaluator::new(catalog, travel);
    let mut population: Vec<Selection> = (0..config.population_size())
        .map(|_| Selection::sample(&valid_ids, capacity, rng))
        .collect();

    let mut best: Option<(Selection, Score)> = None;

    for generation in 0..config.generations() {
        let mut scored: Vec<(Selection, Score)> = population
            .into_iter()
            .map(|selection| {
                let score = evaluator.evaluate(selection.ids(), reference_date);
                (selection, score)
            })
            .collect();

        for (selection, score) in &scored {
            let improved = match &best {
                Some((_, best_score)) => score.improves_on(best_score),
                None => true,
            };
            if improved {
                debug!(
                    generation,
                    total_time = score.total_time(),
                    total_profit = score.total_profit(),
                    "best selection improved"
                );
                best = Some((selection.clone(), *score));
            }
        }

        // Generation ranking is profit-first; best-ever tracking above is
        // time-first. The two orders differ on purpose.
        scored.sort_by(|a, b| {
            b.1.total_profit()
                .total_cmp(&a.1.total_profit())
                .then_with(|| a.1.total_time().cmp(&b.1.total_time()))
        });

        let elite: Vec<Selection> = scored
            .into_iter()
            .take(config.elite_size())
            .map(|(selection, _)| selection)
            .collect();

        let mut next = elite.clone();
        while next.len() < config.population_size() {
            let (Some(parent1), Some(parent2)) = (elite.choose(rng), elite.choose(rng)) else {
                break;
            };

            let mut child = single_point_crossover(parent1, parent2, rng);
            child.truncate(capacity);
            if child.len() < capacity && valid_ids.len() > capacity {
                fill_with_unused(&mut child, &valid_ids, capacity, rng);
            }
            if rng.random_bool(config.mutation_rate()) && valid_ids.len() > capacity {
                replace_mutation(&mut child, &valid_ids, rng);
            }
            next.push(child);
        }
        population = next;
    }

    let Some((best_selection, _)) = best else {
        return Vec::new();
    };
    best_selection
        .ids()
        .iter()
        .filter_map(|id| catalog.get(id))
        .cloned()
        .collect()
}
