//! ACO optimization loop.
//!
//! [`AcoRunner`] orchestrates a fixed number of iterations of
//! construct → score → track best → update pheromone, then returns the
//! final colony state. The iteration count is the only stopping rule;
//! an external cancellation flag may abort earlier.

use super::config::{check_population, AcoConfig};
use super::pheromone::PheromoneMatrix;
use super::policy::{AnyPolicy, PheromonePolicy};
use super::sampler::random_tour;
use super::types::{Ant, Colony};
use crate::error::AcoError;
use crate::graph::{CostMatrix, Tour};
use crate::random::rng_from_option;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Ants of the final iteration (or the bootstrap ants if no iteration ran).
    pub ants: Vec<Ant>,

    /// Pheromone matrix after the final update.
    pub pheromone: PheromoneMatrix,

    /// Best-so-far ant.
    pub best: Ant,

    /// Cost of the best-so-far tour (same as `best.cost`).
    pub best_cost: f64,

    /// Cost of the final iteration-best tour.
    pub iteration_best_cost: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Best-so-far cost after bootstrap and after each iteration.
    pub cost_history: Vec<f64>,

    /// Number of MAX-MIN stagnation reinitializations (0 for other strategies).
    pub stagnation_resets: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the ACO loop.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner};
/// use u_aco::graph::CostMatrix;
///
/// let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 2.0)];
/// let graph = CostMatrix::from_points(&points).unwrap();
/// let config = AcoConfig::max_min().with_iterations(30).with_seed(42);
///
/// let result = AcoRunner::run(&graph, &config).unwrap();
/// assert!(result.best.tour.is_hamiltonian(5));
/// assert_eq!(result.cost_history.len(), 31);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Validates the inputs and runs the configured strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid for `graph`
    /// (see [`AcoConfig::validate_for`]). Nothing fails once the run starts.
    pub fn run(graph: &CostMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is checked at the start of each iteration; when set, the
    /// run stops and returns the state reached so far.
    pub fn run_with_cancel(
        graph: &CostMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, AcoError> {
        config.validate_for(graph)?;
        let mut rng = rng_from_option(config.seed);
        let cancel = cancel.as_deref();

        let result = match AnyPolicy::from_config(config, graph) {
            AnyPolicy::As(policy) => execute(policy, graph, config, cancel, &mut rng),
            AnyPolicy::Eas(policy) => execute(policy, graph, config, cancel, &mut rng),
            AnyPolicy::Rbas(policy) => execute(policy, graph, config, cancel, &mut rng),
            AnyPolicy::Acs(policy) => execute(policy, graph, config, cancel, &mut rng),
            AnyPolicy::Mmas(policy) => execute(policy, graph, config, cancel, &mut rng),
        };
        Ok(result)
    }

    /// Runs a caller-supplied policy with a caller-supplied generator.
    ///
    /// Only the loop settings of `config` (population, iterations,
    /// parallel scoring) apply; `policy` carries its own parameters and
    /// decides construction and updates.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or `policy` rejects
    /// its parameters for `graph` (see [`PheromonePolicy::validate`]).
    pub fn run_with_policy<P: PheromonePolicy, R: Rng>(
        graph: &CostMatrix,
        config: &AcoConfig,
        policy: P,
        rng: &mut R,
    ) -> Result<AcoResult, AcoError> {
        check_population(config.population_size)?;
        policy.validate(graph)?;
        Ok(execute(policy, graph, config, None, rng))
    }
}

fn execute<P: PheromonePolicy, R: Rng>(
    mut policy: P,
    graph: &CostMatrix,
    config: &AcoConfig,
    cancel: Option<&AtomicBool>,
    rng: &mut R,
) -> AcoResult {
    let n = graph.dim();
    info!(
        strategy = policy.name(),
        nodes = n,
        population = config.population_size,
        iterations = config.iterations,
        "starting ant colony run"
    );

    // Bootstrap: one uniformly random tour seeds the pheromone and every ant.
    let bootstrap = Ant::scored(graph, random_tour(n, rng));
    let mut pheromone = policy.initialize(graph, bootstrap.cost);
    let mut colony = Colony::new(config.population_size, bootstrap);

    let mut cost_history = Vec::with_capacity(config.iterations + 1);
    cost_history.push(colony.best_so_far().cost);
    let mut completed = 0usize;
    let mut cancelled = false;

    for iteration in 0..config.iterations {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }
        }

        let mut tours = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            tours.push(policy.construct(graph, &mut pheromone, rng));
        }
        colony.advance(score_tours(graph, tours, config.parallel));
        policy.update(graph, &mut pheromone, &colony, rng);

        completed = iteration + 1;
        cost_history.push(colony.best_so_far().cost);
        debug!(
            iteration = completed,
            iteration_best = colony.iteration_best().cost,
            best_so_far = colony.best_so_far().cost,
            "iteration complete"
        );
    }

    let best = colony.best_so_far().clone();
    let iteration_best_cost = colony.iteration_best().cost;
    info!(
        strategy = policy.name(),
        best_cost = best.cost,
        iterations = completed,
        cancelled,
        "ant colony run finished"
    );

    AcoResult {
        ants: colony.into_ants(),
        pheromone,
        best_cost: best.cost,
        best,
        iteration_best_cost,
        iterations: completed,
        cost_history,
        stagnation_resets: policy.stagnation_resets(),
        cancelled,
    }
}

/// Scores constructed tours. Construction itself stays sequential.
#[cfg(feature = "parallel")]
fn score_tours(graph: &CostMatrix, tours: Vec<Tour>, parallel: bool) -> Vec<Ant> {
    use rayon::prelude::*;

    if parallel {
        tours
            .into_par_iter()
            .map(|tour| Ant::scored(graph, tour))
            .collect()
    } else {
        tours.into_iter().map(|tour| Ant::scored(graph, tour)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_tours(graph: &CostMatrix, tours: Vec<Tour>, _parallel: bool) -> Vec<Ant> {
    tours.into_iter().map(|tour| Ant::scored(graph, tour)).collect()
}
