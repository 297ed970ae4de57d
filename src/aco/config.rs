//! ACO configuration and strategy selection.

use crate::error::AcoError;
use crate::graph::CostMatrix;

/// Pheromone update strategy, selected once per run.
///
/// # References
///
/// - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
///   Colony of Cooperating Agents"
/// - Bullnheimer, Hartl & Strauss (1999), "A New Rank Based Version of the
///   Ant System"
/// - Dorigo & Gambardella (1997), "Ant Colony System"
/// - Stützle & Hoos (2000), "MAX-MIN Ant System"
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Basic Ant System: every ant evaporates and deposits on its own tour.
    #[default]
    AntSystem,

    /// Elitist Ant System: AS plus a bonus `weight * (1 / C_bsf)` on edges
    /// shared with the best-so-far tour.
    Elitist {
        /// Elitist weight `e`. `None` uses the number of nodes.
        weight: Option<f64>,
    },

    /// Rank-Based Ant System: only the `rank_cutoff - 1` best ants deposit,
    /// weighted by `rank_cutoff - rank`.
    RankBased {
        /// Rank cutoff `w`. Must be at least 2 and below the population size.
        rank_cutoff: usize,
    },

    /// Ant Colony System: pseudo-random-proportional construction with
    /// local updates, global update from the best-so-far tour only.
    ColonySystem {
        /// Probability of greedy exploitation at each step.
        q0: f64,
        /// Local decay rate `eps` applied to each traversed edge.
        local_decay: f64,
        /// When `false`, the global update recomputes the reverse cell from
        /// the already-updated forward cell, which leaves the matrix
        /// asymmetric. When `true`, both cells receive the forward value.
        symmetric_global: bool,
    },

    /// MAX-MIN Ant System: bounded pheromone, deposits from iteration-best
    /// or best-so-far, reinitialization on stagnation.
    MaxMin {
        /// Probability that the best tour is rebuilt once converged; sets
        /// the ratio between `tmin` and `tmax`. Typically 0.05.
        p_best: f64,
        /// Lower end of the stagnation threshold range.
        stagnation_low: f64,
        /// Upper end (exclusive) of the stagnation threshold range.
        stagnation_high: f64,
    },
}

impl Strategy {
    /// EAS with the elitist weight equal to the graph size.
    pub fn elitist() -> Self {
        Strategy::Elitist { weight: None }
    }

    /// RBAS with `w = 6`.
    pub fn rank_based() -> Self {
        Strategy::RankBased { rank_cutoff: 6 }
    }

    /// ACS with `q0 = 0.9`, `eps = 0.1` and the literal global update.
    pub fn colony_system() -> Self {
        Strategy::ColonySystem {
            q0: 0.9,
            local_decay: 0.1,
            symmetric_global: false,
        }
    }

    /// MMAS with `p_best = 0.05` and a stagnation window of `[15, 30)`.
    pub fn max_min() -> Self {
        Strategy::MaxMin {
            p_best: 0.05,
            stagnation_low: 15.0,
            stagnation_high: 30.0,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::AntSystem => "AS",
            Strategy::Elitist { .. } => "EAS",
            Strategy::RankBased { .. } => "RBAS",
            Strategy::ColonySystem { .. } => "ACS",
            Strategy::MaxMin { .. } => "MMAS",
        }
    }
}

/// Configuration for an ACO run.
///
/// The presets ([`ant_system`](Self::ant_system),
/// [`elitist`](Self::elitist), [`rank_based`](Self::rank_based),
/// [`colony_system`](Self::colony_system), [`max_min`](Self::max_min))
/// carry the customary parameter values for each strategy.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{AcoConfig, Strategy};
///
/// let config = AcoConfig::max_min()
///     .with_population_size(12)
///     .with_iterations(250)
///     .with_dropout(true)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.strategy, Strategy::max_min());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants constructing a tour each iteration.
    pub population_size: usize,

    /// Exponent applied to pheromone in the transition rule.
    pub alpha: f64,

    /// Exponent applied to the inverse-cost heuristic.
    pub beta: f64,

    /// Evaporation (AS, EAS, RBAS, MMAS) or global decay (ACS) rate in [0, 1].
    pub rho: f64,

    /// Number of iterations. This is the only stopping rule.
    pub iterations: usize,

    /// Whether candidate-list thinning is applied at each construction step.
    pub dropout: bool,

    /// Probability of dropping each candidate when `dropout` is enabled.
    pub dropout_rate: f64,

    /// Pheromone update strategy.
    pub strategy: Strategy,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Score tours in parallel. Only effective with the `parallel` feature;
    /// results are identical either way.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self::ant_system()
    }
}

impl AcoConfig {
    fn base(strategy: Strategy, population_size: usize, rho: f64) -> Self {
        Self {
            population_size,
            alpha: 1.0,
            beta: 3.0,
            rho,
            iterations: 100,
            dropout: false,
            dropout_rate: 0.01,
            strategy,
            seed: None,
            parallel: true,
        }
    }

    /// Ant System: 8 ants, `rho = 0.5`.
    pub fn ant_system() -> Self {
        Self::base(Strategy::AntSystem, 8, 0.5)
    }

    /// Elitist Ant System: 8 ants, `rho = 0.5`, `e = N`.
    pub fn elitist() -> Self {
        Self::base(Strategy::elitist(), 8, 0.5)
    }

    /// Rank-Based Ant System: 8 ants, `rho = 0.1`, `w = 6`.
    pub fn rank_based() -> Self {
        Self::base(Strategy::rank_based(), 8, 0.1)
    }

    /// Ant Colony System: 10 ants, `rho = 0.1`, `q0 = 0.9`, `eps = 0.1`,
    /// dropout rate 0.005.
    pub fn colony_system() -> Self {
        Self {
            dropout_rate: 0.005,
            ..Self::base(Strategy::colony_system(), 10, 0.1)
        }
    }

    /// MAX-MIN Ant System: 8 ants, `rho = 0.02`.
    pub fn max_min() -> Self {
        Self::base(Strategy::max_min(), 8, 0.02)
    }

    /// Sets the number of ants per iteration.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic (inverse cost) exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Enables or disables candidate dropout.
    pub fn with_dropout(mut self, enabled: bool) -> Self {
        self.dropout = enabled;
        self
    }

    /// Sets the per-candidate dropout probability.
    pub fn with_dropout_rate(mut self, rate: f64) -> Self {
        self.dropout_rate = rate;
        self
    }

    /// Replaces the strategy, keeping every other parameter.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel tour scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates graph-independent parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidParameter`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), AcoError> {
        check_population(self.population_size)?;
        check_exponent("alpha", self.alpha)?;
        check_exponent("beta", self.beta)?;
        check_unit("rho", self.rho)?;
        check_dropout_rate(self.dropout_rate)?;

        match self.strategy {
            Strategy::AntSystem => Ok(()),
            Strategy::Elitist { weight } => weight.map_or(Ok(()), check_elitist_weight),
            Strategy::RankBased { rank_cutoff } => {
                check_rank_cutoff(rank_cutoff, self.population_size)
            }
            Strategy::ColonySystem {
                q0, local_decay, ..
            } => {
                check_unit("q0", q0)?;
                check_unit("local_decay", local_decay)
            }
            Strategy::MaxMin {
                p_best,
                stagnation_low,
                stagnation_high,
            } => check_max_min(self.rho, p_best, stagnation_low, stagnation_high),
        }
    }

    /// Validates the configuration against a concrete graph.
    ///
    /// In addition to [`validate`](Self::validate), every strategy needs at
    /// least two nodes and MAX-MIN needs at least three, because its lower
    /// bound divides by `N / 2 - 1`.
    pub fn validate_for(&self, graph: &CostMatrix) -> Result<(), AcoError> {
        self.validate()?;
        let min_nodes = if matches!(self.strategy, Strategy::MaxMin { .. }) {
            3
        } else {
            2
        };
        check_graph_size(graph, min_nodes)
    }
}

pub(crate) fn check_unit(name: &'static str, value: f64) -> Result<(), AcoError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AcoError::parameter(
            name,
            format!("must be in [0, 1], got {value}"),
        ))
    }
}

pub(crate) fn check_exponent(name: &'static str, value: f64) -> Result<(), AcoError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AcoError::parameter(
            name,
            format!("must be finite and non-negative, got {value}"),
        ))
    }
}

pub(crate) fn check_dropout_rate(rate: f64) -> Result<(), AcoError> {
    if (0.0..1.0).contains(&rate) {
        Ok(())
    } else {
        Err(AcoError::parameter(
            "dropout_rate",
            format!("must be in [0, 1), got {rate}"),
        ))
    }
}

pub(crate) fn check_population(population: usize) -> Result<(), AcoError> {
    if population < 1 {
        return Err(AcoError::parameter(
            "population_size",
            "must be at least 1",
        ));
    }
    Ok(())
}

pub(crate) fn check_elitist_weight(weight: f64) -> Result<(), AcoError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(AcoError::parameter(
            "weight",
            format!("elitist weight must be finite and non-negative, got {weight}"),
        ))
    }
}

pub(crate) fn check_rank_cutoff(rank_cutoff: usize, population: usize) -> Result<(), AcoError> {
    if rank_cutoff < 2 {
        return Err(AcoError::parameter(
            "rank_cutoff",
            format!("must be at least 2 so one ant deposits, got {rank_cutoff}"),
        ));
    }
    if rank_cutoff >= population {
        return Err(AcoError::parameter(
            "rank_cutoff",
            format!("must be below population_size ({population}), got {rank_cutoff}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_max_min(
    rho: f64,
    p_best: f64,
    stagnation_low: f64,
    stagnation_high: f64,
) -> Result<(), AcoError> {
    if rho <= 0.0 {
        return Err(AcoError::parameter(
            "rho",
            "MAX-MIN upper bound 1 / (rho * C) requires rho > 0",
        ));
    }
    if !(p_best > 0.0 && p_best < 1.0) {
        return Err(AcoError::parameter(
            "p_best",
            format!("must be in (0, 1), got {p_best}"),
        ));
    }
    if !(stagnation_low > 0.0 && stagnation_low < stagnation_high && stagnation_high.is_finite())
    {
        return Err(AcoError::parameter(
            "stagnation_low..stagnation_high",
            format!("must satisfy 0 < low < high, got {stagnation_low}..{stagnation_high}"),
        ));
    }
    Ok(())
}

/// Every strategy needs at least two nodes; MAX-MIN needs three because its
/// lower bound divides by `N / 2 - 1`.
pub(crate) fn check_graph_size(graph: &CostMatrix, min_nodes: usize) -> Result<(), AcoError> {
    let n = graph.dim();
    if n >= min_nodes {
        return Ok(());
    }
    if min_nodes > 2 {
        Err(AcoError::graph(format!(
            "MAX-MIN bounds need at least {min_nodes} nodes, graph has {n}"
        )))
    } else {
        Err(AcoError::graph(format!(
            "a tour needs at least {min_nodes} nodes, graph has {n}"
        )))
    }
}
