//! Pheromone update strategies.
//!
//! Each strategy implements [`PheromonePolicy`]: how the matrix is seeded
//! from the bootstrap tour, how an ant constructs its tour, and how the
//! matrix is written back after every iteration. All reinforcement uses
//! `tau = 1 / C` for a tour of cost `C`.

use super::config::{
    check_dropout_rate, check_elitist_weight, check_exponent, check_graph_size, check_max_min,
    check_population, check_rank_cutoff, check_unit, AcoConfig, Strategy,
};
use super::pheromone::PheromoneMatrix;
use super::sampler::{construct_tour, construct_tour_acs, Exploitation, SamplerParams};
use super::types::Colony;
use crate::error::AcoError;
use crate::graph::{CostMatrix, Tour};
use rand::Rng;
use tracing::{debug, trace};

/// Common interface of the five update strategies.
pub trait PheromonePolicy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Transition-rule parameters used by [`construct`](Self::construct).
    fn sampler(&self) -> &SamplerParams;

    /// Checks the policy's own parameters against `graph` before a run.
    ///
    /// # Errors
    ///
    /// Returns the first parameter or graph violation found.
    fn validate(&self, graph: &CostMatrix) -> Result<(), AcoError>;

    /// Builds the initial matrix from the cost of the bootstrap tour.
    fn initialize(&mut self, graph: &CostMatrix, bootstrap_cost: f64) -> PheromoneMatrix;

    /// Constructs one ant's tour.
    ///
    /// The default is random-proportional construction, which never writes
    /// to `pheromone`.
    fn construct<R: Rng>(
        &mut self,
        graph: &CostMatrix,
        pheromone: &mut PheromoneMatrix,
        rng: &mut R,
    ) -> Tour {
        construct_tour(graph, pheromone, self.sampler(), rng)
    }

    /// Applies the end-of-iteration update.
    fn update<R: Rng>(
        &mut self,
        graph: &CostMatrix,
        pheromone: &mut PheromoneMatrix,
        colony: &Colony,
        rng: &mut R,
    );

    /// Number of full reinitializations triggered by stagnation.
    fn stagnation_resets(&self) -> usize {
        0
    }
}

/// Checks shared by every strategy: transition exponents, dropout rate,
/// evaporation rate and a graph with at least two nodes.
fn check_common(sampler: &SamplerParams, rho: f64, graph: &CostMatrix) -> Result<(), AcoError> {
    check_exponent("alpha", sampler.alpha)?;
    check_exponent("beta", sampler.beta)?;
    if let Some(rate) = sampler.dropout {
        check_dropout_rate(rate)?;
    }
    check_unit("rho", rho)?;
    check_graph_size(graph, 2)
}

fn sampler_params(config: &AcoConfig) -> SamplerParams {
    SamplerParams {
        alpha: config.alpha,
        beta: config.beta,
        dropout: config.dropout.then_some(config.dropout_rate),
    }
}

/// Ant System: every ant evaporates and deposits along its own tour.
#[derive(Debug, Clone)]
pub struct AntSystem {
    sampler: SamplerParams,
    rho: f64,
    population: usize,
}

impl AntSystem {
    pub fn new(config: &AcoConfig) -> Self {
        Self {
            sampler: sampler_params(config),
            rho: config.rho,
            population: config.population_size,
        }
    }
}

impl PheromonePolicy for AntSystem {
    fn name(&self) -> &'static str {
        "AS"
    }

    fn sampler(&self) -> &SamplerParams {
        &self.sampler
    }

    fn validate(&self, graph: &CostMatrix) -> Result<(), AcoError> {
        check_population(self.population)?;
        check_common(&self.sampler, self.rho, graph)
    }

    fn initialize(&mut self, graph: &CostMatrix, bootstrap_cost: f64) -> PheromoneMatrix {
        PheromoneMatrix::new(graph.dim(), self.population as f64 / bootstrap_cost)
    }

    fn update<R: Rng>(
        &mut self,
        _graph: &CostMatrix,
        pheromone: &mut PheromoneMatrix,
        colony: &Colony,
        _rng: &mut R,
    ) {
        for ant in colony.ants() {
            let tau = 1.0 / ant.cost;
            for (i, j) in ant.tour.edges() {
                pheromone.reinforce(i, j, self.rho, tau);
            }
        }
    }
}

/// Elitist Ant System: AS plus `e * tau_bsf` on every deposited edge that
/// also lies on the best-so-far tour.
#[derive(Debug, Clone)]
pub struct ElitistAntSystem {
    sampler: SamplerParams,
    rho: f64,
    population: usize,
    weight: f64,
}

impl ElitistAntSystem {
    /// `weight` overrides the elitist weight; `None` uses the graph size.
    pub fn new(config: &AcoConfig, graph: &CostMatrix, weight: Option<f64>) -> Self {
        Self {
            sampler: sampler_params(config),
            rho: config.rho,
            population: config.population_size,
            weight: weight.unwrap_or(graph.dim() as f64),
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PheromonePolicy for ElitistAntSystem {
    fn name(&self) -> &'static str {
        "EAS"
    }

    fn sampler(&self) -> &SamplerParams {
        &self.sampler
    }

    fn validate(&self, graph: &CostMatrix) -> Result<(), AcoError> {
        check_population(self.population)?;
        check_elitist_weight(self.weight)?;
        check_common(&self.sampler, self.rho, graph)
    }

    fn initialize(&mut self, graph: &CostMatrix, bootstrap_cost: f64) -> PheromoneMatrix {
        PheromoneMatrix::new(graph.dim(), self.population as f64 / bootstrap_cost)
    }

    fn update<R: Rng>(
        &mut self,
        graph: &CostMatrix,
        pheromone: &mut PheromoneMatrix,
        colony: &Colony,
        _rng: &mut R,
    ) {
        let best = colony.best_so_far();
        let best_edges = best.tour.edge_set(graph.dim());
        let bonus = self.weight / best.cost;

        for ant in colony.ants() {
            let tau = 1.0 / ant.cost;
            for (i, j) in ant.tour.edges() {
                let amount = if best_edges.contains(i, j) { tau + bonus } else { tau };
                pheromone.reinforce(i, j, self.rho, amount);
            }
        }
    }
}

/// Rank-Based Ant System: the ant ranked `r < w` deposits `(w - r) * tau`,
/// plus `w * tau_bsf` on edges shared with the best-so-far tour.
#[derive(Debug, Clone)]
pub struct RankBasedAntSystem {
    sampler: SamplerParams,
    rho: f64,
    population: usize,
    rank_cutoff: usize,
}

impl RankBasedAntSystem {
    pub fn new(config: &AcoConfig, rank_cutoff: usize) -> Self {
        Self {
            sampler: sampler_params(config),
            rho: config.rho,
            population: config.population_size,
            rank_cutoff,
        }
    }
}

impl PheromonePolicy for RankBasedAntSystem {
    fn name(&self) -> &'static str {
        "RBAS"
    }

    fn sampler(&self) -> &SamplerParams {
        &self.sampler
    }

    fn validate(&self, graph: &CostMatrix) -> Result<(), AcoError> {
        check_rank_cutoff(self.rank_cutoff, self.population)?;
        check_common(&self.sampler, self.rho, graph)
    }

    fn initialize(&mut self, graph: &CostMatrix, bootstrap_cost: f64) -> PheromoneMatrix {
        PheromoneMatrix::new(graph.dim(), self.population as f64 / bootstrap_cost)
    }

    fn update<R: Rng>(
        &mut self,
        graph: &CostMatrix,
        pheromone: &mut PheromoneMatrix,
        colony: &Colony,
        _rng: &mut R,
    ) {
        let ants = colony.ants();
        let mut ranks = vec![0usize; ants.len()];
        for (position, idx) in colony.ranking().into_iter().enumerate() {
            ranks[idx] = position + 1;
        }

        let w = self.rank_cutoff;
        let best = colony.best_so_far();
        let best_edges = best.tour.edge_set(graph.dim());
        let bonus = w as f64 / best.cost;

        // Deposits are applied in ant order, not rank order.
        for (ant, &rank) in ants.iter().zip(&ranks) {
            if rank >= w {
                continue;
            }
            let deposit = (w - rank) as f64 / ant.cost;
            for (i, j) in ant.tour.edges() {
                let amount = if best_edges.contains(i, j) {
                    deposit + bonus
                } else {
                    deposit
                };
                pheromone.reinforce(i, j, self.rho, amount);
            }
        }
    }
}

/// Ant Colony System: local relaxation toward `t0` during construction and
/// a global update from the best-so-far tour only.
#[derive(Debug, Clone)]
pub struct AntColonySystem {
    sampler: SamplerParams,
    rho: f64,
    q0: f64,
    local_decay: f64,
    symmetric_global: bool,
    t0: f64,
}

impl AntColonySystem {
    pub fn new(config: &AcoConfig, q0: f64, local_decay: f64, symmetric_global: bool) -> Self {
        Self {
            sampler: sampler_params(config),
            rho: config.rho,
            q0,
            local_decay,
            symmetric_global,
            t0: 0.0,
        }
    }

    /// Initial pheromone level `1 / (N * C0)`; zero before initialization.
    pub fn t0(&self) -> f64 {
        self.t0
    }
}

impl PheromonePolicy for AntColonySystem {
    fn name(&self) -> &'static str {
        "ACS"
    }

    fn sampler(&self) -> &SamplerParams {
        &self.sampler
    }

    fn validate(&self, graph: &CostMatrix) -> Result<(), AcoError> {
        check_unit("q0", self.q0)?;
        check_unit("local_decay", self.local_decay)?;
        check_common(&self.sampler, self.rho, graph)
    }

    fn initialize(&mut self, graph: &CostMatrix, bootstrap_cost: f64) -> PheromoneMatrix {
        self.t0 = 1.0 / (graph.dim() as f64 * bootstrap_cost);
        PheromoneMatrix::new(graph.dim(), self.t0)
    }

    fn construct<R: Rng>(
        &mut self,
        graph: &CostMatrix,
        pheromone: &mut PheromoneMatrix,
        rng: &mut R,
    ) -> Tour {
        let exploitation = Exploitation {
            q0: self.q0,
            local_decay: self.local_decay,
            t0: self.t0,
        };
        construct_tour_acs(graph, pheromone, &self.sampler, &exploitation, rng)
    }

    fn update<R: Rng>(
        &mut self,
        _graph: &CostMatrix,
        pheromone: &mut PheromoneMatrix,
        colony: &Colony,
        _rng: &mut R,
    ) {
        let best = colony.best_so_far();
        let tau = 1.0 / best.cost;
        for (i, j) in best.tour.edges() {
            pheromone.deposit_global(i, j, self.rho, tau, self.symmetric_global);
        }
    }
}

/// MAX-MIN Ant System: pheromone bounded to `[tmin, tmax]`, deposits from
/// the iteration-best or best-so-far tour, full reset to `tmax` after a
/// randomly sized stagnation window.
#[derive(Debug, Clone)]
pub struct MaxMinAntSystem {
    sampler: SamplerParams,
    rho: f64,
    population: usize,
    p_best: f64,
    stagnation_low: f64,
    stagnation_high: f64,
    nodes: usize,
    tmax: f64,
    tmin: f64,
    stagnation: usize,
    resets: usize,
}

impl MaxMinAntSystem {
    pub fn new(
        config: &AcoConfig,
        p_best: f64,
        stagnation_low: f64,
        stagnation_high: f64,
    ) -> Self {
        Self {
            sampler: sampler_params(config),
            rho: config.rho,
            population: config.population_size,
            p_best,
            stagnation_low,
            stagnation_high,
            nodes: 0,
            tmax: 0.0,
            tmin: 0.0,
            stagnation: 0,
            resets: 0,
        }
    }

    /// Current `(tmin, tmax)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.tmin, self.tmax)
    }

    /// `tmax = 1 / (rho * C)`,
    /// `tmin = tmax * (1 - p^(1/m)) / ((N/2 - 1) * p^(1/m))`, capped at `tmax`.
    fn set_bounds(&mut self, best_cost: f64) {
        self.tmax = 1.0 / (self.rho * best_cost);
        let root = self.p_best.powf(1.0 / self.population as f64);
        let tmin = self.tmax * (1.0 - root) / ((self.nodes as f64 / 2.0 - 1.0) * root);
        self.tmin = tmin.min(self.tmax);
    }
}

impl PheromonePolicy for MaxMinAntSystem {
    fn name(&self) -> &'static str {
        "MMAS"
    }

    fn sampler(&self) -> &SamplerParams {
        &self.sampler
    }

    fn validate(&self, graph: &CostMatrix) -> Result<(), AcoError> {
        check_population(self.population)?;
        check_common(&self.sampler, self.rho, graph)?;
        check_max_min(
            self.rho,
            self.p_best,
            self.stagnation_low,
            self.stagnation_high,
        )?;
        check_graph_size(graph, 3)
    }

    fn initialize(&mut self, graph: &CostMatrix, bootstrap_cost: f64) -> PheromoneMatrix {
        self.nodes = graph.dim();
        self.set_bounds(bootstrap_cost);
        self.stagnation = 0;
        PheromoneMatrix::new(graph.dim(), self.tmax)
    }

    fn update<R: Rng>(
        &mut self,
        _graph: &CostMatrix,
        pheromone: &mut PheromoneMatrix,
        colony: &Colony,
        rng: &mut R,
    ) {
        if colony.improved() {
            self.set_bounds(colony.best_so_far().cost);
            pheromone.clamp_all(self.tmin, self.tmax);
            self.stagnation = 0;
            trace!(tmin = self.tmin, tmax = self.tmax, "pheromone bounds updated");
        } else {
            self.stagnation += 1;
        }

        let threshold = rng.random_range(self.stagnation_low..self.stagnation_high);
        if self.stagnation as f64 >= threshold {
            debug!(
                stagnation = self.stagnation,
                tmax = self.tmax,
                "stagnation detected, pheromone reinitialized"
            );
            pheromone.fill(self.tmax);
            self.stagnation = 0;
            self.resets += 1;
        }

        for ant in colony.ants() {
            for (i, j) in ant.tour.edges() {
                pheromone.evaporate_bounded(i, j, self.rho, self.tmin, self.tmax);
            }
        }

        let source = if rng.random::<f64>() < 0.5 {
            colony.iteration_best()
        } else {
            colony.best_so_far()
        };
        let tau = 1.0 / source.cost;
        for (i, j) in source.tour.edges() {
            pheromone.deposit_bounded(i, j, tau, self.tmax);
        }
    }

    fn stagnation_resets(&self) -> usize {
        self.resets
    }
}

/// Dispatches on the configured [`Strategy`].
pub(crate) enum AnyPolicy {
    As(AntSystem),
    Eas(ElitistAntSystem),
    Rbas(RankBasedAntSystem),
    Acs(AntColonySystem),
    Mmas(MaxMinAntSystem),
}

impl AnyPolicy {
    pub(crate) fn from_config(config: &AcoConfig, graph: &CostMatrix) -> Self {
        match config.strategy {
            Strategy::AntSystem => AnyPolicy::As(AntSystem::new(config)),
            Strategy::Elitist { weight } => {
                AnyPolicy::Eas(ElitistAntSystem::new(config, graph, weight))
            }
            Strategy::RankBased { rank_cutoff } => {
                AnyPolicy::Rbas(RankBasedAntSystem::new(config, rank_cutoff))
            }
            Strategy::ColonySystem {
                q0,
                local_decay,
                symmetric_global,
            } => AnyPolicy::Acs(AntColonySystem::new(
                config,
                q0,
                local_decay,
                symmetric_global,
            )),
            Strategy::MaxMin {
                p_best,
                stagnation_low,
                stagnation_high,
            } => AnyPolicy::Mmas(MaxMinAntSystem::new(
                config,
                p_best,
                stagnation_low,
                stagnation_high,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::types::Ant;
    use crate::random::create_rng;

    fn square() -> CostMatrix {
        // unit square, sides 1, diagonals 2
        CostMatrix::new(vec![
            vec![0.0, 1.0, 2.0, 1.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![1.0, 2.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    fn ant(graph: &CostMatrix, nodes: Vec<usize>) -> Ant {
        Ant::scored(graph, Tour::from(nodes))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_as_initialize_and_update() {
        let graph = square();
        let config = AcoConfig::ant_system().with_population_size(2);
        let mut policy = AntSystem::new(&config);
        let mut pheromone = policy.initialize(&graph, 4.0);
        assert!(close(pheromone.get(0, 1), 0.5));

        // two ants on the perimeter tour (cost 4)
        let perimeter = ant(&graph, vec![0, 1, 2, 3, 0]);
        let mut colony = Colony::new(2, perimeter.clone());
        colony.advance(vec![perimeter.clone(), perimeter]);

        let mut rng = create_rng(0);
        policy.update(&graph, &mut pheromone, &colony, &mut rng);

        // 0.5 -> 0.5*0.5 + 0.25 = 0.5 -> 0.5*0.5 + 0.25 = 0.5
        assert!(close(pheromone.get(0, 1), 0.5));
        // diagonal untouched
        assert!(close(pheromone.get(0, 2), 0.5));
        assert!(pheromone.is_symmetric());
    }

    #[test]
    fn test_eas_bonus_only_on_best_edges() {
        let graph = square();
        let config = AcoConfig::elitist().with_population_size(1);
        let mut policy = ElitistAntSystem::new(&config, &graph, None);
        assert!(close(policy.weight(), 4.0));
        let mut pheromone = policy.initialize(&graph, 6.0);
        let initial = 1.0 / 6.0;

        // best-so-far is the perimeter; the ant walks a tour with diagonals
        let best = ant(&graph, vec![0, 1, 2, 3, 0]);
        let crossing = ant(&graph, vec![0, 2, 1, 3, 0]);
        let mut colony = Colony::new(1, best);
        colony.advance(vec![crossing.clone()]);
        assert!(close(crossing.cost, 6.0));

        let mut rng = create_rng(0);
        policy.update(&graph, &mut pheromone, &colony, &mut rng);

        let tau = 1.0 / 6.0;
        let bonus = 4.0 / 4.0;
        // (2,1) and (3,0) are perimeter edges shared with the best tour
        assert!(close(pheromone.get(2, 1), 0.5 * initial + tau + bonus));
        assert!(close(pheromone.get(0, 3), 0.5 * initial + tau + bonus));
        // diagonals get no bonus
        assert!(close(pheromone.get(0, 2), 0.5 * initial + tau));
        assert!(close(pheromone.get(1, 3), 0.5 * initial + tau));
        // edge not on the ant's tour is untouched
        assert!(close(pheromone.get(0, 1), initial));
        assert!(pheromone.is_symmetric());
    }

    #[test]
    fn test_rbas_only_top_ranks_deposit() {
        let graph = square();
        let config = AcoConfig::rank_based()
            .with_population_size(3)
            .with_rho(0.0)
            .with_strategy(Strategy::RankBased { rank_cutoff: 2 });
        let mut policy = RankBasedAntSystem::new(&config, 2);
        let mut pheromone = policy.initialize(&graph, 6.0);
        let initial = 3.0 / 6.0;

        let best = ant(&graph, vec![0, 1, 2, 3, 0]);
        let worse = ant(&graph, vec![0, 2, 1, 3, 0]);
        let worst = ant(&graph, vec![0, 1, 3, 2, 0]);
        let mut colony = Colony::new(3, worse.clone());
        // rank order: best (1), worse (2), worst (3) -> only rank 1 deposits
        colony.advance(vec![worst, best.clone(), worse]);

        let mut rng = create_rng(0);
        policy.update(&graph, &mut pheromone, &colony, &mut rng);

        let deposit = 1.0 / 4.0 + 2.0 / 4.0;
        assert!(close(pheromone.get(0, 1), initial + deposit));
        assert!(close(pheromone.get(2, 3), initial + deposit));
        // the diagonal (0,2) only appears on lower ranked tours
        assert!(close(pheromone.get(0, 2), initial));
        assert!(close(pheromone.get(1, 3), initial));
        assert!(pheromone.is_symmetric());
    }

    #[test]
    fn test_acs_t0_and_global_update() {
        let graph = square();
        let config = AcoConfig::colony_system();
        let mut policy = AntColonySystem::new(&config, 0.9, 0.1, true);
        let mut pheromone = policy.initialize(&graph, 8.0);
        assert!(close(policy.t0(), 1.0 / 32.0));
        assert!(close(pheromone.get(1, 2), 1.0 / 32.0));

        let best = ant(&graph, vec![0, 1, 2, 3, 0]);
        let mut colony = Colony::new(10, ant(&graph, vec![0, 2, 1, 3, 0]));
        colony.advance(vec![best]);

        let mut rng = create_rng(0);
        policy.update(&graph, &mut pheromone, &colony, &mut rng);
        let expected = 0.9 / 32.0 + 0.1 * 0.25;
        assert!(close(pheromone.get(0, 1), expected));
        assert!(close(pheromone.get(1, 0), expected));
        // no evaporation off the best tour
        assert!(close(pheromone.get(0, 2), 1.0 / 32.0));
    }

    #[test]
    fn test_acs_literal_global_update_reverse_cell() {
        let graph = square();
        let config = AcoConfig::colony_system();
        let mut policy = AntColonySystem::new(&config, 0.9, 0.1, false);
        let mut pheromone = policy.initialize(&graph, 8.0);

        let mut colony = Colony::new(1, ant(&graph, vec![0, 2, 1, 3, 0]));
        colony.advance(vec![ant(&graph, vec![0, 1, 2, 3, 0])]);

        let mut rng = create_rng(0);
        policy.update(&graph, &mut pheromone, &colony, &mut rng);
        let forward = 0.9 / 32.0 + 0.1 * 0.25;
        assert!(close(pheromone.get(0, 1), forward));
        assert!(close(pheromone.get(1, 0), 0.9 * forward + 0.1 * 0.25));
    }

    #[test]
    fn test_mmas_bounds() {
        let graph = square();
        let config = AcoConfig::max_min().with_population_size(8);
        let mut policy = MaxMinAntSystem::new(&config, 0.05, 15.0, 30.0);
        let pheromone = policy.initialize(&graph, 5.0);

        let (tmin, tmax) = policy.bounds();
        assert!(close(tmax, 1.0 / (0.02 * 5.0)));
        let root = 0.05f64.powf(1.0 / 8.0);
        assert!(close(tmin, tmax * (1.0 - root) / ((4.0 / 2.0 - 1.0) * root)));
        assert!(tmin < tmax);
        assert!(close(pheromone.min_level(), tmax));
    }

    #[test]
    fn test_mmas_tmin_capped_at_tmax() {
        let graph = square();
        let config = AcoConfig::max_min().with_population_size(1);
        let mut policy = MaxMinAntSystem::new(&config, 0.05, 15.0, 30.0);
        policy.initialize(&graph, 5.0);
        let (tmin, tmax) = policy.bounds();
        assert!(close(tmin, tmax));
    }

    #[test]
    fn test_mmas_update_stays_within_bounds() {
        let graph = square();
        let config = AcoConfig::max_min().with_population_size(2).with_rho(0.5);
        let mut policy = MaxMinAntSystem::new(&config, 0.05, 15.0, 30.0);
        let mut pheromone = policy.initialize(&graph, 6.0);

        let mut colony = Colony::new(2, ant(&graph, vec![0, 2, 1, 3, 0]));
        let mut rng = create_rng(4);
        for _ in 0..40 {
            colony.advance(vec![
                ant(&graph, vec![0, 1, 2, 3, 0]),
                ant(&graph, vec![0, 2, 1, 3, 0]),
            ]);
            policy.update(&graph, &mut pheromone, &colony, &mut rng);

            let (tmin, tmax) = policy.bounds();
            assert!(pheromone.min_level() >= tmin, "below tmin");
            assert!(pheromone.max_level() <= tmax, "above tmax");
            assert!(pheromone.is_symmetric());
        }
        // improved once, then 39 stagnant iterations: at least one reset
        assert!(policy.stagnation_resets() >= 1);
    }

    #[test]
    fn test_validate_accepts_presets_and_rejects_bad_parameters() {
        let graph = square();
        for config in [
            AcoConfig::ant_system(),
            AcoConfig::elitist(),
            AcoConfig::rank_based(),
            AcoConfig::colony_system(),
            AcoConfig::max_min(),
        ] {
            let accepted = match AnyPolicy::from_config(&config, &graph) {
                AnyPolicy::As(p) => p.validate(&graph),
                AnyPolicy::Eas(p) => p.validate(&graph),
                AnyPolicy::Rbas(p) => p.validate(&graph),
                AnyPolicy::Acs(p) => p.validate(&graph),
                AnyPolicy::Mmas(p) => p.validate(&graph),
            };
            assert_eq!(accepted, Ok(()), "{}", config.strategy.name());
        }

        let steep = AcoConfig::ant_system().with_beta(f64::INFINITY);
        assert!(AntSystem::new(&steep).validate(&graph).is_err());
        let negative = ElitistAntSystem::new(&AcoConfig::elitist(), &graph, Some(-1.0));
        assert!(negative.validate(&graph).is_err());
        let decay = AntColonySystem::new(&AcoConfig::colony_system(), 0.9, -0.1, false);
        assert!(decay.validate(&graph).is_err());
        let window = MaxMinAntSystem::new(&AcoConfig::max_min(), 0.05, 20.0, 20.0);
        assert!(window.validate(&graph).is_err());
        let p_best = MaxMinAntSystem::new(&AcoConfig::max_min(), 1.0, 15.0, 30.0);
        assert!(p_best.validate(&graph).is_err());
    }

    #[test]
    fn test_from_config_selects_strategy() {
        let graph = square();
        let names: Vec<&str> = [
            AcoConfig::ant_system(),
            AcoConfig::elitist(),
            AcoConfig::rank_based(),
            AcoConfig::colony_system(),
            AcoConfig::max_min(),
        ]
        .iter()
        .map(|config| match AnyPolicy::from_config(config, &graph) {
            AnyPolicy::As(p) => p.name(),
            AnyPolicy::Eas(p) => p.name(),
            AnyPolicy::Rbas(p) => p.name(),
            AnyPolicy::Acs(p) => p.name(),
            AnyPolicy::Mmas(p) => p.name(),
        })
        .collect();
        assert_eq!(names, vec!["AS", "EAS", "RBAS", "ACS", "MMAS"]);
    }
}
