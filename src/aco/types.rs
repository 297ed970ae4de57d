//! Ants and the colony that tracks iteration-best and best-so-far tours.

use crate::graph::{CostMatrix, Tour};

/// One agent's tour and its cost for the current iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ant {
    /// Closed Hamiltonian cycle.
    pub tour: Tour,
    /// Sum of edge costs along `tour`.
    pub cost: f64,
}

impl Ant {
    /// Scores `tour` against `graph`.
    pub fn scored(graph: &CostMatrix, tour: Tour) -> Self {
        let cost = graph.tour_cost(&tour);
        Self { tour, cost }
    }
}

/// A fixed-size set of ants plus the iteration-best and best-so-far
/// records.
///
/// Both records are owned copies, so replacing the ants never alters a
/// previously recorded best.
#[derive(Debug, Clone)]
pub struct Colony {
    ants: Vec<Ant>,
    iteration_best: Ant,
    best_so_far: Ant,
    improved: bool,
}

impl Colony {
    /// Seeds `population` ants with the same bootstrap ant, which is also
    /// the initial iteration-best and best-so-far.
    pub fn new(population: usize, bootstrap: Ant) -> Self {
        Self {
            ants: vec![bootstrap.clone(); population],
            iteration_best: bootstrap.clone(),
            best_so_far: bootstrap,
            improved: false,
        }
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn iteration_best(&self) -> &Ant {
        &self.iteration_best
    }

    pub fn best_so_far(&self) -> &Ant {
        &self.best_so_far
    }

    /// Whether the last [`advance`](Self::advance) improved the best-so-far.
    pub fn improved(&self) -> bool {
        self.improved
    }

    /// Replaces the ants with this iteration's, recomputes the
    /// iteration-best (first minimum in ant order) and promotes it to
    /// best-so-far when strictly cheaper. Returns whether it was promoted.
    ///
    /// # Panics
    ///
    /// Panics if `ants` is empty.
    pub fn advance(&mut self, ants: Vec<Ant>) -> bool {
        let best = ants
            .iter()
            .reduce(|best, ant| if ant.cost < best.cost { ant } else { best })
            .expect("colony must have at least one ant")
            .clone();

        self.improved = best.cost < self.best_so_far.cost;
        if self.improved {
            self.best_so_far = best.clone();
        }
        self.iteration_best = best;
        self.ants = ants;
        self.improved
    }

    /// Ant indices ordered by ascending cost; equal costs keep ant order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.ants.len()).collect();
        order.sort_by(|&a, &b| self.ants[a].cost.total_cmp(&self.ants[b].cost));
        order
    }

    pub(crate) fn into_ants(self) -> Vec<Ant> {
        self.ants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ant(cost: f64, tag: usize) -> Ant {
        Ant {
            tour: Tour::from(vec![tag, tag]),
            cost,
        }
    }

    #[test]
    fn test_new_seeds_all_records() {
        let colony = Colony::new(3, ant(10.0, 0));
        assert_eq!(colony.ants().len(), 3);
        assert_eq!(colony.iteration_best().cost, 10.0);
        assert_eq!(colony.best_so_far().cost, 10.0);
        assert!(!colony.improved());
    }

    #[test]
    fn test_advance_tracks_best() {
        let mut colony = Colony::new(3, ant(10.0, 0));

        assert!(colony.advance(vec![ant(12.0, 1), ant(7.0, 2), ant(9.0, 3)]));
        assert_eq!(colony.iteration_best().cost, 7.0);
        assert_eq!(colony.best_so_far().cost, 7.0);

        assert!(!colony.advance(vec![ant(8.0, 4), ant(11.0, 5), ant(9.0, 6)]));
        assert_eq!(colony.iteration_best().cost, 8.0);
        assert_eq!(colony.best_so_far().cost, 7.0);
        assert_eq!(colony.best_so_far().tour, Tour::from(vec![2, 2]));
    }

    #[test]
    fn test_equal_cost_is_not_improvement() {
        let mut colony = Colony::new(2, ant(5.0, 0));
        assert!(!colony.advance(vec![ant(5.0, 1), ant(6.0, 2)]));
        assert_eq!(colony.best_so_far().tour, Tour::from(vec![0, 0]));
    }

    #[test]
    fn test_iteration_best_ties_first_encountered() {
        let mut colony = Colony::new(3, ant(10.0, 0));
        colony.advance(vec![ant(4.0, 1), ant(3.0, 2), ant(3.0, 3)]);
        assert_eq!(colony.iteration_best().tour, Tour::from(vec![2, 2]));
    }

    #[test]
    fn test_ranking_is_stable() {
        let mut colony = Colony::new(4, ant(10.0, 0));
        colony.advance(vec![ant(5.0, 1), ant(2.0, 2), ant(5.0, 3), ant(1.0, 4)]);
        assert_eq!(colony.ranking(), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_best_is_decoupled_from_ants() {
        let mut colony = Colony::new(1, ant(10.0, 0));
        colony.advance(vec![ant(3.0, 1)]);
        colony.advance(vec![ant(9.0, 2)]);
        assert_eq!(colony.best_so_far().tour, Tour::from(vec![1, 1]));
        assert_eq!(colony.ants()[0].tour, Tour::from(vec![2, 2]));
    }
}
