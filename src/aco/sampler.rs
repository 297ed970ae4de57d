//! Tour construction.
//!
//! Every construction starts at a uniformly random node and extends the
//! partial tour one node at a time until all nodes are consumed, then
//! closes the loop. The modes differ only in how the next node is chosen:
//!
//! - [`random_tour`]: uniform choice, used to bootstrap pheromone levels.
//! - [`construct_tour`]: random-proportional (roulette-wheel) choice over
//!   `tau(i,j)^alpha * (1 / c(i,j))^beta`.
//! - [`construct_tour_acs`]: pseudo-random-proportional choice with an ACS
//!   local pheromone update after every step.
//!
//! Candidate-list thinning ("dropout") optionally removes a few candidates
//! before each choice, never all of them.

use super::pheromone::PheromoneMatrix;
use crate::graph::{CostMatrix, Tour};
use rand::Rng;

/// Parameters of the random-proportional transition rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerParams {
    /// Pheromone exponent.
    pub alpha: f64,
    /// Inverse-cost exponent.
    pub beta: f64,
    /// Per-candidate drop probability, or `None` to disable thinning.
    pub dropout: Option<f64>,
}

/// ACS exploitation settings used by [`construct_tour_acs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exploitation {
    /// Probability of taking the greedy choice.
    pub q0: f64,
    /// Local decay rate `eps`.
    pub local_decay: f64,
    /// Initial pheromone level `t0` the local update relaxes toward.
    pub t0: f64,
}

/// Builds a uniformly random closed tour over `n` nodes.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let start = rng.random_range(0..n);
    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(start);
    let mut remaining: Vec<usize> = (0..n).filter(|&v| v != start).collect();
    while !remaining.is_empty() {
        let idx = rng.random_range(0..remaining.len());
        nodes.push(remaining.remove(idx));
    }
    nodes.push(start);
    Tour::new(nodes)
}

/// Builds a tour with random-proportional choice at every step.
pub fn construct_tour<R: Rng>(
    graph: &CostMatrix,
    pheromone: &PheromoneMatrix,
    params: &SamplerParams,
    rng: &mut R,
) -> Tour {
    walk(graph.dim(), params.dropout, rng, |current, candidates, rng| {
        proportional_choice(graph, pheromone, current, candidates, params, rng)
    })
}

/// Builds a tour with the ACS pseudo-random-proportional rule.
///
/// With probability `q0` the candidate maximizing
/// `tau(i,j) * (1 / c(i,j))^beta` is taken; otherwise the roulette wheel
/// decides. After each step the traversed edge is relaxed toward `t0`, so
/// the change is visible to the rest of this tour and to later ants of the
/// same iteration.
pub fn construct_tour_acs<R: Rng>(
    graph: &CostMatrix,
    pheromone: &mut PheromoneMatrix,
    params: &SamplerParams,
    exploitation: &Exploitation,
    rng: &mut R,
) -> Tour {
    walk(graph.dim(), params.dropout, rng, |current, candidates, rng| {
        let next = if rng.random::<f64>() < exploitation.q0 {
            greedy_choice(graph, pheromone, current, candidates, params.beta)
        } else {
            proportional_choice(graph, pheromone, current, candidates, params, rng)
        };
        pheromone.relax_toward(current, next, exploitation.local_decay, exploitation.t0);
        next
    })
}

/// Roulette-wheel lookup: returns the first index whose cumulative
/// probability is `>= r`.
///
/// If rounding leaves the final cumulative value below `r`, the last index
/// is returned.
///
/// # Panics
///
/// Panics if `probabilities` is empty.
pub fn roulette_select(probabilities: &[f64], r: f64) -> usize {
    assert!(
        !probabilities.is_empty(),
        "roulette selection over an empty candidate set"
    );
    let mut cumulative = 0.0;
    for (idx, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative >= r {
            return idx;
        }
    }
    probabilities.len() - 1
}

/// Drops each candidate independently with probability `rate`, keeping at
/// least one. Order of the survivors is preserved.
pub fn thin_candidates<R: Rng>(candidates: &mut Vec<usize>, rate: f64, rng: &mut R) {
    if rate <= 0.0 {
        return;
    }
    let mut kept = candidates.len();
    candidates.retain(|_| {
        if kept > 1 && rng.random_bool(rate) {
            kept -= 1;
            false
        } else {
            true
        }
    });
}

fn walk<R, F>(n: usize, dropout: Option<f64>, rng: &mut R, mut choose: F) -> Tour
where
    R: Rng,
    F: FnMut(usize, &[usize], &mut R) -> usize,
{
    let start = rng.random_range(0..n);
    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(start);

    let mut remaining: Vec<usize> = (0..n).filter(|&v| v != start).collect();
    let mut candidates = Vec::with_capacity(remaining.len());
    let mut current = start;

    while !remaining.is_empty() {
        candidates.clear();
        candidates.extend_from_slice(&remaining);
        if let Some(rate) = dropout {
            thin_candidates(&mut candidates, rate, rng);
        }

        let next = choose(current, &candidates, rng);
        remaining.retain(|&v| v != next);
        nodes.push(next);
        current = next;
    }

    nodes.push(start);
    Tour::new(nodes)
}

#[inline]
fn visibility(graph: &CostMatrix, i: usize, j: usize, beta: f64) -> f64 {
    (1.0 / graph.cost(i, j)).powf(beta)
}

fn proportional_choice<R: Rng>(
    graph: &CostMatrix,
    pheromone: &PheromoneMatrix,
    current: usize,
    candidates: &[usize],
    params: &SamplerParams,
    rng: &mut R,
) -> usize {
    let weights: Vec<f64> = candidates
        .iter()
        .map(|&j| {
            let w = pheromone.get(current, j).powf(params.alpha)
                * visibility(graph, current, j, params.beta);
            if w.is_nan() {
                0.0
            } else {
                w
            }
        })
        .collect();
    let r: f64 = rng.random();

    // Overflowed weights dominate every finite one.
    let overflowed: Vec<usize> = candidates
        .iter()
        .zip(&weights)
        .filter(|(_, w)| w.is_infinite())
        .map(|(&j, _)| j)
        .collect();
    if !overflowed.is_empty() {
        return overflowed[rng.random_range(0..overflowed.len())];
    }

    // Every weight underflowed: no usable distribution.
    let largest = weights.iter().copied().fold(0.0, f64::max);
    if largest <= 0.0 {
        return candidates[rng.random_range(0..candidates.len())];
    }

    // Scaling by the largest weight keeps the total finite.
    let scaled: Vec<f64> = weights.iter().map(|w| w / largest).collect();
    let total: f64 = scaled.iter().sum();
    let probabilities: Vec<f64> = scaled.iter().map(|w| w / total).collect();
    candidates[roulette_select(&probabilities, r)]
}

fn greedy_choice(
    graph: &CostMatrix,
    pheromone: &PheromoneMatrix,
    current: usize,
    candidates: &[usize],
    beta: f64,
) -> usize {
    let mut best = candidates[0];
    let mut best_value = f64::NEG_INFINITY;
    for &j in candidates {
        let value = pheromone.get(current, j) * visibility(graph, current, j, beta);
        if value > best_value {
            best_value = value;
            best = j;
        }
    }
    best
}
