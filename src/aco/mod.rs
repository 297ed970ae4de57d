//! Ant Colony Optimization for the symmetric TSP.
//!
//! A population of ants repeatedly constructs closed tours, biased by a
//! shared pheromone matrix and the inverse-cost heuristic. After every
//! iteration the active strategy writes feedback into the matrix.
//!
//! # Strategies
//!
//! - [`AntSystem`]: every ant evaporates and deposits on its own tour.
//! - [`ElitistAntSystem`]: AS plus a bonus on best-so-far edges.
//! - [`RankBasedAntSystem`]: only the best-ranked ants deposit, weighted by rank.
//! - [`AntColonySystem`]: pseudo-random-proportional construction, local
//!   updates, global update from the best-so-far tour.
//! - [`MaxMinAntSystem`]: bounded pheromone with stagnation resets.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: run parameters and strategy presets
//! - [`AcoRunner`]: executes the optimization loop
//! - [`AcoResult`]: final ants, pheromone matrix and best tours
//! - [`PheromonePolicy`]: the interface shared by the strategies
//!
//! # References
//!
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*, MIT Press
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Stützle & Hoos (2000), "MAX-MIN Ant System"

mod config;
mod pheromone;
mod policy;
mod runner;
pub mod sampler;
mod types;

pub use config::{AcoConfig, Strategy};
pub use pheromone::PheromoneMatrix;
pub use policy::{
    AntColonySystem, AntSystem, ElitistAntSystem, MaxMinAntSystem, PheromonePolicy,
    RankBasedAntSystem,
};
pub use runner::{AcoResult, AcoRunner};
pub use types::{Ant, Colony};
