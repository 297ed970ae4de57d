//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! Searches for low-cost Hamiltonian cycles over a complete weighted graph
//! with five pheromone update strategies:
//!
//! - **Ant System (AS)**: all ants reinforce their own tours.
//! - **Elitist AS (EAS)**: AS with extra reinforcement of the best-so-far tour.
//! - **Rank-Based AS (RBAS)**: rank-weighted deposits from the best ants.
//! - **Ant Colony System (ACS)**: greedy/proportional construction with
//!   local pheromone updates.
//! - **MAX-MIN AS (MMAS)**: bounded pheromone with stagnation resets.
//!
//! # Architecture
//!
//! - [`graph`]: the immutable cost matrix, tours, and matrix producers.
//! - [`aco`]: sampler, pheromone matrix, colony, strategies and runner.
//! - [`error`]: validation errors, all reported before a run starts.
//!
//! The engine is single-threaded and deterministic for a fixed seed.
//! Progress is reported through `tracing` events; install a subscriber to
//! see them.

pub mod aco;
pub mod error;
pub mod graph;
pub mod random;

pub use error::AcoError;
