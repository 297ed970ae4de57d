//! Cost model for the symmetric Traveling Salesman Problem.
//!
//! A [`CostMatrix`] is the immutable input of every colony run: an NxN,
//! symmetric, non-negative table with a zero diagonal and strictly positive
//! off-diagonal entries. A [`Tour`] is a closed Hamiltonian cycle over the
//! node indices `0..N`.
//!
//! The engine does not care where the matrix comes from. Two producers are
//! bundled for convenience: a uniform random graph and Euclidean distances
//! over planar coordinates (see [`CostMatrix::random_uniform`],
//! [`CostMatrix::from_points`] and [`parse_city_table`]).

mod generate;
mod matrix;
mod tour;

pub use generate::parse_city_table;
pub use matrix::CostMatrix;
pub use tour::{EdgeSet, Tour};
