//! Validated, immutable cost matrix.

use super::tour::Tour;
use crate::error::AcoError;

/// Relative tolerance used when checking `c[i][j] == c[j][i]`.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Pairwise travel costs between node indices `0..N`.
///
/// Construction validates the matrix once; afterwards it is read-only.
/// Off-diagonal entries are strictly positive because the colony uses
/// `1 / cost` as its heuristic.
///
/// # Examples
///
/// ```
/// use u_aco::graph::{CostMatrix, Tour};
///
/// let costs = CostMatrix::new(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(costs.tour_cost(&Tour::from(vec![0, 1, 2, 0])), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct CostMatrix {
    n: usize,
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Validates `rows` and builds the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidGraph`] if the matrix is empty or not
    /// square, contains a negative or non-finite entry, has a non-zero
    /// diagonal, is not symmetric, or has a zero-cost edge between two
    /// distinct nodes.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AcoError> {
        let n = rows.len();
        if n == 0 {
            return Err(AcoError::graph("matrix is empty"));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(AcoError::graph(format!(
                "matrix is not square: row {i} has {} entries, expected {n}",
                row.len()
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            for (j, &c) in row.iter().enumerate() {
                if !c.is_finite() {
                    return Err(AcoError::graph(format!("cost[{i}][{j}] is not finite")));
                }
                if c < 0.0 {
                    return Err(AcoError::graph(format!("cost[{i}][{j}] = {c} is negative")));
                }
                if i == j {
                    if c != 0.0 {
                        return Err(AcoError::graph(format!(
                            "diagonal entry cost[{i}][{i}] = {c} must be zero"
                        )));
                    }
                } else if c == 0.0 {
                    return Err(AcoError::graph(format!(
                        "zero-cost edge ({i}, {j}) makes the inverse-cost heuristic undefined"
                    )));
                }
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (rows[i][j], rows[j][i]);
                if (a - b).abs() > SYMMETRY_TOLERANCE * a.abs().max(b.abs()).max(1.0) {
                    return Err(AcoError::graph(format!(
                        "matrix is not symmetric: cost[{i}][{j}] = {a}, cost[{j}][{i}] = {b}"
                    )));
                }
            }
        }

        Ok(Self {
            n,
            costs: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of nodes.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Cost of traveling from `i` to `j`.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.costs[i * self.n + j]
    }

    /// Total length of a closed tour: the sum of `cost(tour[k], tour[k + 1])`.
    ///
    /// The result is meaningless for tours that are not Hamiltonian
    /// cycles over this graph.
    pub fn tour_cost(&self, tour: &Tour) -> f64 {
        tour.edges().map(|(i, j)| self.cost(i, j)).sum()
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.costs.chunks(self.n).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = AcoError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}
