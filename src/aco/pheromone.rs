//! Pheromone matrix and its update primitives.
//!
//! Each strategy composes these primitives; none of them can drive a cell
//! to zero or below when started from a strictly positive matrix with
//! rates in `[0, 1]` and positive deposits.

/// Symmetric NxN table of edge desirability.
///
/// Owned by the optimization loop and lent to the sampler (read-only,
/// except for ACS local updates) and to the strategy's update phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    levels: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n`x`n` matrix with every cell set to `level`.
    pub fn new(n: usize, level: f64) -> Self {
        Self {
            n,
            levels: vec![level; n * n],
        }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    /// Pheromone on the directed cell `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.levels[i * self.n + j]
    }

    #[inline]
    fn cell_mut(&mut self, i: usize, j: usize) -> &mut f64 {
        &mut self.levels[i * self.n + j]
    }

    fn set_both(&mut self, i: usize, j: usize, level: f64) {
        *self.cell_mut(i, j) = level;
        *self.cell_mut(j, i) = level;
    }

    /// Resets every cell to `level`.
    pub fn fill(&mut self, level: f64) {
        self.levels.fill(level);
    }

    /// Returns `true` if `P[i][j] == P[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| ((i + 1)..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Smallest cell value.
    pub fn min_level(&self) -> f64 {
        self.levels.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest cell value.
    pub fn max_level(&self) -> f64 {
        self.levels.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.levels.chunks(self.n).map(<[f64]>::to_vec).collect()
    }

    /// Evaporate-and-deposit on edge `(i, j)`:
    /// `P = (1 - rho) * P + amount`, applied to each direction.
    pub fn reinforce(&mut self, i: usize, j: usize, rho: f64, amount: f64) {
        let forward = self.cell_mut(i, j);
        *forward = (1.0 - rho) * *forward + amount;
        let reverse = self.cell_mut(j, i);
        *reverse = (1.0 - rho) * *reverse + amount;
    }

    /// ACS local update on a just-traversed edge:
    /// `P = (1 - eps) * P + eps * t0`, applied to each direction.
    pub fn relax_toward(&mut self, i: usize, j: usize, eps: f64, t0: f64) {
        let forward = self.cell_mut(i, j);
        *forward = (1.0 - eps) * *forward + eps * t0;
        let reverse = self.cell_mut(j, i);
        *reverse = (1.0 - eps) * *reverse + eps * t0;
    }

    /// ACS global update on edge `(i, j)`:
    /// `P[i][j] = (1 - rho) * P[i][j] + rho * tau`.
    ///
    /// With `symmetric == false` the reverse cell is recomputed from the
    /// already-updated forward cell, `P[j][i] = (1 - rho) * P[i][j] + rho * tau`,
    /// so the two directions drift apart. With `symmetric == true` the
    /// reverse cell takes the forward value.
    pub fn deposit_global(&mut self, i: usize, j: usize, rho: f64, tau: f64, symmetric: bool) {
        let forward = (1.0 - rho) * self.get(i, j) + rho * tau;
        *self.cell_mut(i, j) = forward;
        let reverse = if symmetric {
            forward
        } else {
            (1.0 - rho) * forward + rho * tau
        };
        *self.cell_mut(j, i) = reverse;
    }

    /// MMAS evaporation on edge `(i, j)`: `P *= 1 - rho`. If the forward
    /// cell leaves `[tmin, tmax]` both cells are set to the violated bound.
    pub fn evaporate_bounded(&mut self, i: usize, j: usize, rho: f64, tmin: f64, tmax: f64) {
        let forward = (1.0 - rho) * self.get(i, j);
        if forward < tmin {
            self.set_both(i, j, tmin);
        } else if forward > tmax {
            self.set_both(i, j, tmax);
        } else {
            *self.cell_mut(i, j) = forward;
            let reverse = self.cell_mut(j, i);
            *reverse *= 1.0 - rho;
        }
    }

    /// MMAS deposit on edge `(i, j)`: `P += amount`. If the forward cell
    /// exceeds `tmax` both cells are set to `tmax`.
    pub fn deposit_bounded(&mut self, i: usize, j: usize, amount: f64, tmax: f64) {
        let forward = self.get(i, j) + amount;
        if forward > tmax {
            self.set_both(i, j, tmax);
        } else {
            *self.cell_mut(i, j) = forward;
            *self.cell_mut(j, i) += amount;
        }
    }

    /// Clamps every cell into `[tmin, tmax]`.
    pub fn clamp_all(&mut self, tmin: f64, tmax: f64) {
        for level in &mut self.levels {
            *level = level.clamp(tmin, tmax);
        }
    }
}
