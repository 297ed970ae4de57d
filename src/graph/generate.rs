//! Cost-matrix producers: random graphs and Euclidean city tables.

use super::matrix::CostMatrix;
use crate::error::AcoError;
use rand::Rng;

impl CostMatrix {
    /// Generates a random symmetric graph with `n` nodes whose off-diagonal
    /// costs are drawn uniformly from `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidParameter`] if `n` is zero or the range is
    /// empty or includes non-positive costs.
    pub fn random_uniform<R: Rng>(
        n: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self, AcoError> {
        if n == 0 {
            return Err(AcoError::parameter("n", "graph needs at least one node"));
        }
        if !(low > 0.0 && low < high && high.is_finite()) {
            return Err(AcoError::parameter(
                "low..high",
                format!("cost range must satisfy 0 < low < high, got {low}..{high}"),
            ));
        }

        let mut rows = vec![vec![0.0; n]; n];
        for i in 1..n {
            for j in 0..i {
                let c = rng.random_range(low..high);
                rows[i][j] = c;
                rows[j][i] = c;
            }
        }
        Self::new(rows)
    }

    /// Builds a matrix of Euclidean distances between planar points.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidGraph`] if `points` is empty or two points
    /// coincide (a zero-cost edge).
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, AcoError> {
        let rows = points
            .iter()
            .map(|&(x1, y1)| {
                points
                    .iter()
                    .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Self::new(rows)
    }
}

/// Parses a whitespace-separated city table with one `index x y` record
/// per line. Blank lines are skipped; the index column is ignored and the
/// coordinates are returned in file order.
///
/// # Examples
///
/// ```
/// use u_aco::graph::{parse_city_table, CostMatrix};
///
/// let points = parse_city_table("1 0 0\n2 3 4\n3 0 4\n").unwrap();
/// let costs = CostMatrix::from_points(&points).unwrap();
/// assert_eq!(costs.cost(0, 1), 5.0);
/// ```
pub fn parse_city_table(text: &str) -> Result<Vec<(f64, f64)>, AcoError> {
    let mut points = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 3 {
            return Err(AcoError::Parse {
                line: idx + 1,
                reason: format!("expected `index x y`, found {} field(s)", fields.len()),
            });
        }
        let coord = |s: &str| {
            s.parse::<f64>().map_err(|e| AcoError::Parse {
                line: idx + 1,
                reason: format!("bad coordinate `{s}`: {e}"),
            })
        };
        points.push((coord(fields[1])?, coord(fields[2])?));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_uniform_range_and_shape() {
        let mut rng = create_rng(42);
        let costs = CostMatrix::random_uniform(12, 2.0, 4.0, &mut rng).unwrap();
        assert_eq!(costs.dim(), 12);
        for i in 0..12 {
            assert_eq!(costs.cost(i, i), 0.0);
            for j in 0..12 {
                if i != j {
                    let c = costs.cost(i, j);
                    assert!((2.0..4.0).contains(&c), "cost {c} out of range");
                    assert_eq!(c, costs.cost(j, i));
                }
            }
        }
    }

    #[test]
    fn test_random_uniform_rejects_bad_range() {
        let mut rng = create_rng(1);
        assert!(CostMatrix::random_uniform(5, 0.0, 1.0, &mut rng).is_err());
        assert!(CostMatrix::random_uniform(5, 3.0, 2.0, &mut rng).is_err());
        assert!(CostMatrix::random_uniform(0, 1.0, 2.0, &mut rng).is_err());
    }

    #[test]
    fn test_from_points_pythagorean() {
        let costs = CostMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 0.0)]).unwrap();
        assert_eq!(costs.cost(0, 1), 5.0);
        assert_eq!(costs.cost(1, 2), 5.0);
        assert_eq!(costs.cost(0, 2), 6.0);
    }

    #[test]
    fn test_from_points_rejects_duplicates() {
        let err = CostMatrix::from_points(&[(1.0, 1.0), (1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, AcoError::InvalidGraph { .. }));
    }

    #[test]
    fn test_parse_city_table() {
        let text = "1 0.5 1.5\n\n2 -3 4e1\n";
        let points = parse_city_table(text).unwrap();
        assert_eq!(points, vec![(0.5, 1.5), (-3.0, 40.0)]);
    }

    #[test]
    fn test_parse_city_table_errors() {
        let err = parse_city_table("1 0 0\n2 1\n").unwrap_err();
        assert_eq!(
            err,
            AcoError::Parse {
                line: 2,
                reason: "expected `index x y`, found 2 field(s)".into()
            }
        );
        assert!(matches!(
            parse_city_table("1 x 0"),
            Err(AcoError::Parse { line: 1, .. })
        ));
    }
}
