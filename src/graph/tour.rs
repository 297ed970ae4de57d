//! Closed tours and undirected edge membership.

/// A closed Hamiltonian cycle: `N + 1` node indices where the last entry
/// repeats the first.
///
/// Tours produced by the colony always satisfy
/// [`is_hamiltonian`](Tour::is_hamiltonian); tours built by hand through
/// [`Tour::new`] are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps a node sequence without validation.
    pub fn new(nodes: Vec<usize>) -> Self {
        Tour(nodes)
    }

    /// The node sequence, including the closing return to the start.
    pub fn nodes(&self) -> &[usize] {
        &self.0
    }

    /// Number of entries (N + 1 for a complete tour).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The starting (and ending) node.
    pub fn start(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Directed edges `(tour[k], tour[k + 1])` in traversal order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if this is a closed cycle visiting each of the
    /// `n` nodes exactly once.
    pub fn is_hamiltonian(&self, n: usize) -> bool {
        if n == 0 || self.0.len() != n + 1 || self.0[0] != self.0[n] {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.0[..n] {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Collects the undirected edges of this tour over an `n`-node graph.
    pub fn edge_set(&self, n: usize) -> EdgeSet {
        let mut set = EdgeSet::new(n);
        for (i, j) in self.edges() {
            set.insert(i, j);
        }
        set
    }
}

impl From<Vec<usize>> for Tour {
    fn from(nodes: Vec<usize>) -> Self {
        Tour(nodes)
    }
}

/// Undirected edge membership over an `n`-node graph.
///
/// `(i, j)` and `(j, i)` are the same edge.
#[derive(Debug, Clone)]
pub struct EdgeSet {
    n: usize,
    flags: Vec<bool>,
}

impl EdgeSet {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            flags: vec![false; n * n],
        }
    }

    pub fn insert(&mut self, i: usize, j: usize) {
        self.flags[i * self.n + j] = true;
        self.flags[j * self.n + i] = true;
    }

    /// Returns `true` if the edge is present in either direction.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.flags[i * self.n + j]
    }
}
