//! Disjoint-set forest over vertex ids, used to count connected components.
//!
//! The cycle-space dimension of an undirected graph is `E - V + C`, where `C`
//! is the number of connected components. [`UnionFind`] computes `C` in one
//! pass over the edge list without any traversal state.
//!
//! `find` uses iterative path-halving and `union` uses union-by-rank with the
//! lower vertex id winning ties, so the representative of a component is
//! deterministic for a given edge order.

/// A union-find structure over the vertex ids `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Creates `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
            sets: n,
        }
    }

    /// Returns the representative vertex of the component containing `v`.
    ///
    /// `v` must be below the size given to [`UnionFind::new`].
    pub fn find(&mut self, mut v: usize) -> usize {
        while self.parent[v] != v {
            let grandparent = self.parent[self.parent[v]];
            self.parent[v] = grandparent;
            v = grandparent;
        }
        v
    }

    /// Joins the components of `a` and `b`. A no-op when they already share
    /// a root.
    pub fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.parent[child] = root;
                self.rank[root] = self.rank[root].saturating_add(1);
            }
        }
        self.sets -= 1;
    }

    /// Returns the current number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of vertices tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no vertices are tracked.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
