use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tracing::{debug, trace};

use super::matrix::AdjacencyMatrix;
use super::COMPRESSION_CAPACITY;
use crate::binary::Binary;
use crate::error::{check_index, check_size, QeError, Result};

/// Number of vertex pairs (i, j) with i < j, i.e., the bits in a compressed graph code.
///
/// Saturates at `usize::MAX` when the pair count does not fit into a `usize`.
pub const fn triangle_size(num_vertices: usize) -> usize {
    match num_vertices.checked_mul(num_vertices.saturating_sub(1)) {
        Some(pairs) => pairs / 2,
        None => usize::MAX,
    }
}

fn check_compressible(num_vertices: usize) -> Result<()> {
    let required = triangle_size(num_vertices);
    if required > COMPRESSION_CAPACITY {
        return Err(QeError::CapacityExceeded {
            required,
            capacity: COMPRESSION_CAPACITY,
        });
    }
    Ok(())
}

/// Pairs (i, j), i < j, in row-major order of the upper triangle.
fn upper_triangle(num_vertices: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..num_vertices).flat_map(move |i| (i + 1..num_vertices).map(move |j| (i, j)))
}

/// An undirected simple graph on the vertices 0..n, stored as its adjacency matrix over
/// GF(2).
///
/// The matrix is kept symmetric with a zero diagonal by every operation; the number of
/// vertices is fixed on construction.
///
/// # Examples
/// ```
/// # fn main() -> Result<(), qe::QeError> { #![cfg_attr(coverage_nightly, coverage(off))]
/// # use qe::Graph;
/// let mut graph = Graph::star(4, 0);
/// graph.local_complementation(0);
/// assert_eq!(graph, Graph::fully_connected(4));
/// assert_eq!(Graph::decompress(4, Graph::compress(&graph)?)?, graph);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph {
    adjacency_matrix: AdjacencyMatrix,
}

impl Graph {
    /// Create the empty graph on `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Graph {
            adjacency_matrix: AdjacencyMatrix::new(num_vertices),
        }
    }

    /// Create a graph from a list of edges. Self edges are ignored.
    ///
    /// # Panics
    /// If an edge refers to a vertex `>= num_vertices`.
    pub fn with_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(num_vertices);
        for &(vertex1, vertex2) in edges {
            graph.add_edge(vertex1, vertex2);
        }
        graph
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency_matrix.dim()
    }

    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.adjacency_matrix
    }

    pub fn has_edge(&self, vertex1: usize, vertex2: usize) -> bool {
        self.adjacency_matrix.get(vertex1, vertex2).is_one()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency_matrix.count_ones() / 2
    }

    /// All edges (i, j) with i < j, sorted lexicographically.
    pub fn get_edges(&self) -> Vec<(usize, usize)> {
        upper_triangle(self.num_vertices())
            .filter(|&(i, j)| self.has_edge(i, j))
            .collect()
    }

    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency_matrix.row(vertex).iter_ones()
    }

    fn set_edge(&mut self, vertex1: usize, vertex2: usize, value: Binary) {
        self.adjacency_matrix.set(vertex1, vertex2, value);
        self.adjacency_matrix.set(vertex2, vertex1, value);
    }

    /// Add the edge between two vertices; a self edge is ignored.
    pub fn add_edge(&mut self, vertex1: usize, vertex2: usize) {
        check_index(vertex1, self.num_vertices());
        check_index(vertex2, self.num_vertices());
        if vertex1 == vertex2 {
            return;
        }
        self.set_edge(vertex1, vertex2, Binary::ONE);
    }

    /// Add the edges between consecutive vertices of `vertices`.
    pub fn add_path(&mut self, vertices: &[usize]) {
        for pair in vertices.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
    }

    pub fn remove_edge(&mut self, vertex1: usize, vertex2: usize) {
        self.set_edge(vertex1, vertex2, Binary::ZERO);
    }

    /// Remove every edge incident to `vertex`.
    pub fn remove_edges_to(&mut self, vertex: usize) {
        check_index(vertex, self.num_vertices());
        for other in 0..self.num_vertices() {
            self.remove_edge(other, vertex);
        }
    }

    /// Flip the edge between two vertices; a self edge is ignored.
    pub fn toggle_edge(&mut self, vertex1: usize, vertex2: usize) {
        check_index(vertex1, self.num_vertices());
        check_index(vertex2, self.num_vertices());
        if vertex1 == vertex2 {
            return;
        }
        self.adjacency_matrix.toggle(vertex1, vertex2);
        self.adjacency_matrix.toggle(vertex2, vertex1);
    }

    /// Remove all edges.
    pub fn clear(&mut self) {
        self.adjacency_matrix.fill(Binary::ZERO);
    }

    /// Toggle the edges between all pairs of neighbors of `vertex`.
    ///
    /// This is the adjacency update A + a a^T over GF(2), with `a` the column of
    /// `vertex`, followed by clearing the diagonal. Applying it twice at the same vertex
    /// gives back the original graph.
    pub fn local_complementation(&mut self, vertex: usize) {
        trace!(vertex, "local complementation");
        let neighbors: Vec<usize> = self.neighbors(vertex).collect();
        for (k, &i) in neighbors.iter().enumerate() {
            for &j in &neighbors[k + 1..] {
                self.toggle_edge(i, j);
            }
        }
        self.adjacency_matrix.clear_diagonal();
    }

    /// Local complementations at `vertices`, in order.
    pub fn local_complementation_sequence(&mut self, vertices: &[usize]) {
        for &vertex in vertices {
            self.local_complementation(vertex);
        }
    }

    /// Exchange the labels of two vertices.
    pub fn swap(&mut self, vertex1: usize, vertex2: usize) {
        trace!(vertex1, vertex2, "swap vertices");
        self.adjacency_matrix.swap_cols(vertex1, vertex2);
        self.adjacency_matrix.swap_rows(vertex1, vertex2);
    }

    /// Relabel vertex `i` as `mapping[i]`.
    ///
    /// `mapping` has to be a permutation of 0..n; this is not checked. If it is not, edges
    /// whose endpoints collapse onto one vertex are dropped and the rest is merged, so
    /// the result is still a simple graph.
    ///
    /// # Errors
    /// [QeError::SizeMismatch] if `mapping` does not have one entry per vertex and
    /// [QeError::IndexOutOfRange] if it contains an entry `>= n`.
    pub fn graph_isomorphism(&self, mapping: &[usize]) -> Result<Graph> {
        let num_vertices = self.num_vertices();
        check_size(num_vertices, mapping.len())?;
        if let Some(&index) = mapping.iter().find(|&&target| target >= num_vertices) {
            return Err(QeError::IndexOutOfRange {
                index,
                len: num_vertices,
            });
        }
        let mut result = Graph::new(num_vertices);
        for (i, j) in self.get_edges() {
            result.add_edge(mapping[i], mapping[j]);
        }
        Ok(result)
    }

    fn transform<F>(&mut self, other: &Graph, op: F) -> Result<()>
    where
        F: Fn(Binary, Binary) -> Binary,
    {
        self.adjacency_matrix.zip_with(&other.adjacency_matrix, op)
    }

    fn transformed<F>(graph1: &Graph, graph2: &Graph, op: F) -> Result<Graph>
    where
        F: Fn(Binary, Binary) -> Binary,
    {
        let mut result = graph1.clone();
        result.transform(graph2, op)?;
        Ok(result)
    }

    /// Graph with the edges of both graphs.
    pub fn add(graph1: &Graph, graph2: &Graph) -> Result<Graph> {
        Self::transformed(graph1, graph2, |a, b| a | b)
    }

    /// Graph with the edges common to both graphs.
    pub fn intersect(graph1: &Graph, graph2: &Graph) -> Result<Graph> {
        Self::transformed(graph1, graph2, |a, b| a & b)
    }

    /// Graph with the edges of `graph1` that are not in `graph2`.
    pub fn subtract(graph1: &Graph, graph2: &Graph) -> Result<Graph> {
        Self::transformed(graph1, graph2, |a, b| a * !b)
    }

    /// Add the edges of `other` to this graph.
    pub fn union_with(&mut self, other: &Graph) -> Result<()> {
        self.transform(other, |a, b| a | b)
    }

    /// Keep only the edges that also occur in `other`.
    pub fn intersect_with(&mut self, other: &Graph) -> Result<()> {
        self.transform(other, |a, b| a & b)
    }

    /// Remove all edges that occur in `other`.
    pub fn subtract_with(&mut self, other: &Graph) -> Result<()> {
        self.transform(other, |a, b| a * !b)
    }

    /// Pack the upper triangle into a single integer: bit k is set iff the k-th pair
    /// (i, j), i < j, in row-major order is an edge.
    ///
    /// # Errors
    /// [QeError::CapacityExceeded] if n(n-1)/2 > 64.
    pub fn compress(graph: &Graph) -> Result<u64> {
        check_compressible(graph.num_vertices())?;
        let code = upper_triangle(graph.num_vertices())
            .enumerate()
            .filter(|&(_, (i, j))| graph.has_edge(i, j))
            .fold(0u64, |code, (index, _)| code | (1 << index));
        debug!(num_vertices = graph.num_vertices(), code, "compressed graph");
        Ok(code)
    }

    /// Restore a graph from the code produced by [Graph::compress]. Bits beyond the
    /// n(n-1)/2 pairs are ignored.
    ///
    /// # Errors
    /// [QeError::CapacityExceeded] if n(n-1)/2 > 64.
    pub fn decompress(num_vertices: usize, code: u64) -> Result<Graph> {
        check_compressible(num_vertices)?;
        let mut graph = Graph::new(num_vertices);
        for (index, (i, j)) in upper_triangle(num_vertices).enumerate() {
            if code & (1 << index) != 0 {
                graph.add_edge(i, j);
            }
        }
        Ok(graph)
    }

    /// The complete graph.
    pub fn fully_connected(num_vertices: usize) -> Graph {
        let mut graph = Graph::new(num_vertices);
        graph.adjacency_matrix.fill(Binary::ONE);
        graph.adjacency_matrix.clear_diagonal();
        graph
    }

    /// Edges from `center` to every other vertex.
    ///
    /// # Panics
    /// If `center >= num_vertices`.
    pub fn star(num_vertices: usize, center: usize) -> Graph {
        check_index(center, num_vertices);
        let mut graph = Graph::new(num_vertices);
        for vertex in 0..num_vertices {
            graph.toggle_edge(center, vertex);
        }
        graph
    }

    /// The path 0 - 1 - ... - (n-1).
    pub fn linear(num_vertices: usize) -> Graph {
        let mut graph = Graph::new(num_vertices);
        for vertex in 1..num_vertices {
            graph.add_edge(vertex - 1, vertex);
        }
        graph
    }

    /// The path 0 - 1 - ... - (n-1) closed by the edge (n-1) - 0.
    pub fn cycle(num_vertices: usize) -> Graph {
        let mut graph = Graph::linear(num_vertices);
        if num_vertices > 0 {
            graph.add_edge(0, num_vertices - 1);
        }
        graph
    }

    /// Vertex 0 joined to 1, 2 and 3, and vertex 3 joined to every vertex from 4 on.
    ///
    /// ```text
    ///        1   4
    ///        |  /
    ///    2 - 0 - 3 - 5
    ///             \
    ///              6
    /// ```
    ///
    /// # Errors
    /// [QeError::TooFewVertices] for fewer than 5 vertices.
    pub fn pusteblume(num_vertices: usize) -> Result<Graph> {
        if num_vertices < 5 {
            return Err(QeError::TooFewVertices {
                required: 5,
                found: num_vertices,
            });
        }
        let mut graph = Graph::new(num_vertices);
        for vertex in 1..4 {
            graph.add_edge(0, vertex);
        }
        for vertex in 4..num_vertices {
            graph.add_edge(3, vertex);
        }
        Ok(graph)
    }

    /// Whether the adjacency matrix is symmetric with a zero diagonal.
    pub fn is_valid(&self) -> bool {
        self.adjacency_matrix.is_symmetric() && self.adjacency_matrix.has_zero_diagonal()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.adjacency_matrix, f)
    }
}
