use tracing::debug;

use super::{Graph, SUBGRAPH_EDGE_LIMIT};
use crate::error::{QeError, Result};

/// Iterator over the subgraphs of a graph, see [subgraphs].
#[derive(Debug, Clone)]
pub struct Subgraphs {
    num_vertices: usize,
    edges: Vec<(usize, usize)>,
    min_edges: u32,
    max_edges: u32,
    next_mask: u64,
    end_mask: u64,
}

impl Iterator for Subgraphs {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        while self.next_mask < self.end_mask {
            let mask = self.next_mask;
            self.next_mask += 1;
            if !(self.min_edges..=self.max_edges).contains(&mask.count_ones()) {
                continue;
            }
            let mut subgraph = Graph::new(self.num_vertices);
            for (bit, &(i, j)) in self.edges.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    subgraph.add_edge(i, j);
                }
            }
            return Some(subgraph);
        }
        None
    }
}

/// Lazily enumerate all graphs made of a subset of the edges of `graph` with at least
/// `min_edges` and at most `max_edges` edges.
///
/// The subsets are visited in the order of their bit masks over [Graph::get_edges].
///
/// # Errors
/// [QeError::CapacityExceeded] if `graph` has 64 or more edges.
pub fn subgraphs(graph: &Graph, min_edges: usize, max_edges: usize) -> Result<Subgraphs> {
    let edges = graph.get_edges();
    if edges.len() >= SUBGRAPH_EDGE_LIMIT {
        // one mask bit per edge plus the bit of the end mask
        return Err(QeError::CapacityExceeded {
            required: edges.len() + 1,
            capacity: SUBGRAPH_EDGE_LIMIT,
        });
    }
    // a lower bound above the edge count leaves the range empty
    let clamp = |bound: usize, limit: usize| bound.min(limit) as u32;
    Ok(Subgraphs {
        num_vertices: graph.num_vertices(),
        min_edges: clamp(min_edges, edges.len() + 1),
        max_edges: clamp(max_edges, edges.len()),
        next_mask: 0,
        end_mask: 1 << edges.len(),
        edges,
    })
}

/// Collect all subgraphs of `graph` with between `min_edges` and `max_edges` edges, both
/// inclusive. Only existing edges are removed, no edges are added.
///
/// # Examples
/// ```
/// # fn main() -> Result<(), qe::QeError> { #![cfg_attr(coverage_nightly, coverage(off))]
/// # use qe::{Graph, graph::generate_subgraphs};
/// let subgraphs = generate_subgraphs(&Graph::cycle(4), 3, 3)?;
/// assert_eq!(subgraphs.len(), 4);
/// assert!(subgraphs.iter().all(|g| g.edge_count() == 3));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// [QeError::CapacityExceeded] if `graph` has 64 or more edges.
pub fn generate_subgraphs(graph: &Graph, min_edges: usize, max_edges: usize) -> Result<Vec<Graph>> {
    let result: Vec<Graph> = subgraphs(graph, min_edges, max_edges)?.collect();
    debug!(
        edges = graph.edge_count(),
        min_edges,
        max_edges,
        count = result.len(),
        "generated subgraphs"
    );
    Ok(result)
}

/// Subgraphs with at most `max_edges` edges.
pub fn generate_subgraphs_up_to(graph: &Graph, max_edges: usize) -> Result<Vec<Graph>> {
    generate_subgraphs(graph, 0, max_edges)
}

/// All 2^E subgraphs.
pub fn generate_all_subgraphs(graph: &Graph) -> Result<Vec<Graph>> {
    generate_subgraphs(graph, 0, usize::MAX)
}
