use bitvec::vec::BitVec;
use tracing::debug;

use super::Graph;

impl Graph {
    /// Split the vertices into connected components.
    ///
    /// Components are found by a depth-first search started at the lowest vertex not yet
    /// visited; inside a component the vertices appear in the order they are discovered.
    /// With `sort_by_size`, the components are stably sorted from smallest to largest.
    ///
    /// # Examples
    /// ```
    /// # fn main() { #![cfg_attr(coverage_nightly, coverage(off))]
    /// # use qe::Graph;
    /// let mut graph = Graph::new(6);
    /// graph.add_path(&[1, 2, 4, 3, 2, 4, 1]);
    /// assert_eq!(graph.connected_components(false), [vec![0], vec![1, 2, 4, 3], vec![5]]);
    /// assert_eq!(graph.connected_components(true), [vec![0], vec![5], vec![1, 2, 4, 3]]);
    /// # }
    /// ```
    pub fn connected_components(&self, sort_by_size: bool) -> Vec<Vec<usize>> {
        let num_vertices = self.num_vertices();
        let mut visited: BitVec = BitVec::repeat(false, num_vertices);
        let mut components = Vec::new();
        let mut stack = Vec::new();

        for start in 0..num_vertices {
            if visited[start] {
                continue;
            }
            visited.set(start, true);
            let mut component = vec![start];
            stack.push(start);
            while let Some(vertex) = stack.pop() {
                for neighbor in self.neighbors(vertex) {
                    if !visited[neighbor] {
                        visited.set(neighbor, true);
                        component.push(neighbor);
                        stack.push(neighbor);
                    }
                }
            }
            components.push(component);
        }

        if sort_by_size {
            components.sort_by_key(Vec::len);
        }
        debug!(num_vertices, count = components.len(), "connected components");
        components
    }
}
