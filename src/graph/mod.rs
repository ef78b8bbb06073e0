
pub mod graph;
pub mod matrix;
mod components;
mod subgraphs;

pub use graph::{triangle_size, Graph};
pub use matrix::AdjacencyMatrix;
pub use subgraphs::{
    generate_all_subgraphs, generate_subgraphs, generate_subgraphs_up_to, subgraphs, Subgraphs,
};

/// Bits available in a compressed graph code.
pub const COMPRESSION_CAPACITY: usize = u64::BITS as usize;

/// Subgraph enumeration indexes edge subsets with a `u64` mask, so graphs need fewer
/// edges than this.
pub const SUBGRAPH_EDGE_LIMIT: usize = u64::BITS as usize;
