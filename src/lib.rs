//! GF(2) algebra for stabilizer and graph states.
//!
//! [Binary] and [BinaryPhase] are the scalars, [Pauli] is an n-qubit Pauli operator
//! with a lossless string form, and [Graph] is a simple graph stored as its adjacency
//! matrix over GF(2), with local complementation, vertex permutations, compression into a
//! single `u64`, connected components and subgraph enumeration.
//!
//! ```
//! # fn main() -> Result<(), qe::QeError> { #![cfg_attr(coverage_nightly, coverage(off))]
//! use qe::{Graph, Pauli};
//!
//! let pauli: Pauli = "iXYYZ".parse()?;
//! assert_eq!(pauli.to_string(), "iXYYZ");
//!
//! let graph = Graph::add(&Graph::star(4, 0), &Graph::linear(4))?;
//! assert_eq!(graph.get_edges(), [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod binary;
pub mod error;
pub mod graph;
pub mod pauli;

pub use binary::{Binary, BinaryPhase};
pub use error::{QeError, Result};
pub use graph::Graph;
pub use pauli::Pauli;
