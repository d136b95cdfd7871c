// src/dag/mod.rs

//! Precedence graph and its linear extensions.
//!
//! - [`graph`] builds and validates the graph, and computes the transitive
//!   reduction.
//! - [`extensions`] enumerates topological orders lazily.
//! - [`relabel`] renames nodes under a permutation so truncated enumeration
//!   sees a different slice of the extension space.

pub mod extensions;
pub mod graph;
pub mod relabel;

pub use extensions::LinearExtensions;
pub use graph::PrecedenceGraph;
pub use relabel::Relabeling;
