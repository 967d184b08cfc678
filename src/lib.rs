//! Topological manifold checks for indexed polygon meshes.
//!
//! Given faces as a row-per-face matrix of vertex indices, this crate classifies
//! - every **vertex** as manifold when the edges opposite it in its incident faces chain
//!   into a single loop, and
//! - every **(face, edge slot)** as manifold when at most two faces share that edge.
//!
//! Non-manifold geometry is detected and reported, never repaired.
//!
//! ```
//! use meshcheck::{analyze_manifold, index_types::faces_from_rows};
//!
//! let tetrahedron = faces_from_rows(&[[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]]);
//! assert!(analyze_manifold(&tetrahedron).unwrap().is_manifold());
//! ```
//!
//! # Features
//! #### Optional
//! - **parallel**: use rayon for the per-vertex and per-face classification passes

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

pub mod errors;
pub mod index_types;
pub mod topology;

pub use errors::{ChainError, ManifoldError};
pub use index_types::{Faces, faces_from_rows};
pub use topology::{
    EdgeFaceMap, EdgeLoop, ManifoldOps, ManifoldReport, SerialManifoldOps, analyze_manifold,
    chain_edges, compute_edge_face_adjacency, is_edge_manifold, is_vertex_manifold,
};

#[cfg(feature = "parallel")]
pub use topology::ParallelManifoldOps;
