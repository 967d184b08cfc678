//! Connectivity analyses over indexed faces

pub mod edges;
pub mod manifold;

pub use edges::{EdgeFaceMap, EdgeLoop, chain_edges, compute_edge_face_adjacency};
pub use manifold::{
    ManifoldOps, ManifoldReport, SerialManifoldOps, analyze_manifold, is_edge_manifold,
    is_vertex_manifold,
};

#[cfg(feature = "parallel")]
pub use manifold::ParallelManifoldOps;
