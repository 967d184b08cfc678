//! Trait for the manifold analyses, implemented serially and in parallel

use super::ManifoldReport;
use crate::errors::ManifoldError;
use crate::index_types::Faces;
use nalgebra::DMatrix;

/// Vertex and edge manifold classification over a face matrix
pub trait ManifoldOps {
    /// One flag per vertex (`max index + 1` entries), `true` where the vertex is manifold.
    ///
    /// Only triangles and quads are supported. Vertices no face touches are manifold.
    fn is_vertex_manifold(&self, faces: &Faces) -> Result<Vec<bool>, ManifoldError>;

    /// One flag per (face, edge slot), `true` where at most two faces share that edge.
    ///
    /// Slot `j` of a face is the edge from corner `j` to corner `(j + 1) % arity`.
    fn is_edge_manifold(&self, faces: &Faces) -> Result<DMatrix<bool>, ManifoldError>;

    /// Run both analyses.
    fn analyze(&self, faces: &Faces) -> Result<ManifoldReport, ManifoldError> {
        Ok(ManifoldReport {
            vertex_manifold: self.is_vertex_manifold(faces)?,
            edge_manifold: self.is_edge_manifold(faces)?,
        })
    }
}
