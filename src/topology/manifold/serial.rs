//! Serial implementation of `ManifoldOps`.

use super::traits::ManifoldOps;
use super::{is_link_manifold, is_slot_manifold, opposite_edges};
use crate::errors::ManifoldError;
use crate::index_types::Faces;
use crate::topology::edges::compute_edge_face_adjacency;
use nalgebra::DMatrix;

#[derive(Debug, Default, Clone, Copy)]
pub struct SerialManifoldOps;

impl SerialManifoldOps {
    pub const fn new() -> Self {
        Self
    }
}

impl ManifoldOps for SerialManifoldOps {
    fn is_vertex_manifold(&self, faces: &Faces) -> Result<Vec<bool>, ManifoldError> {
        let links = opposite_edges(faces)?;
        tracing::trace!(faces = faces.nrows(), vertices = links.len(), "vertex manifold check");

        Ok(links
            .iter()
            .enumerate()
            .map(|(vertex, link)| is_link_manifold(vertex, link))
            .collect())
    }

    fn is_edge_manifold(&self, faces: &Faces) -> Result<DMatrix<bool>, ManifoldError> {
        let edge_map = compute_edge_face_adjacency(faces)?;
        tracing::trace!(faces = faces.nrows(), edges = edge_map.len(), "edge manifold check");

        Ok(DMatrix::from_fn(faces.nrows(), faces.ncols(), |i, j| {
            is_slot_manifold(&edge_map, faces, i, j)
        }))
    }
}
