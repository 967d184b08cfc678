//! Parallel implementation of `ManifoldOps`.
//!
//! The bucket list and adjacency map are built serially; classification then runs one
//! rayon task per vertex or per face, each writing only its own output slots.

use super::traits::ManifoldOps;
use super::{is_link_manifold, is_slot_manifold, opposite_edges};
use crate::errors::ManifoldError;
use crate::index_types::Faces;
use crate::topology::edges::compute_edge_face_adjacency;
use nalgebra::DMatrix;
use rayon::prelude::*;

#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelManifoldOps;

impl ParallelManifoldOps {
    pub const fn new() -> Self {
        Self
    }
}

impl ManifoldOps for ParallelManifoldOps {
    fn is_vertex_manifold(&self, faces: &Faces) -> Result<Vec<bool>, ManifoldError> {
        let links = opposite_edges(faces)?;
        tracing::trace!(faces = faces.nrows(), vertices = links.len(), "vertex manifold check");

        Ok(links
            .par_iter()
            .enumerate()
            .map(|(vertex, link)| is_link_manifold(vertex, link))
            .collect())
    }

    fn is_edge_manifold(&self, faces: &Faces) -> Result<DMatrix<bool>, ManifoldError> {
        let edge_map = compute_edge_face_adjacency(faces)?;
        tracing::trace!(faces = faces.nrows(), edges = edge_map.len(), "edge manifold check");

        let (num_faces, arity) = faces.shape();
        let flags: Vec<bool> = (0..num_faces)
            .into_par_iter()
            .flat_map_iter(|i| {
                let edge_map = &edge_map;
                (0..arity).map(move |j| is_slot_manifold(edge_map, faces, i, j))
            })
            .collect();

        Ok(DMatrix::from_row_slice(num_faces, arity, &flags))
    }
}
