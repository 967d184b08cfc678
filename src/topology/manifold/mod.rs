//! Vertex and edge manifold classification.
//!
//! ## Vertex test
//! Every face hands each of its corners the face edges that do not touch that corner.
//! Collected over all incident faces, those "opposite edges" form the vertex's link.
//! The vertex is manifold when the link chains into exactly one loop, open (boundary
//! vertex) or closed (interior vertex). A link that splits into several loops, or that
//! branches, marks a pinch point such as the shared corner of two triangles touching
//! only at a vertex.
//!
//! ## Edge test
//! An edge slot is manifold when at most two faces contain the undirected edge.
//!
//! Both tests have a build phase (links / adjacency map) followed by an independent
//! classify phase per vertex or per face, so they are run serially or with rayon
//! through [`ManifoldOps`].

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use serial::SerialManifoldOps;
pub use traits::ManifoldOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelManifoldOps;

use crate::errors::ManifoldError;
use crate::index_types::{Edge, FaceIndex, Faces, VertexIndex, face_arity, num_vertices};
use crate::topology::edges::{EdgeFaceMap, chain_edges};
use nalgebra::DMatrix;

/// Result of running both analyses over one face matrix
#[derive(Debug, Clone, PartialEq)]
pub struct ManifoldReport {
    /// One flag per vertex, `true` if manifold
    pub vertex_manifold: Vec<bool>,
    /// One flag per (face, edge slot), `true` if manifold
    pub edge_manifold: DMatrix<bool>,
}

impl ManifoldReport {
    /// Vertices whose link is not a single loop, ascending.
    pub fn non_manifold_vertices(&self) -> Vec<VertexIndex> {
        self.vertex_manifold
            .iter()
            .enumerate()
            .filter(|&(_, &ok)| !ok)
            .map(|(v, _)| v)
            .collect()
    }

    /// `(face, slot)` pairs whose edge is shared by more than two faces, face-major.
    pub fn non_manifold_edges(&self) -> Vec<(FaceIndex, usize)> {
        let (num_faces, arity) = self.edge_manifold.shape();
        (0..num_faces)
            .flat_map(|i| (0..arity).map(move |j| (i, j)))
            .filter(|&slot| !self.edge_manifold[slot])
            .collect()
    }

    /// `true` if every vertex and every edge slot is manifold.
    pub fn is_manifold(&self) -> bool {
        self.vertex_manifold.iter().all(|&ok| ok) && self.edge_manifold.iter().all(|&ok| ok)
    }
}

#[cfg(not(feature = "parallel"))]
const fn default_ops() -> SerialManifoldOps {
    SerialManifoldOps::new()
}

#[cfg(feature = "parallel")]
const fn default_ops() -> ParallelManifoldOps {
    ParallelManifoldOps::new()
}

/// Per-vertex manifold flags for a triangle or quad mesh.
///
/// ```
/// use meshcheck::{index_types::faces_from_rows, is_vertex_manifold};
/// // two triangles touching only at vertex 0
/// let faces = faces_from_rows(&[[0, 1, 2], [0, 3, 4]]);
/// assert_eq!(is_vertex_manifold(&faces).unwrap(), vec![false, true, true, true, true]);
/// ```
///
/// # Errors
/// [`ManifoldError::UnsupportedArity`] unless the faces have 3 or 4 vertices.
pub fn is_vertex_manifold(faces: &Faces) -> Result<Vec<bool>, ManifoldError> {
    default_ops().is_vertex_manifold(faces)
}

/// Per-(face, edge slot) manifold flags, shaped `num_faces × arity`.
///
/// # Errors
/// [`ManifoldError::UnsupportedArity`] if the faces have fewer than 3 vertices.
pub fn is_edge_manifold(faces: &Faces) -> Result<DMatrix<bool>, ManifoldError> {
    default_ops().is_edge_manifold(faces)
}

/// Both analyses at once.
///
/// # Errors
/// [`ManifoldError::UnsupportedArity`] unless the faces have 3 or 4 vertices.
pub fn analyze_manifold(faces: &Faces) -> Result<ManifoldReport, ManifoldError> {
    default_ops().analyze(faces)
}

/// Build the opposite-edge bucket (link) of every vertex.
///
/// Quads hand each corner the two edges of the triangle left after removing it:
/// `a ← (b,c),(c,d)`, `b ← (c,d),(d,a)`, `c ← (d,a),(a,b)`, `d ← (a,b),(b,c)`.
/// This assignment decides classification at shared quad corners and must not change.
pub(crate) fn opposite_edges(faces: &Faces) -> Result<Vec<Vec<Edge>>, ManifoldError> {
    let num_faces = faces.nrows();
    if num_faces == 0 {
        return Ok(Vec::new());
    }

    let mut links: Vec<Vec<Edge>> = vec![Vec::new(); num_vertices(faces)];
    match face_arity(faces) {
        3 => {
            for i in 0..num_faces {
                let [a, b, c] = [faces[(i, 0)], faces[(i, 1)], faces[(i, 2)]];
                links[a].push([b, c]);
                links[b].push([c, a]);
                links[c].push([a, b]);
            }
        },
        4 => {
            for i in 0..num_faces {
                let [a, b, c, d] = [faces[(i, 0)], faces[(i, 1)], faces[(i, 2)], faces[(i, 3)]];
                links[a].extend([[b, c], [c, d]]);
                links[b].extend([[c, d], [d, a]]);
                links[c].extend([[d, a], [a, b]]);
                links[d].extend([[a, b], [b, c]]);
            }
        },
        arity => return Err(ManifoldError::UnsupportedArity(arity)),
    }

    Ok(links)
}

/// Classify one vertex from its link. An empty link (isolated vertex) is manifold.
pub(crate) fn is_link_manifold(vertex: VertexIndex, link: &[Edge]) -> bool {
    if link.is_empty() {
        return true;
    }

    match chain_edges(link) {
        Ok(loops) if loops.len() == 1 => true,
        Ok(loops) => {
            tracing::debug!(vertex, loops = loops.len(), "non-manifold vertex: link splits");
            false
        },
        Err(err) => {
            tracing::debug!(vertex, %err, "non-manifold vertex: link does not chain");
            false
        },
    }
}

/// Classify edge slot `j` of face `i`.
///
/// # Panics
/// If the slot's edge is missing from `edge_map`, which means the map was built from
/// different faces.
pub(crate) fn is_slot_manifold(edge_map: &EdgeFaceMap, faces: &Faces, i: FaceIndex, j: usize) -> bool {
    let arity = faces.ncols();
    let (a, b) = (faces[(i, j)], faces[(i, (j + 1) % arity)]);
    let Some(incident) = edge_map.faces_of(a, b) else {
        panic!("edge ({a}, {b}) of face {i} slot {j} is missing from its edge-face adjacency");
    };

    if incident.len() > 2 {
        tracing::debug!(face = i, slot = j, a, b, shared_by = incident.len(), "non-manifold edge");
        false
    } else {
        true
    }
}
