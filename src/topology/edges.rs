//! Edge-level connectivity: chaining loose edges into loops, and mapping
//! undirected edges to the faces that contain them.

use crate::errors::{ChainError, ManifoldError};
use crate::index_types::{Edge, FaceIndex, Faces, VertexIndex, face_arity};
use hashbrown::HashMap;

/// A maximal run of edges joined end to end through shared vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLoop {
    vertices: Vec<VertexIndex>,
    closed: bool,
}

impl EdgeLoop {
    /// Vertices in walk order. A closed loop does not repeat its first vertex.
    pub fn vertices(&self) -> &[VertexIndex] {
        &self.vertices
    }

    /// `true` if the walk returns to its starting vertex.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of edges walked.
    pub fn num_edges(&self) -> usize {
        if self.closed {
            self.vertices.len()
        } else {
            self.vertices.len() - 1
        }
    }
}

/// Group `edges` into maximal chains and cycles by shared endpoints.
///
/// Edge direction is ignored. Open chains come first, each starting from its lowest
/// dangling endpoint; closed loops follow, each starting at the first unused edge.
///
/// # Errors
/// [`ChainError::Branching`] if any vertex is touched by more than two edge ends.
/// A self-edge `[v, v]` touches `v` twice.
pub fn chain_edges(edges: &[Edge]) -> Result<Vec<EdgeLoop>, ChainError> {
    if edges.is_empty() {
        return Ok(Vec::new());
    }

    let mut incident: HashMap<VertexIndex, Vec<usize>> = HashMap::new();
    for (e, &[a, b]) in edges.iter().enumerate() {
        incident.entry(a).or_default().push(e);
        incident.entry(b).or_default().push(e);
    }

    // Sorted so errors and chain order do not depend on hash order
    let mut endpoints: Vec<VertexIndex> = incident.keys().copied().collect();
    endpoints.sort_unstable();

    for &v in &endpoints {
        let degree = incident[&v].len();
        if degree > 2 {
            return Err(ChainError::Branching { vertex: v, degree });
        }
    }

    let mut visited = vec![false; edges.len()];
    let mut loops = Vec::new();

    for &v in &endpoints {
        let around = &incident[&v];
        if around.len() == 1 && !visited[around[0]] {
            loops.push(walk(edges, &incident, &mut visited, v, around[0], false));
        }
    }

    // Everything left lies on a cycle
    for e in 0..edges.len() {
        if !visited[e] {
            loops.push(walk(edges, &incident, &mut visited, edges[e][0], e, true));
        }
    }

    Ok(loops)
}

fn walk(
    edges: &[Edge],
    incident: &HashMap<VertexIndex, Vec<usize>>,
    visited: &mut [bool],
    start: VertexIndex,
    first_edge: usize,
    closed: bool,
) -> EdgeLoop {
    let mut vertices = vec![start];
    let mut current = start;
    let mut edge = Some(first_edge);

    while let Some(e) = edge {
        visited[e] = true;
        let [a, b] = edges[e];
        let next = if a == current { b } else { a };
        if closed && next == start {
            break;
        }
        vertices.push(next);
        current = next;
        edge = incident[&next].iter().copied().find(|&n| !visited[n]);
    }

    EdgeLoop { vertices, closed }
}

/// Undirected edge key, smaller index first.
#[inline]
pub const fn canonical_edge(a: VertexIndex, b: VertexIndex) -> (VertexIndex, VertexIndex) {
    if a < b { (a, b) } else { (b, a) }
}

/// Undirected edge → incident faces.
#[derive(Debug, Clone, Default)]
pub struct EdgeFaceMap {
    edge_to_faces: HashMap<(VertexIndex, VertexIndex), Vec<FaceIndex>>,
}

impl EdgeFaceMap {
    /// Faces containing the undirected edge `{a, b}`.
    pub fn faces_of(&self, a: VertexIndex, b: VertexIndex) -> Option<&[FaceIndex]> {
        self.edge_to_faces.get(&canonical_edge(a, b)).map(Vec::as_slice)
    }

    /// Number of distinct undirected edges.
    pub fn len(&self) -> usize {
        self.edge_to_faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_to_faces.is_empty()
    }

    /// All `(edge, faces)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ((VertexIndex, VertexIndex), &[FaceIndex])> + '_ {
        self.edge_to_faces
            .iter()
            .map(|(&edge, faces)| (edge, faces.as_slice()))
    }

    /// Edges used by exactly one face, sorted.
    pub fn boundary_edges(&self) -> Vec<(VertexIndex, VertexIndex)> {
        self.edges_where(|count| count == 1)
    }

    /// Edges shared by more than two faces, sorted.
    pub fn non_manifold_edges(&self) -> Vec<(VertexIndex, VertexIndex)> {
        self.edges_where(|count| count > 2)
    }

    fn edges_where(&self, keep: impl Fn(usize) -> bool) -> Vec<(VertexIndex, VertexIndex)> {
        let mut edges: Vec<_> = self
            .edge_to_faces
            .iter()
            .filter(|(_, faces)| keep(faces.len()))
            .map(|(&edge, _)| edge)
            .collect();
        edges.sort_unstable();
        edges
    }
}

/// Build the undirected edge → faces map for `faces`.
///
/// Face `i` contributes the edge between corners `j` and `(j + 1) % arity` for every `j`.
///
/// # Errors
/// [`ManifoldError::UnsupportedArity`] if the faces have fewer than 3 vertices.
/// An empty face matrix yields an empty map regardless of its column count.
pub fn compute_edge_face_adjacency(faces: &Faces) -> Result<EdgeFaceMap, ManifoldError> {
    let num_faces = faces.nrows();
    let arity = face_arity(faces);
    if num_faces == 0 {
        return Ok(EdgeFaceMap::default());
    }
    if arity < 3 {
        return Err(ManifoldError::UnsupportedArity(arity));
    }

    let mut edge_to_faces: HashMap<(VertexIndex, VertexIndex), Vec<FaceIndex>> =
        HashMap::with_capacity(num_faces * arity);
    for i in 0..num_faces {
        for j in 0..arity {
            let edge = canonical_edge(faces[(i, j)], faces[(i, (j + 1) % arity)]);
            edge_to_faces.entry(edge).or_default().push(i);
        }
    }

    Ok(EdgeFaceMap { edge_to_faces })
}
