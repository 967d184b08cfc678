//! Index types shared across the crate, and helpers for building face matrices.

use nalgebra::DMatrix;

/// Index of a vertex in the (implicit) vertex array.
pub type VertexIndex = usize;

/// Index of a face, i.e. a row of [`Faces`].
pub type FaceIndex = usize;

/// A directed edge between two vertices.
pub type Edge = [VertexIndex; 2];

/// Row-per-face matrix of vertex indices.
///
/// Every face of one matrix has the same arity: the number of columns.
pub type Faces = DMatrix<VertexIndex>;

/// Build a [`Faces`] matrix from fixed-size face rows.
///
/// ```
/// use meshcheck::index_types::faces_from_rows;
/// let faces = faces_from_rows(&[[0, 1, 2], [0, 2, 3]]);
/// assert_eq!(faces.shape(), (2, 3));
/// assert_eq!(faces[(1, 2)], 3);
/// ```
pub fn faces_from_rows<const N: usize>(rows: &[[VertexIndex; N]]) -> Faces {
    Faces::from_fn(rows.len(), N, |i, j| rows[i][j])
}

/// Number of vertices addressed by `faces`: the largest index plus one.
///
/// Returns 0 for an empty matrix.
pub fn num_vertices(faces: &Faces) -> usize {
    faces.iter().max().map_or(0, |&max| max + 1)
}

/// Vertices per face.
#[inline]
pub fn face_arity(faces: &Faces) -> usize {
    faces.ncols()
}
