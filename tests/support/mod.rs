//! Test support library
//! Face fixtures shared by the integration tests.
#![allow(dead_code)]

use meshcheck::{Faces, faces_from_rows};

pub fn single_triangle() -> Faces {
    faces_from_rows(&[[0, 1, 2]])
}

pub fn single_quad() -> Faces {
    faces_from_rows(&[[0, 1, 2, 3]])
}

/// Closed, consistently wound tetrahedron.
pub fn tetrahedron() -> Faces {
    faces_from_rows(&[[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]])
}

/// Two triangles touching only at vertex 0.
pub fn bowtie() -> Faces {
    faces_from_rows(&[[0, 1, 2], [0, 3, 4]])
}

/// Three triangles sharing edge (0, 1).
pub fn fan_edge() -> Faces {
    faces_from_rows(&[[0, 1, 2], [0, 1, 3], [0, 1, 4]])
}

/// Closed unit cube made of six quads.
pub fn quad_cube() -> Faces {
    faces_from_rows(&[
        [0, 3, 2, 1],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
    ])
}

/// Two tetrahedra glued at a single vertex (3).
pub fn double_tetrahedron() -> Faces {
    faces_from_rows(&[
        [0, 1, 2],
        [0, 3, 1],
        [0, 2, 3],
        [1, 3, 2],
        [3, 4, 5],
        [3, 6, 4],
        [3, 5, 6],
        [4, 6, 5],
    ])
}

/// `n × n` grid of quads over `(n + 1)²` vertices, row-major.
pub fn quad_grid(n: usize) -> Faces {
    let stride = n + 1;
    let mut rows = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            let v = r * stride + c;
            rows.push([v, v + 1, v + stride + 1, v + stride]);
        }
    }
    faces_from_rows(&rows)
}

/// [`quad_grid`] with every quad split along its `a-c` diagonal.
pub fn triangle_grid(n: usize) -> Faces {
    let quads = quad_grid(n);
    let mut rows = Vec::with_capacity(2 * quads.nrows());
    for i in 0..quads.nrows() {
        let [a, b, c, d] = [quads[(i, 0)], quads[(i, 1)], quads[(i, 2)], quads[(i, 3)]];
        rows.push([a, b, c]);
        rows.push([a, c, d]);
    }
    faces_from_rows(&rows)
}
