mod support;

use meshcheck::{ManifoldError, ManifoldOps, SerialManifoldOps, analyze_manifold, faces_from_rows};

#[test]
fn test_closed_meshes_are_manifold() {
    for faces in [support::tetrahedron(), support::quad_cube()] {
        let report = analyze_manifold(&faces).unwrap();
        assert!(report.is_manifold());
        assert!(report.non_manifold_vertices().is_empty());
        assert!(report.non_manifold_edges().is_empty());
    }
}

#[test]
fn test_open_meshes_are_manifold() {
    for faces in [support::single_triangle(), support::single_quad(), support::triangle_grid(2)] {
        assert!(analyze_manifold(&faces).unwrap().is_manifold());
    }
}

#[test]
fn test_bowtie_report() {
    let report = analyze_manifold(&support::bowtie()).unwrap();
    assert!(!report.is_manifold());
    assert_eq!(report.non_manifold_vertices(), vec![0]);
    assert!(report.non_manifold_edges().is_empty());
}

#[test]
fn test_fan_report() {
    let report = analyze_manifold(&support::fan_edge()).unwrap();
    assert_eq!(report.non_manifold_vertices(), vec![0, 1]);
    assert_eq!(report.non_manifold_edges(), vec![(0, 0), (1, 0), (2, 0)]);
}

#[test]
fn test_double_tetrahedron_report() {
    let report = analyze_manifold(&support::double_tetrahedron()).unwrap();
    assert_eq!(report.non_manifold_vertices(), vec![3]);
    assert!(report.non_manifold_edges().is_empty());
}

#[test]
fn test_empty_report_is_manifold() {
    let report = analyze_manifold(&faces_from_rows::<4>(&[])).unwrap();
    assert!(report.vertex_manifold.is_empty());
    assert_eq!(report.edge_manifold.shape(), (0, 4));
    assert!(report.is_manifold());
}

#[test]
fn test_report_rejects_polygons() {
    let faces = faces_from_rows(&[[0, 1, 2, 3, 4]]);
    assert_eq!(analyze_manifold(&faces), Err(ManifoldError::UnsupportedArity(5)));
}

#[test]
fn test_report_matches_separate_analyses() {
    let faces = support::fan_edge();
    let ops = SerialManifoldOps::new();
    let report = ops.analyze(&faces).unwrap();
    assert_eq!(report.vertex_manifold, ops.is_vertex_manifold(&faces).unwrap());
    assert_eq!(report.edge_manifold, ops.is_edge_manifold(&faces).unwrap());
}
