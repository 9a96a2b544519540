//! # Combine Tests
//!
//! Unit tests for merge and append over fragments.

use super::*;
use crate::combinable::{MeshFragment, SubmeshPart, TransformedMesh};
use glam::DMat4;

fn material(id: u64) -> Option<MaterialHandle> {
    Some(MaterialHandle::new(id))
}

fn triangle(offset: f64, material: Option<MaterialHandle>) -> MeshFragment {
    MeshFragment::from_triangles(
        vec![
            DVec3::new(offset, 0.0, 0.0),
            DVec3::new(offset + 1.0, 0.0, 0.0),
            DVec3::new(offset, 1.0, 0.0),
        ],
        vec![0, 1, 2],
        material,
    )
}

#[test]
fn test_merge_buckets_by_first_seen_material() {
    let mut target = triangle(0.0, material(2));
    let a = triangle(1.0, material(1));
    let b = triangle(2.0, material(2));

    merge(&mut target, &[&a, &b]).unwrap();

    assert_eq!(target.vertex_count(), 9);
    assert_eq!(target.materials(), vec![material(2), material(1)]);
    assert_eq!(target.indices(0), &[0, 1, 2, 6, 7, 8]);
    assert_eq!(target.indices(1), &[3, 4, 5]);
    assert_eq!(target.topology(0), Topology::Triangles);
}

#[test]
fn test_merge_fills_missing_channels() {
    let mut target = triangle(0.0, material(1)).with_colors(vec![[0.0, 0.0, 1.0, 1.0]; 3]);
    let other = triangle(1.0, material(1))
        .with_normals(vec![DVec3::Z; 3])
        .with_uvs(vec![DVec2::ONE; 3]);

    merge(&mut target, &[&other]).unwrap();

    assert_eq!(target.normals().len(), 6);
    assert_eq!(target.normals()[0], DVec3::ZERO);
    assert_eq!(target.normals()[3], DVec3::Z);
    assert_eq!(target.uvs()[..3], [DVec2::ZERO; 3]);
    assert_eq!(target.uvs()[3..], [DVec2::ONE; 3]);
    assert_eq!(target.colors()[0], [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(target.colors()[5], DEFAULT_VERTEX_COLOR);
}

#[test]
fn test_merge_drops_null_material_submesh() {
    let mut target = triangle(0.0, material(1));
    let unlit = triangle(1.0, None);

    merge(&mut target, &[&unlit]).unwrap();

    assert_eq!(target.vertex_count(), 6);
    assert_eq!(target.submesh_count(), 1);
    assert_eq!(target.indices(0), &[0, 1, 2]);
}

#[test]
fn test_merge_skips_empty_source() {
    let mut target = triangle(0.0, material(1));
    let mut empty = MeshFragment::new(2);
    empty.set_materials(&[material(5), material(6)]);

    merge(&mut target, &[&empty]).unwrap();

    assert_eq!(target.vertex_count(), 3);
    assert_eq!(target.materials(), vec![material(1)]);
}

#[test]
fn test_merge_converts_quads() {
    let mut target = MeshFragment::from_triangles(
        vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
        Vec::new(),
        None,
    );
    if let Some(part) = target.submesh_mut(0) {
        *part = SubmeshPart {
            indices: vec![0, 1, 2, 3],
            topology: Topology::Quads,
            material: material(1),
        };
    }

    merge(&mut target, &[]).unwrap();

    assert_eq!(target.indices(0), &[0, 2, 3, 0, 1, 2]);
    assert_eq!(target.topology(0), Topology::Triangles);
}

#[test]
fn test_merge_rejects_line_submesh_without_touching_target() {
    let mut target = triangle(0.0, material(1));
    let mut lines = triangle(1.0, material(1));
    if let Some(part) = lines.submesh_mut(0) {
        part.indices = vec![0, 1];
        part.topology = Topology::Lines;
    }
    let before = target.clone();

    let result = merge(&mut target, &[&lines]);

    assert!(matches!(result, Err(MeshError::InvalidTopology { .. })));
    assert_eq!(target, before);
}

#[test]
fn test_merge_rejects_out_of_range_index() {
    let mut target = triangle(0.0, material(1));
    let broken = MeshFragment::from_triangles(vec![DVec3::ZERO], vec![0, 1, 2], material(1));
    let before = target.clone();

    let result = merge(&mut target, &[&broken]);

    assert!(matches!(result, Err(MeshError::ValidationFailed { .. })));
    assert_eq!(target, before);
}

#[test]
fn test_merge_into_transformed_view_is_unsupported() {
    let base = triangle(0.0, material(1));
    let other = triangle(1.0, material(1));
    let mut view = TransformedMesh::new(&base, DMat4::IDENTITY);

    let result = merge(&mut view, &[&other]);

    assert!(matches!(result, Err(MeshError::Unsupported { .. })));
}

#[test]
fn test_merge_transformed_source_uses_world_positions() {
    let mut target = triangle(0.0, material(1));
    let local = triangle(0.0, material(1));
    let world = TransformedMesh::new(&local, DMat4::from_translation(DVec3::new(0.0, 0.0, 3.0)));

    merge(&mut target, &[&world]).unwrap();

    assert_eq!(target.vertices()[3], DVec3::new(0.0, 0.0, 3.0));
}

#[test]
fn test_append_keeps_submeshes_and_topology() {
    let mut target = triangle(0.0, material(1)).with_normals(vec![DVec3::Z; 3]);
    let mut quads = MeshFragment::from_triangles(
        vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
        Vec::new(),
        None,
    );
    if let Some(part) = quads.submesh_mut(0) {
        part.indices = vec![0, 1, 2, 3];
        part.topology = Topology::Quads;
    }

    append(&mut target, &[&quads]).unwrap();

    assert_eq!(target.submesh_count(), 2);
    assert_eq!(target.indices(1), &[3, 4, 5, 6]);
    assert_eq!(target.topology(1), Topology::Quads);
    assert_eq!(target.materials(), vec![material(1), None]);
    assert!(target.normals().is_empty());
    assert_eq!(target.colors().len(), 7);
}

#[test]
fn test_combiner_reuse_does_not_leak_state() {
    let mut combiner = MeshCombiner::new();

    let mut first = triangle(0.0, material(1));
    let extra = triangle(1.0, material(2));
    combiner.merge(&mut first, &[&extra]).unwrap();
    assert_eq!(first.submesh_count(), 2);

    let mut second = triangle(5.0, material(3));
    combiner.merge(&mut second, &[]).unwrap();
    assert_eq!(second.vertex_count(), 3);
    assert_eq!(second.materials(), vec![material(3)]);

    let mut third = triangle(0.0, material(1));
    combiner.append(&mut third, &[&extra]).unwrap();
    assert_eq!(third.vertex_count(), 6);
    assert_eq!(third.submesh_count(), 2);
}
