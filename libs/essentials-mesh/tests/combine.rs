//! Integration tests for merging and appending across mesh variants.

use essentials_mesh::{
    append, merge, CombinableMesh, HostMesh, MaterialHandle, MeshData, MeshError, MeshFragment,
    SubmeshPart, Topology, TransformedMesh,
};
use glam::{DMat4, DVec3};

fn grid_fragment(columns: u32, materials: &[Option<MaterialHandle>]) -> MeshFragment {
    let mut vertices = Vec::new();
    for x in 0..=columns {
        vertices.push(DVec3::new(f64::from(x), 0.0, 0.0));
        vertices.push(DVec3::new(f64::from(x), 1.0, 0.0));
    }
    let mut fragment = MeshFragment::from_triangles(vertices, Vec::new(), None);
    for (column, &material) in materials.iter().enumerate().take(columns as usize) {
        let base = column as u32 * 2;
        let part = SubmeshPart {
            indices: vec![base, base + 2, base + 3, base + 1],
            topology: Topology::Quads,
            material,
        };
        if column == 0 {
            if let Some(first) = fragment.submesh_mut(0) {
                *first = part;
            }
        } else {
            fragment.push_submesh(part);
        }
    }
    fragment
}

fn host_triangle(data: &mut MeshData) {
    data.add_vertex(DVec3::ZERO);
    data.add_vertex(DVec3::X);
    data.add_vertex(DVec3::Y);
    data.add_triangle(0, 1, 2);
}

#[test]
fn test_merge_vertex_count_sums_non_empty_sources() {
    let stone = Some(MaterialHandle::new(1));
    let mut data = MeshData::named("level");
    host_triangle(&mut data);
    let mut target = HostMesh::with_materials(&mut data, vec![stone]);

    let a = grid_fragment(3, &[stone, stone, stone]);
    let b = MeshFragment::default();
    let c = grid_fragment(1, &[stone]);
    let expected = target.vertex_count() + a.vertex_count() + c.vertex_count();

    merge(&mut target, &[&a, &b, &c]).unwrap();

    assert_eq!(target.vertex_count(), expected);
    assert_eq!(target.normals().len(), expected);
    assert_eq!(target.uvs().len(), expected);
    assert_eq!(target.colors().len(), expected);
}

#[test]
fn test_merge_indices_stay_in_bounds() {
    let (stone, wood) = (Some(MaterialHandle::new(1)), Some(MaterialHandle::new(2)));
    let mut target = grid_fragment(2, &[stone, wood]);
    let a = grid_fragment(4, &[wood, None, stone, wood]);
    let moved = TransformedMesh::new(&a, DMat4::from_rotation_z(1.0));

    merge(&mut target, &[&a, &moved]).unwrap();

    let count = target.vertex_count() as u32;
    for submesh in 0..target.submesh_count() {
        assert!(target.indices(submesh).iter().all(|&i| i < count));
        assert_eq!(target.indices(submesh).len() % 3, 0);
    }
}

#[test]
fn test_merge_one_submesh_per_distinct_material() {
    let ids: Vec<_> = (1..=3).map(|i| Some(MaterialHandle::new(i))).collect();
    let mut target = grid_fragment(2, &[ids[2], ids[0]]);
    let a = grid_fragment(3, &[ids[0], ids[1], None]);

    merge(&mut target, &[&a]).unwrap();

    assert_eq!(target.submesh_count(), 3);
    assert_eq!(target.materials(), vec![ids[2], ids[0], ids[1]]);
    // Two quads share the first-seen material 1: one from each fragment.
    assert_eq!(target.indices(1).len(), 12);
}

#[test]
fn test_merge_null_material_contributes_nothing() {
    let stone = Some(MaterialHandle::new(1));
    let mut with_null = grid_fragment(2, &[stone, None]);
    let mut without = grid_fragment(1, &[stone]);

    merge(&mut with_null, &[]).unwrap();
    merge(&mut without, &[]).unwrap();

    assert_eq!(with_null.triangles(), without.triangles());
}

#[test]
fn test_merge_single_quad_to_triangles() {
    let stone = Some(MaterialHandle::new(1));
    let mut target = MeshFragment::from_triangles(
        vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
        Vec::new(),
        None,
    );
    if let Some(part) = target.submesh_mut(0) {
        *part = SubmeshPart {
            indices: vec![0, 1, 2, 3],
            topology: Topology::Quads,
            material: stone,
        };
    }

    merge(&mut target, &[]).unwrap();

    assert_eq!(target.indices(0), &[0, 2, 3, 0, 1, 2]);
}

#[test]
fn test_append_submesh_count_is_sum() {
    let stone = Some(MaterialHandle::new(1));
    let mut data = MeshData::new();
    host_triangle(&mut data);
    let mut target = HostMesh::new(&mut data);
    let a = grid_fragment(3, &[stone, None, stone]);
    let b = grid_fragment(2, &[None, stone]);
    let expected = target.submesh_count() + a.submesh_count() + b.submesh_count();

    append(&mut target, &[&a, &b]).unwrap();

    assert_eq!(target.submesh_count(), expected);
    assert_eq!(target.renderer_materials().len(), expected);
    assert_eq!(target.topology(1), Topology::Quads);
    assert_eq!(target.material(2), None);
    assert!(target.normals().is_empty());
}

#[test]
fn test_merge_and_append_into_transformed_view_fail() {
    let stone = Some(MaterialHandle::new(1));
    let base = grid_fragment(1, &[stone]);
    let source = grid_fragment(1, &[stone]);
    let mut view = TransformedMesh::new(&base, DMat4::from_translation(DVec3::X));

    assert!(matches!(merge(&mut view, &[&source]), Err(MeshError::Unsupported { .. })));
    assert!(matches!(append(&mut view, &[&source]), Err(MeshError::Unsupported { .. })));
    assert_eq!(base.vertex_count(), 4);
}

#[test]
fn test_recalculate_normals_after_append() {
    let stone = Some(MaterialHandle::new(1));
    let mut data = MeshData::new();
    host_triangle(&mut data);
    {
        let mut target = HostMesh::new(&mut data);
        let quads = grid_fragment(2, &[stone, stone]);
        append(&mut target, &[&quads]).unwrap();
        target.recalculate_normals();
    }
    assert_eq!(data.normals().len(), data.vertex_count());
    assert!(data.normals().iter().all(|n| n.abs_diff_eq(DVec3::Z, 1e-12)));
}
