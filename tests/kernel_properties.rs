// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Property checks for the kernel operations over generated inputs

use anyhow::Result;
use approx::assert_relative_eq;
use meshbuilder::geometry::{
    compute_centroid, compute_face_normal, find_equal_positions, normalize, write_triangle,
    GeometryError, Vector3,
};

/// Deterministic vertex cloud with repeated positions
fn vertex_cloud(count: usize) -> Vec<Vector3> {
    (0..count)
        .map(|i| {
            let k = (i * 7) % 5;
            Vector3::new(k as f32, (k * k) as f32 * 0.5, -(k as f32))
        })
        .collect()
}

#[test]
fn test_equal_positions_are_exact_and_complete() -> Result<()> {
    let vertices = vertex_cloud(40);

    for index in 0..vertices.len() {
        let matches = find_equal_positions(&vertices, index)?;

        assert!(matches.contains(&index));
        assert!(matches.windows(2).all(|w| w[0] < w[1]), "not ascending");
        for (j, v) in vertices.iter().enumerate() {
            assert_eq!(matches.contains(&j), *v == vertices[index]);
        }
    }

    Ok(())
}

#[test]
fn test_write_triangle_touches_only_its_slots() -> Result<()> {
    let original: Vec<i32> = (0..30).collect();

    for offset in 0..=27 {
        let mut buffer = original.clone();
        write_triangle(&mut buffer, offset, [-1, -2, -3])?;

        for (i, value) in buffer.iter().enumerate() {
            if (offset..offset + 3).contains(&i) {
                assert_eq!(*value, -1 - (i - offset) as i32);
            } else {
                assert_eq!(*value, original[i]);
            }
        }
    }

    let mut buffer = original.clone();
    for offset in 28..32 {
        assert_eq!(
            write_triangle(&mut buffer, offset, [0, 0, 0]),
            Err(GeometryError::OffsetOutOfRange { offset, len: 30 })
        );
    }
    assert_eq!(buffer, original);

    Ok(())
}

#[test]
fn test_chained_fills() -> Result<()> {
    let mut triangles = vec![0u32; 6];
    write_triangle(&mut triangles, 0, [0, 1, 2])?;
    write_triangle(&mut triangles, 3, [2, 1, 3])?;
    assert_eq!(triangles, vec![0, 1, 2, 2, 1, 3]);
    Ok(())
}

#[test]
fn test_disjoint_regions_fill_in_parallel() -> Result<()> {
    let mut triangles = vec![0u32; 3 * 64];

    std::thread::scope(|scope| {
        for (i, chunk) in triangles.chunks_mut(3 * 16).enumerate() {
            scope.spawn(move || {
                for t in 0..16 {
                    let base = ((i * 16 + t) * 3) as u32;
                    write_triangle(chunk, t * 3, [base, base + 1, base + 2]).unwrap();
                }
            });
        }
    });

    let expected: Vec<u32> = (0..3 * 64).collect();
    assert_eq!(triangles, expected);
    Ok(())
}

#[test]
fn test_face_normal_antisymmetry() {
    let points = vertex_cloud(12);
    let reference = Vector3::new(0.25, -0.5, 1.0);

    for a in &points {
        for b in &points {
            let ab = compute_face_normal(*a, *b, reference);
            let ba = compute_face_normal(*b, *a, reference);
            assert_eq!(ab, -ba);
        }
    }
}

#[test]
fn test_face_normal_is_perpendicular() {
    let a = Vector3::new(2.0, 1.0, -1.0);
    let b = Vector3::new(-1.0, 3.0, 0.5);
    let reference = Vector3::new(0.5, 0.5, 0.5);

    let n = compute_face_normal(a, b, reference);
    assert_relative_eq!(n.dot(&(a - reference)), 0.0, epsilon = 1e-5);
    assert_relative_eq!(n.dot(&(b - reference)), 0.0, epsilon = 1e-5);
}

#[test]
fn test_normalize_properties() -> Result<()> {
    for i in 1..50 {
        let f = i as f32;
        let v = Vector3::new(f.sin() * f, f.cos() * 3.0, f * 0.1 - 2.0);

        let unit = normalize(v)?;
        assert_relative_eq!(unit.length(), 1.0, epsilon = 1e-5);

        let again = normalize(unit)?;
        assert_relative_eq!(again.x, unit.x, epsilon = 1e-6);
        assert_relative_eq!(again.y, unit.y, epsilon = 1e-6);
        assert_relative_eq!(again.z, unit.z, epsilon = 1e-6);
    }

    assert_eq!(normalize(Vector3::ZERO), Err(GeometryError::ZeroLength));
    Ok(())
}

#[test]
fn test_normalize_far_from_unit_scale() -> Result<()> {
    for v in [
        Vector3::new(1e20, 0.0, 0.0),
        Vector3::new(1e-25, 0.0, 0.0),
        Vector3::new(3e30, 4e30, 0.0),
        Vector3::new(0.0, -2e-30, 2e-30),
    ] {
        let unit = normalize(v)?;
        assert_relative_eq!(unit.length(), 1.0, epsilon = 1e-5);
    }

    let tiny_face = meshbuilder::geometry::MeshBuffers::new(
        vec![
            Vector3::ZERO,
            Vector3::new(1e-15, 0.0, 0.0),
            Vector3::new(0.0, 1e-15, 0.0),
        ],
        vec![0, 1, 2],
    )?;
    assert_eq!(tiny_face.face_normal([0, 1, 2])?, Vector3::new(0.0, 0.0, 1.0));
    Ok(())
}

#[test]
fn test_centroid_properties() -> Result<()> {
    let points = vertex_cloud(9);
    let center = compute_centroid(&points)?;

    let mut rotated = points.clone();
    rotated.rotate_left(4);
    let rotated_center = compute_centroid(&rotated)?;
    assert_relative_eq!(center.x, rotated_center.x, epsilon = 1e-5);
    assert_relative_eq!(center.y, rotated_center.y, epsilon = 1e-5);
    assert_relative_eq!(center.z, rotated_center.z, epsilon = 1e-5);

    for p in &points {
        assert_eq!(compute_centroid(std::slice::from_ref(p))?, *p);
    }

    assert_eq!(compute_centroid(&[]), Err(GeometryError::EmptyInput));
    Ok(())
}

#[test]
fn test_documented_scenarios() -> Result<()> {
    let vertices = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
    ];
    assert_eq!(find_equal_positions(&vertices, 0)?, vec![0, 2]);

    let normal = compute_face_normal(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
    );
    assert_eq!(normal, Vector3::new(0.0, 0.0, 1.0));

    let center = compute_centroid(&[
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 2.0, 0.0),
    ])?;
    assert!((center.x - 0.667).abs() < 1e-3);
    assert!((center.y - 0.667).abs() < 1e-3);
    assert_eq!(center.z, 0.0);

    Ok(())
}
