// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stateless kernel operations over vertex and index buffers
//!
//! Every function here is a pure, single-shot function of its inputs. The
//! only mutation is the in-place write into a caller-owned index buffer, and
//! that write is range-checked before any slot is touched.

use super::error::{GeometryError, Result};
use super::Vector3;

/// Find every vertex sharing the exact position of `vertices[index]`.
///
/// Returns indices in ascending order. The result always contains `index`
/// itself. Comparison is bit-exact; callers that need tolerance-based
/// matching must quantize positions first.
pub fn find_equal_positions(vertices: &[Vector3], index: usize) -> Result<Vec<usize>> {
    let target = vertices
        .get(index)
        .copied()
        .ok_or(GeometryError::IndexOutOfRange {
            index,
            len: vertices.len(),
        })?;

    // NaN never equals itself, so the given index is matched by position
    Ok(vertices
        .iter()
        .enumerate()
        .filter(|&(i, v)| i == index || *v == target)
        .map(|(i, _)| i)
        .collect())
}

/// Write one triangle's corner indices at `offset`.
///
/// Corners are stored verbatim; their order is the winding. Returns the
/// three written slots.
pub fn write_triangle<T: Copy>(
    buffer: &mut [T],
    offset: usize,
    corners: [T; 3],
) -> Result<&mut [T]> {
    let slots = slots_mut(buffer, offset, 3)?;
    slots.copy_from_slice(&corners);
    Ok(slots)
}

/// Write a quad as two triangles `(c0, c1, c2)` and `(c3, c2, c1)`.
///
/// The full six-slot range is checked before either triangle is written.
pub fn write_quad<T: Copy>(buffer: &mut [T], offset: usize, corners: [T; 4]) -> Result<&mut [T]> {
    let slots = slots_mut(buffer, offset, 6)?;
    let [c0, c1, c2, c3] = corners;
    write_triangle(slots, 0, [c0, c1, c2])?;
    write_triangle(slots, 3, [c3, c2, c1])?;
    Ok(slots)
}

fn slots_mut<T>(buffer: &mut [T], offset: usize, count: usize) -> Result<&mut [T]> {
    let len = buffer.len();
    offset
        .checked_add(count)
        .and_then(|end| buffer.get_mut(offset..end))
        .ok_or(GeometryError::OffsetOutOfRange { offset, len })
}

/// Cross product of `a - reference` and `b - reference`.
///
/// The result is not normalized. Collinear inputs give the zero vector.
pub fn compute_face_normal(a: Vector3, b: Vector3, reference: Vector3) -> Vector3 {
    let d1 = a - reference;
    let d2 = b - reference;

    Vector3::new(
        d1.y * d2.z - d1.z * d2.y,
        -(d1.x * d2.z - d1.z * d2.x),
        d1.x * d2.y - d1.y * d2.x,
    )
}

/// Scale `v` to unit length.
///
/// Zero-length input is an error rather than a NaN result. Any finite,
/// nonzero vector normalizes, however large or small its components.
pub fn normalize(v: Vector3) -> Result<Vector3> {
    if !v.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if v == Vector3::ZERO {
        return Err(GeometryError::ZeroLength);
    }
    Ok(v / v.length())
}

/// Arithmetic mean of `points`.
pub fn compute_centroid(points: &[Vector3]) -> Result<Vector3> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput);
    }

    let mut sum = Vector3::ZERO;
    for point in points {
        sum += *point;
    }
    Ok(sum / points.len() as f32)
}
