// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Flat `[x0, y0, z0, x1, ...]` arrays used by the script bindings

use crate::geometry::Vector3;

/// Group a flat coordinate array into vectors, `None` if the length is not
/// a multiple of three
pub(crate) fn to_vectors(coords: &[f32]) -> Option<Vec<Vector3>> {
    if coords.len() % 3 != 0 {
        return None;
    }
    Some(
        coords
            .chunks_exact(3)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
            .collect(),
    )
}

/// Single vector from exactly three coordinates
pub(crate) fn to_vector(coords: &[f32]) -> Option<Vector3> {
    match coords {
        [x, y, z] => Some(Vector3::new(*x, *y, *z)),
        _ => None,
    }
}

pub(crate) fn to_flat(vectors: &[Vector3]) -> Vec<f32> {
    vectors.iter().flat_map(|v| v.to_array()).collect()
}
