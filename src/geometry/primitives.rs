// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Built-in primitive meshes

use super::error::GeometryError;
use super::{MeshBuffers, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geometric primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Cube,
    Cone,
    Door,
}

impl Primitive {
    pub const ALL: [Primitive; 3] = [Self::Cube, Self::Cone, Self::Door];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Cone => "cone",
            Self::Door => "door",
        }
    }

    pub fn to_mesh(&self) -> MeshBuffers {
        let (vertices, triangles) = match self {
            Self::Cube => cube_data(),
            Self::Cone => cone_data(),
            Self::Door => door_data(),
        };
        MeshBuffers {
            vertices: vertices.iter().copied().map(Vector3::from).collect(),
            triangles: triangles.to_vec(),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Primitive {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeometryError::UnknownPrimitive(s.to_string()))
    }
}

// Unit cube with one corner at the origin, shared corners
fn cube_data() -> (&'static [[f32; 3]], &'static [u32]) {
    const VERTICES: [[f32; 3]; 8] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
    ];
    const TRIANGLES: [u32; 36] = [
        0, 2, 1, 0, 3, 2, // front
        2, 3, 4, 2, 4, 5, // top
        1, 2, 5, 1, 5, 6, // right
        0, 7, 4, 0, 4, 3, // left
        5, 4, 7, 5, 7, 6, // back
        0, 6, 7, 0, 1, 6, // bottom
    ];
    (&VERTICES, &TRIANGLES)
}

// Square pyramid, apex above the base center
fn cone_data() -> (&'static [[f32; 3]], &'static [u32]) {
    const VERTICES: [[f32; 3]; 5] = [
        [0.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 0.0, 2.0],
        [0.0, 0.0, 2.0],
        [1.0, 3.0, 1.0],
    ];
    const TRIANGLES: [u32; 18] = [
        0, 4, 1, 1, 4, 2, 2, 4, 3, 3, 4, 0, // sides
        0, 1, 3, 1, 2, 3, // base
    ];
    (&VERTICES, &TRIANGLES)
}

// Flat door frame: two posts and a lintel in the z = 0 plane
fn door_data() -> (&'static [[f32; 3]], &'static [u32]) {
    const VERTICES: [[f32; 3]; 12] = [
        [0.0, 0.0, 0.0],
        [0.5, 0.0, 0.0],
        [0.0, 3.0, 0.0],
        [0.5, 3.0, 0.0],
        [0.0, 4.0, 0.0],
        [0.5, 4.0, 0.0],
        [3.0, 0.0, 0.0],
        [3.5, 0.0, 0.0],
        [3.0, 3.0, 0.0],
        [3.5, 3.0, 0.0],
        [3.0, 4.0, 0.0],
        [3.5, 4.0, 0.0],
    ];
    const TRIANGLES: [u32; 30] = [
        0, 2, 1, 1, 2, 3, // left post
        2, 4, 3, 3, 4, 5, // left corner
        3, 5, 8, 8, 5, 10, // lintel
        6, 8, 7, 7, 8, 9, // right post
        8, 10, 9, 9, 10, 11, // right corner
    ];
    (&VERTICES, &TRIANGLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_sizes() {
        let cube = Primitive::Cube.to_mesh();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.triangle_count(), 12);

        let cone = Primitive::Cone.to_mesh();
        assert_eq!(cone.vertex_count(), 5);
        assert_eq!(cone.triangle_count(), 6);

        let door = Primitive::Door.to_mesh();
        assert_eq!(door.vertex_count(), 12);
        assert_eq!(door.triangle_count(), 10);
    }

    #[test]
    fn test_indices_in_range() {
        for primitive in Primitive::ALL {
            let mesh = primitive.to_mesh();
            assert!(
                mesh.triangles.iter().all(|&i| (i as usize) < mesh.vertex_count()),
                "{} has an index past its vertex buffer",
                primitive
            );
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("cube".parse::<Primitive>().unwrap(), Primitive::Cube);
        assert_eq!(" Door ".parse::<Primitive>().unwrap(), Primitive::Door);
        assert_eq!(
            "sphere".parse::<Primitive>(),
            Err(GeometryError::UnknownPrimitive("sphere".into()))
        );
    }
}
