// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Owned vertex and triangle buffers with editing operations

use super::error::{GeometryError, Result};
use super::ops::{
    compute_centroid, compute_face_normal, find_equal_positions, normalize, write_quad,
    write_triangle,
};
use super::{BoundingBox, Vector3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Triangular mesh stored as a flat vertex buffer plus a flat index buffer.
///
/// Each consecutive triple in `triangles` is one face in winding order.
/// Vertices are usually split per face (a cube has 24 or 36 of them), so
/// editing a position means editing every coincident vertex with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    pub vertices: Vec<Vector3>,
    pub triangles: Vec<u32>,
}

impl MeshBuffers {
    pub fn new(vertices: Vec<Vector3>, triangles: Vec<u32>) -> Result<Self> {
        if triangles.len() % 3 != 0 {
            return Err(GeometryError::MalformedTriangles {
                len: triangles.len(),
            });
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Iterate faces as corner triples
    pub fn faces(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Corner indices of the `face`-th triangle
    pub fn triangle(&self, face: usize) -> Result<[u32; 3]> {
        self.faces().nth(face).ok_or(GeometryError::FaceOutOfRange {
            face,
            count: self.triangle_count(),
        })
    }

    pub fn position(&self, index: usize) -> Result<Vector3> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    pub fn corner_positions(&self, corners: [u32; 3]) -> Result<[Vector3; 3]> {
        Ok([
            self.position(corners[0] as usize)?,
            self.position(corners[1] as usize)?,
            self.position(corners[2] as usize)?,
        ])
    }

    /// Indices of every vertex sharing the exact position of `index`
    pub fn coincident_vertices(&self, index: usize) -> Result<Vec<usize>> {
        find_equal_positions(&self.vertices, index)
    }

    /// Move a vertex and all vertices coincident with it to `position`.
    ///
    /// Returns the moved indices.
    pub fn move_vertex(&mut self, index: usize, position: Vector3) -> Result<Vec<usize>> {
        let moved = self.coincident_vertices(index)?;
        for &i in &moved {
            self.vertices[i] = position;
        }
        debug!(index, count = moved.len(), %position, "moved vertex group");
        Ok(moved)
    }

    /// Translate a face, together with every vertex coincident with one of
    /// its corners, by `delta`. Each vertex moves once.
    pub fn translate_face(&mut self, corners: [u32; 3], delta: Vector3) -> Result<Vec<usize>> {
        let mut moved = Vec::new();
        for corner in corners {
            moved.extend(self.coincident_vertices(corner as usize)?);
        }
        moved.sort_unstable();
        moved.dedup();

        for &i in &moved {
            self.vertices[i] += delta;
        }
        debug!(face = ?corners, count = moved.len(), %delta, "translated face");
        Ok(moved)
    }

    /// Centroid of a face's three corners
    pub fn face_center(&self, corners: [u32; 3]) -> Result<Vector3> {
        compute_centroid(&self.corner_positions(corners)?)
    }

    /// Unit normal of a face, following its winding
    pub fn face_normal(&self, corners: [u32; 3]) -> Result<Vector3> {
        let [p0, p1, p2] = self.corner_positions(corners)?;
        normalize(compute_face_normal(p1, p2, p0))
    }

    /// Extrude a triangular face along its normal by `distance`.
    ///
    /// Three new vertices are appended as the cap, the first triangle equal
    /// to `corners` is replaced by the cap, and three side quads are
    /// appended to close the gap. Returns the cap's vertex indices.
    pub fn extrude_face(&mut self, corners: [u32; 3], distance: f32) -> Result<[u32; 3]> {
        let [p0, p1, p2] = self.corner_positions(corners)?;
        let offset = normalize(compute_face_normal(p1, p2, p0))? * distance;

        let face_offset = self
            .faces()
            .position(|face| face == corners)
            .map(|face| face * 3)
            .ok_or(GeometryError::FaceNotFound { corners })?;

        let base = self.vertices.len();
        let first = base
            .checked_add(2)
            .and_then(|last| u32::try_from(last).ok())
            .map(|last| last - 2)
            .ok_or(GeometryError::IndexOutOfRange {
                index: base,
                len: base,
            })?;
        let cap = [first, first + 1, first + 2];
        let [c0, c1, c2] = corners;
        let [n0, n1, n2] = cap;

        self.vertices.extend([p0 + offset, p1 + offset, p2 + offset]);
        write_triangle(&mut self.triangles, face_offset, cap)?;

        let sides = self.triangles.len();
        self.triangles.resize(sides + 18, 0);
        write_quad(&mut self.triangles, sides, [c1, c2, n1, n2])?;
        write_quad(&mut self.triangles, sides + 6, [c2, c0, n2, n0])?;
        write_quad(&mut self.triangles, sides + 12, [c0, c1, n0, n1])?;

        debug!(face = ?corners, ?cap, distance, "extruded face");
        Ok(cap)
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }
}
