// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! WASM bindings using wasm-bindgen
//!
//! Vectors cross the boundary as flat `Float32Array`s (`[x, y, z, ...]`).

use super::flat::{to_flat, to_vector, to_vectors};
use crate::geometry::{self, GeometryError, MeshBuffers, Primitive, Vector3};
use wasm_bindgen::prelude::*;

fn js_error(err: GeometryError) -> JsValue {
    JsValue::from_str(&format!("Geometry error: {}", err))
}

fn vectors(coords: &[f32]) -> Result<Vec<Vector3>, JsValue> {
    to_vectors(coords).ok_or_else(|| JsValue::from_str("coordinate count must be a multiple of 3"))
}

fn vector(coords: &[f32]) -> Result<Vector3, JsValue> {
    to_vector(coords).ok_or_else(|| JsValue::from_str("expected exactly 3 coordinates"))
}

#[wasm_bindgen]
pub struct WasmMesh {
    inner: MeshBuffers,
}

#[wasm_bindgen]
impl WasmMesh {
    /// Build one of the built-in primitives ("cube", "cone", "door")
    pub fn primitive(name: &str) -> Result<WasmMesh, JsValue> {
        let primitive: Primitive = name.parse().map_err(js_error)?;
        Ok(WasmMesh {
            inner: primitive.to_mesh(),
        })
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.inner.triangle_count()
    }

    /// Flat vertex positions
    pub fn vertices(&self) -> Vec<f32> {
        to_flat(&self.inner.vertices)
    }

    pub fn triangles(&self) -> Vec<u32> {
        self.inner.triangles.clone()
    }

    /// Extrude the `face`-th triangle, returning the new cap indices
    pub fn extrude_face(&mut self, face: usize, distance: f32) -> Result<Vec<u32>, JsValue> {
        let corners = self.inner.triangle(face).map_err(js_error)?;
        let cap = self.inner.extrude_face(corners, distance).map_err(js_error)?;
        Ok(cap.to_vec())
    }

    /// Move a vertex and everything coincident with it
    pub fn move_vertex(&mut self, index: usize, position: &[f32]) -> Result<Vec<u32>, JsValue> {
        let moved = self
            .inner
            .move_vertex(index, vector(position)?)
            .map_err(js_error)?;
        Ok(moved.into_iter().map(|i| i as u32).collect())
    }
}

#[wasm_bindgen]
pub fn find_equal_positions(vertices: &[f32], index: usize) -> Result<Vec<u32>, JsValue> {
    let indices = geometry::find_equal_positions(&vectors(vertices)?, index).map_err(js_error)?;
    Ok(indices.into_iter().map(|i| i as u32).collect())
}

/// Write a triangle into `triangles` in place
#[wasm_bindgen]
pub fn write_triangle(
    triangles: &mut [u32],
    offset: usize,
    a: u32,
    b: u32,
    c: u32,
) -> Result<(), JsValue> {
    geometry::write_triangle(triangles, offset, [a, b, c]).map_err(js_error)?;
    Ok(())
}

#[wasm_bindgen]
pub fn compute_face_normal(a: &[f32], b: &[f32], reference: &[f32]) -> Result<Vec<f32>, JsValue> {
    let normal = geometry::compute_face_normal(vector(a)?, vector(b)?, vector(reference)?);
    Ok(normal.to_array().to_vec())
}

#[wasm_bindgen]
pub fn normalize(v: &[f32]) -> Result<Vec<f32>, JsValue> {
    let unit = geometry::normalize(vector(v)?).map_err(js_error)?;
    Ok(unit.to_array().to_vec())
}

#[wasm_bindgen]
pub fn compute_centroid(points: &[f32]) -> Result<Vec<f32>, JsValue> {
    let center = geometry::compute_centroid(&vectors(points)?).map_err(js_error)?;
    Ok(center.to_array().to_vec())
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
