// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Node.js bindings using napi-rs

use super::flat::{to_flat, to_vector, to_vectors};
use crate::geometry::{self, GeometryError, MeshBuffers, Primitive, Vector3};
use napi::bindgen_prelude::*;
use napi_derive::napi;

fn geometry_error(err: GeometryError) -> Error {
    Error::from_reason(format!("Geometry error: {}", err))
}

fn narrow(coords: &[f64]) -> Vec<f32> {
    coords.iter().map(|&c| c as f32).collect()
}

fn widen(coords: &[f32]) -> Vec<f64> {
    coords.iter().map(|&c| f64::from(c)).collect()
}

fn vectors(coords: &[f64]) -> Result<Vec<Vector3>> {
    to_vectors(&narrow(coords))
        .ok_or_else(|| Error::from_reason("coordinate count must be a multiple of 3"))
}

fn vector(coords: &[f64]) -> Result<Vector3> {
    to_vector(&narrow(coords)).ok_or_else(|| Error::from_reason("expected exactly 3 coordinates"))
}

#[napi]
pub struct JsMesh {
    inner: MeshBuffers,
}

#[napi]
impl JsMesh {
    /// Build one of the built-in primitives ("cube", "cone", "door")
    #[napi(factory)]
    pub fn primitive(name: String) -> Result<Self> {
        let primitive: Primitive = name.parse().map_err(geometry_error)?;
        Ok(Self {
            inner: primitive.to_mesh(),
        })
    }

    /// Get vertex count
    #[napi]
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }

    /// Get triangle count
    #[napi]
    pub fn triangle_count(&self) -> u32 {
        self.inner.triangle_count() as u32
    }

    #[napi]
    pub fn vertices(&self) -> Vec<f64> {
        widen(&to_flat(&self.inner.vertices))
    }

    #[napi]
    pub fn triangles(&self) -> Vec<u32> {
        self.inner.triangles.clone()
    }

    /// Extrude the `face`-th triangle, returning the new cap indices
    #[napi]
    pub fn extrude_face(&mut self, face: u32, distance: f64) -> Result<Vec<u32>> {
        let corners = self.inner.triangle(face as usize).map_err(geometry_error)?;
        let cap = self
            .inner
            .extrude_face(corners, distance as f32)
            .map_err(geometry_error)?;
        Ok(cap.to_vec())
    }

    /// Translate a face and its coincident vertices by `delta`
    #[napi]
    pub fn translate_face(&mut self, face: u32, delta: Vec<f64>) -> Result<Vec<u32>> {
        let corners = self.inner.triangle(face as usize).map_err(geometry_error)?;
        let moved = self
            .inner
            .translate_face(corners, vector(&delta)?)
            .map_err(geometry_error)?;
        Ok(moved.into_iter().map(|i| i as u32).collect())
    }
}

#[napi]
pub fn find_equal_positions(vertices: Vec<f64>, index: u32) -> Result<Vec<u32>> {
    let indices = geometry::find_equal_positions(&vectors(&vertices)?, index as usize)
        .map_err(geometry_error)?;
    Ok(indices.into_iter().map(|i| i as u32).collect())
}

/// Returns a copy of `triangles` with the triangle written at `offset`
#[napi]
pub fn write_triangle(triangles: Vec<u32>, offset: u32, corners: Vec<u32>) -> Result<Vec<u32>> {
    let mut triangles = triangles;
    let corners: [u32; 3] = corners
        .try_into()
        .map_err(|_| Error::from_reason("expected exactly 3 corner indices"))?;
    geometry::write_triangle(&mut triangles, offset as usize, corners).map_err(geometry_error)?;
    Ok(triangles)
}

#[napi]
pub fn compute_face_normal(a: Vec<f64>, b: Vec<f64>, reference: Vec<f64>) -> Result<Vec<f64>> {
    let normal = geometry::compute_face_normal(vector(&a)?, vector(&b)?, vector(&reference)?);
    Ok(widen(&normal.to_array()))
}

#[napi]
pub fn normalize(v: Vec<f64>) -> Result<Vec<f64>> {
    let unit = geometry::normalize(vector(&v)?).map_err(geometry_error)?;
    Ok(widen(&unit.to_array()))
}

#[napi]
pub fn compute_centroid(points: Vec<f64>) -> Result<Vec<f64>> {
    let center = geometry::compute_centroid(&vectors(&points)?).map_err(geometry_error)?;
    Ok(widen(&center.to_array()))
}

/// Get version
#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
