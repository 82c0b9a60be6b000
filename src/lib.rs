// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! MeshBuilder Geometry Kernel
//!
//! Stateless helpers for assembling triangulated meshes from a flat vertex
//! buffer: duplicate-position lookup, triangle index writes, face normals,
//! normalization and centroids. Built as both an `rlib` and a `cdylib`
//! exposing a C ABI for native hosts.

pub mod cli;
pub mod config;
pub mod ffi;
pub mod geometry;

pub use config::KernelConfig;
pub use geometry::{
    compute_centroid, compute_face_normal, find_equal_positions, normalize, write_triangle,
    GeometryError, MeshBuffers, Primitive, Vector3,
};
