// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - vector type, kernel operations and mesh buffers

mod bbox;
mod error;
mod mesh;
mod ops;
mod primitives;
mod vector;

pub use bbox::BoundingBox;
pub use error::{GeometryError, Result};
pub use mesh::MeshBuffers;
pub use ops::{
    compute_centroid, compute_face_normal, find_equal_positions, normalize, write_quad,
    write_triangle,
};
pub use primitives::Primitive;
pub use vector::Vector3;
