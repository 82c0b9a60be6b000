// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for geometry operations

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised by the geometry kernel.
///
/// Every operation checks its inputs before writing anything, so an error
/// never leaves a caller's buffer partially modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Vertex index past the end of the vertex buffer
    #[error("vertex index {index} out of range (buffer has {len} vertices)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Triangle write would run past the end of the index buffer
    #[error("write at offset {offset} out of range (index buffer has {len} entries)")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// Face number past the last triangle
    #[error("face {face} out of range (mesh has {count} triangles)")]
    FaceOutOfRange { face: usize, count: usize },

    /// Normalizing a vector of length zero
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// Vector length is NaN or infinite
    #[error("vector length is not finite")]
    NonFinite,

    /// Operation needs at least one input point
    #[error("input is empty")]
    EmptyInput,

    /// Triangle index buffer length is not a multiple of three
    #[error("triangle index buffer length {len} is not a multiple of 3")]
    MalformedTriangles { len: usize },

    /// Face is not present in the triangle index buffer
    #[error("face {corners:?} not found in triangle index buffer")]
    FaceNotFound { corners: [u32; 3] },

    /// Primitive name not recognized
    #[error("unknown primitive: {0}")]
    UnknownPrimitive(String),
}
