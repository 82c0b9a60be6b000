// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! C ABI for native hosts
//!
//! All functions are prefixed `mb_`. Fallible calls return an [`MbStatus`]
//! and write results through out-pointers. Buffers passed in stay owned by
//! the caller; the only memory handed back is [`IntArray`], which must be
//! released with [`mb_free_int_array`].

use crate::geometry::{
    compute_centroid, compute_face_normal, find_equal_positions, normalize, write_quad,
    write_triangle, GeometryError, Vector3,
};
use std::os::raw::c_char;
use std::ptr;

/// Status code returned by fallible C ABI calls
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbStatus {
    Ok = 0,
    NullPointer = 1,
    OutOfRange = 2,
    ZeroLength = 3,
    EmptyInput = 4,
    InvalidArgument = 5,
}

impl From<&GeometryError> for MbStatus {
    fn from(err: &GeometryError) -> Self {
        match err {
            GeometryError::IndexOutOfRange { .. }
            | GeometryError::OffsetOutOfRange { .. }
            | GeometryError::FaceOutOfRange { .. } => Self::OutOfRange,
            GeometryError::ZeroLength => Self::ZeroLength,
            GeometryError::EmptyInput => Self::EmptyInput,
            GeometryError::NonFinite
            | GeometryError::MalformedTriangles { .. }
            | GeometryError::FaceNotFound { .. }
            | GeometryError::UnknownPrimitive(_) => Self::InvalidArgument,
        }
    }
}

/// Library-owned array of vertex indices
#[repr(C)]
#[derive(Debug)]
pub struct IntArray {
    pub array: *mut i32,
    pub size: i32,
}

impl IntArray {
    fn empty() -> Self {
        Self {
            array: ptr::null_mut(),
            size: 0,
        }
    }

    fn from_vec(values: Vec<i32>) -> Self {
        if values.is_empty() {
            return Self::empty();
        }
        let boxed = values.into_boxed_slice();
        let size = boxed.len() as i32;
        Self {
            array: Box::into_raw(boxed) as *mut i32,
            size,
        }
    }
}

unsafe fn slice_from<'a, T>(data: *const T, len: i32) -> Result<&'a [T], MbStatus> {
    let len = usize::try_from(len).map_err(|_| MbStatus::InvalidArgument)?;
    if len == 0 {
        return Ok(&[]);
    }
    if data.is_null() {
        return Err(MbStatus::NullPointer);
    }
    Ok(std::slice::from_raw_parts(data, len))
}

unsafe fn slice_from_mut<'a, T>(data: *mut T, len: i32) -> Result<&'a mut [T], MbStatus> {
    let len = usize::try_from(len).map_err(|_| MbStatus::InvalidArgument)?;
    if len == 0 {
        return Ok(&mut []);
    }
    if data.is_null() {
        return Err(MbStatus::NullPointer);
    }
    Ok(std::slice::from_raw_parts_mut(data, len))
}

fn status_of<T>(result: Result<T, GeometryError>) -> MbStatus {
    match result {
        Ok(_) => MbStatus::Ok,
        Err(err) => MbStatus::from(&err),
    }
}

/// Find every vertex at the exact position of `vertices[index]`.
///
/// # Safety
///
/// `vertices` must point to `length` readable `Vector3` values and `out`
/// must be a valid, writable `IntArray`. On success `out` owns an array
/// that must be released with [`mb_free_int_array`].
#[no_mangle]
pub unsafe extern "C" fn mb_find_equal_positions(
    vertices: *const Vector3,
    length: i32,
    index: i32,
    out: *mut IntArray,
) -> MbStatus {
    if out.is_null() {
        return MbStatus::NullPointer;
    }
    out.write(IntArray::empty());

    let vertices = match slice_from(vertices, length) {
        Ok(vertices) => vertices,
        Err(status) => return status,
    };
    let Ok(index) = usize::try_from(index) else {
        return MbStatus::InvalidArgument;
    };

    match find_equal_positions(vertices, index) {
        Ok(indices) => {
            // Indices are below `length`, which fits in i32
            out.write(IntArray::from_vec(
                indices.into_iter().map(|i| i as i32).collect(),
            ));
            MbStatus::Ok
        }
        Err(err) => MbStatus::from(&err),
    }
}

/// Release an array returned by [`mb_find_equal_positions`].
///
/// # Safety
///
/// `array` must come from this library and must not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn mb_free_int_array(array: IntArray) {
    let Ok(size) = usize::try_from(array.size) else {
        return;
    };
    if array.array.is_null() || size == 0 {
        return;
    }
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(array.array, size)));
}

/// Write three corner indices into `triangles[begin..begin + 3]`.
///
/// # Safety
///
/// `triangles` must point to `length` writable ints and `corners` to three
/// readable ints.
#[no_mangle]
pub unsafe extern "C" fn mb_write_triangle(
    begin: i32,
    triangles: *mut i32,
    length: i32,
    corners: *const i32,
) -> MbStatus {
    let Ok(begin) = usize::try_from(begin) else {
        return MbStatus::InvalidArgument;
    };
    let corners = match slice_from(corners, 3) {
        Ok(&[a, b, c]) => [a, b, c],
        Ok(_) => return MbStatus::InvalidArgument,
        Err(status) => return status,
    };
    match slice_from_mut(triangles, length) {
        Ok(buffer) => status_of(write_triangle(buffer, begin, corners)),
        Err(status) => status,
    }
}

/// Write a quad as two triangles into `triangles[begin..begin + 6]`.
///
/// # Safety
///
/// `triangles` must point to `length` writable ints and `corners` to four
/// readable ints.
#[no_mangle]
pub unsafe extern "C" fn mb_write_quad(
    begin: i32,
    triangles: *mut i32,
    length: i32,
    corners: *const i32,
) -> MbStatus {
    let Ok(begin) = usize::try_from(begin) else {
        return MbStatus::InvalidArgument;
    };
    let corners = match slice_from(corners, 4) {
        Ok(&[a, b, c, d]) => [a, b, c, d],
        Ok(_) => return MbStatus::InvalidArgument,
        Err(status) => return status,
    };
    match slice_from_mut(triangles, length) {
        Ok(buffer) => status_of(write_quad(buffer, begin, corners)),
        Err(status) => status,
    }
}

/// Unnormalized cross product of `a - reference` and `b - reference`
#[no_mangle]
pub extern "C" fn mb_compute_face_normal(a: Vector3, b: Vector3, reference: Vector3) -> Vector3 {
    compute_face_normal(a, b, reference)
}

/// Normalize `v` into `out`.
///
/// # Safety
///
/// `out` must be a valid, writable `Vector3`.
#[no_mangle]
pub unsafe extern "C" fn mb_normalize(v: Vector3, out: *mut Vector3) -> MbStatus {
    if out.is_null() {
        return MbStatus::NullPointer;
    }
    match normalize(v) {
        Ok(unit) => {
            out.write(unit);
            MbStatus::Ok
        }
        Err(err) => MbStatus::from(&err),
    }
}

/// Centroid of `size` points into `out`.
///
/// # Safety
///
/// `points` must point to `size` readable `Vector3` values and `out` must
/// be a valid, writable `Vector3`.
#[no_mangle]
pub unsafe extern "C" fn mb_compute_centroid(
    points: *const Vector3,
    size: i32,
    out: *mut Vector3,
) -> MbStatus {
    if out.is_null() {
        return MbStatus::NullPointer;
    }
    let points = match slice_from(points, size) {
        Ok(points) => points,
        Err(status) => return status,
    };
    match compute_centroid(points) {
        Ok(center) => {
            out.write(center);
            MbStatus::Ok
        }
        Err(err) => MbStatus::from(&err),
    }
}

/// Library version as a static NUL-terminated string
#[no_mangle]
pub extern "C" fn mb_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_find_equal_positions_roundtrip() {
        let vertices = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
        ];
        let mut out = IntArray::empty();

        let status = unsafe { mb_find_equal_positions(vertices.as_ptr(), 3, 0, &mut out) };
        assert_eq!(status, MbStatus::Ok);
        assert_eq!(out.size, 2);

        let indices = unsafe { std::slice::from_raw_parts(out.array, out.size as usize) };
        assert_eq!(indices, &[0, 2]);

        unsafe { mb_free_int_array(out) };
    }

    #[test]
    fn test_find_equal_positions_errors() {
        let vertices = [Vector3::ZERO];
        let mut out = IntArray::empty();

        unsafe {
            assert_eq!(
                mb_find_equal_positions(vertices.as_ptr(), 1, 1, &mut out),
                MbStatus::OutOfRange
            );
            assert!(out.array.is_null());
            assert_eq!(
                mb_find_equal_positions(vertices.as_ptr(), 1, -1, &mut out),
                MbStatus::InvalidArgument
            );
            assert_eq!(
                mb_find_equal_positions(ptr::null(), 1, 0, &mut out),
                MbStatus::NullPointer
            );
            assert_eq!(
                mb_find_equal_positions(vertices.as_ptr(), 1, 0, ptr::null_mut()),
                MbStatus::NullPointer
            );
        }
    }

    #[test]
    fn test_write_triangle() {
        let mut triangles = [0i32; 6];
        let corners = [4, 5, 6];

        unsafe {
            assert_eq!(
                mb_write_triangle(3, triangles.as_mut_ptr(), 6, corners.as_ptr()),
                MbStatus::Ok
            );
            assert_eq!(
                mb_write_triangle(4, triangles.as_mut_ptr(), 6, corners.as_ptr()),
                MbStatus::OutOfRange
            );
        }
        assert_eq!(triangles, [0, 0, 0, 4, 5, 6]);
    }

    #[test]
    fn test_write_quad() {
        let mut triangles = [0i32; 6];
        let corners = [1, 2, 3, 4];

        let status = unsafe { mb_write_quad(0, triangles.as_mut_ptr(), 6, corners.as_ptr()) };
        assert_eq!(status, MbStatus::Ok);
        assert_eq!(triangles, [1, 2, 3, 4, 3, 2]);
    }

    #[test]
    fn test_normalize_and_centroid() {
        let mut out = Vector3::ZERO;

        unsafe {
            assert_eq!(mb_normalize(Vector3::new(0.0, 0.0, 2.0), &mut out), MbStatus::Ok);
            assert_eq!(out, Vector3::new(0.0, 0.0, 1.0));
            assert_eq!(mb_normalize(Vector3::ZERO, &mut out), MbStatus::ZeroLength);

            let points = [Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0)];
            assert_eq!(mb_compute_centroid(points.as_ptr(), 2, &mut out), MbStatus::Ok);
            assert_eq!(out, Vector3::new(1.0, 1.0, 0.0));
            assert_eq!(
                mb_compute_centroid(ptr::null(), 0, &mut out),
                MbStatus::EmptyInput
            );
        }
    }

    #[test]
    fn test_face_normal_and_version() {
        let n = mb_compute_face_normal(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::ZERO,
        );
        assert_eq!(n, Vector3::new(0.0, 0.0, 1.0));

        let version = unsafe { CStr::from_ptr(mb_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
