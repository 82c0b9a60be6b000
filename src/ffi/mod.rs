// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! FFI bindings for C, WASM and Node.js

pub mod capi;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "napi")]
pub mod bindings;

#[cfg(any(feature = "wasm", feature = "napi"))]
mod flat;
