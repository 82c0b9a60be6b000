// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for the mesh builder

pub mod reporter;

pub use reporter::Reporter;

use crate::geometry::Vector3;
use anyhow::{Context, Result};
use serde::Serialize;

/// Parse an `x,y,z` command-line argument
pub fn parse_vector(s: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got '{}'", s));
    };

    let component = |part: &str| {
        part.parse::<f32>()
            .map_err(|e| format!("invalid component '{}': {}", part, e))
    };
    Ok(Vector3::new(component(*x)?, component(*y)?, component(*z)?))
}

/// Serialize a value as JSON text
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}
