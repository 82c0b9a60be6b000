// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{MeshBuffers, Vector3};
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report mesh summary
    pub fn report_mesh(name: &str, mesh: &MeshBuffers) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {}", "Mesh:".bold(), name.cyan());
        println!("{}", "━".repeat(60).bright_black());
        Self::print_field("Vertices", &mesh.vertex_count().to_string());
        Self::print_field("Triangles", &mesh.triangle_count().to_string());

        let bbox = mesh.bounding_box();
        if bbox.is_empty() {
            Self::print_field("Bounds", "empty");
        } else {
            Self::print_field("Min", &Self::format_vector(bbox.min));
            Self::print_field("Max", &Self::format_vector(bbox.max));
            Self::print_field("Size", &Self::format_vector(bbox.size()));
        }
        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report extrusion result
    pub fn report_extrusion(name: &str, face: usize, cap: [u32; 3], mesh: &MeshBuffers) {
        eprintln!(
            "{} extruded face {} of {} -> cap {:?} ({} vertices, {} triangles)",
            "✅".green(),
            face.to_string().cyan(),
            name.cyan(),
            cap,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    fn print_field(name: &str, value: &str) {
        println!("  {} {}", format!("{}:", name).bright_black(), value.cyan());
    }

    fn format_vector(v: Vector3) -> String {
        format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vector() {
        assert_eq!(
            Reporter::format_vector(Vector3::new(1.0, -0.5, 2.0 / 3.0)),
            "(1.000, -0.500, 0.667)"
        );
    }
}
