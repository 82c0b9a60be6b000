// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! MeshBuilder CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meshbuilder::cli::{parse_vector, to_json, Reporter};
use meshbuilder::geometry::{
    compute_centroid, compute_face_normal, find_equal_positions, normalize, Primitive, Vector3,
};
use meshbuilder::KernelConfig;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meshbuilder")]
#[command(about = "MeshBuilder - geometry kernel for triangulated meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Compact JSON output
    #[arg(long, global = true)]
    compact: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a built-in primitive mesh as JSON
    Primitive {
        /// Primitive name (cube, cone, door)
        name: Primitive,
    },

    /// Show a summary of a built-in primitive
    Info {
        /// Primitive name (cube, cone, door)
        name: Primitive,
    },

    /// List vertices sharing the position of a given vertex
    Duplicates {
        /// Primitive name (cube, cone, door)
        name: Primitive,

        /// Vertex index
        #[arg(short, long)]
        index: usize,
    },

    /// Face normal of (a - reference) x (b - reference)
    Normal {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        a: Vector3,

        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        b: Vector3,

        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        reference: Vector3,

        /// Normalize the result
        #[arg(short, long)]
        unit: bool,
    },

    /// Centroid of the given points
    Centroid {
        /// Points as x,y,z
        #[arg(required = true, value_parser = parse_vector, allow_hyphen_values = true)]
        points: Vec<Vector3>,
    },

    /// Extrude one face of a built-in primitive and print the result
    Extrude {
        /// Primitive name (cube, cone, door)
        name: Primitive,

        /// Face number
        #[arg(short, long)]
        face: usize,

        /// Extrusion distance (defaults to the configured value)
        #[arg(short, long, allow_hyphen_values = true)]
        distance: Option<f32>,
    },

    /// Show version information
    Version,
}

fn main() {
    if let Err(err) = run() {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = KernelConfig::load()?;
    if cli.compact {
        config.pretty_json = false;
    }
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Primitive { name } => {
            emit(&name.to_mesh(), &config)?;
        }
        Commands::Info { name } => {
            Reporter::report_mesh(name.name(), &name.to_mesh());
        }
        Commands::Duplicates { name, index } => {
            let mesh = name.to_mesh();
            let indices = find_equal_positions(&mesh.vertices, index)
                .with_context(|| format!("Failed to search {}", name))?;
            emit(&indices, &config)?;
        }
        Commands::Normal {
            a,
            b,
            reference,
            unit,
        } => {
            let mut result = compute_face_normal(a, b, reference);
            if unit {
                result = normalize(result).context("Failed to normalize face normal")?;
            }
            emit(&result, &config)?;
        }
        Commands::Centroid { points } => {
            emit(&compute_centroid(&points)?, &config)?;
        }
        Commands::Extrude {
            name,
            face,
            distance,
        } => {
            let distance = distance.unwrap_or(config.extrude_distance);
            let mut mesh = name.to_mesh();
            let corners = mesh.triangle(face)?;
            let cap = mesh
                .extrude_face(corners, distance)
                .with_context(|| format!("Failed to extrude face {} of {}", face, name))?;

            if cli.verbose {
                Reporter::report_extrusion(name.name(), face, cap, &mesh);
            }
            emit(&mesh, &config)?;
        }
        Commands::Version => {
            println!("MeshBuilder v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn init_logging(config: &KernelConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T: Serialize>(value: &T, config: &KernelConfig) -> Result<()> {
    println!("{}", to_json(value, config.pretty_json)?);
    Ok(())
}
