// ABOUTME: Pierre Planner CLI - operator tool for plan generation, quotes and response repair
// ABOUTME: Runs the same orchestration as the HTTP server, online or fully offline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a plan for a profile (wrapped or bare JSON)
//! pierre-planner-cli plan --profile profile.json
//!
//! # Richer plan, synthesized locally with a pinned seed
//! pierre-planner-cli plan --profile profile.json --regenerate --offline --seed 7
//!
//! # Three motivation quotes
//! pierre-planner-cli quotes
//!
//! # Replay captured generator output through the repair pipeline
//! pierre-planner-cli repair --shape array captured-quotes.txt
//!
//! # Replay a captured plan response through repair and plan validation
//! pierre-planner-cli repair --plan captured-plan.txt
//! ```

mod commands;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pierre_planner::errors::AppResult;
use pierre_planner::intelligence::ExpectedShape;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pierre-planner-cli",
    about = "Pierre Planner operator CLI",
    long_about = "Generate fitness plans and motivation quotes from the command line, and replay captured generator output through the repair pipeline."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a fitness plan for a profile file
    Plan {
        /// JSON file holding `{ "profile": {...}, "isRegenerate": bool }` or a bare profile
        #[arg(long)]
        profile: PathBuf,

        /// Ask for the richer plan (6 exercises per day, 8 tips)
        #[arg(long)]
        regenerate: bool,

        /// Skip the generator and synthesize the plan locally
        #[arg(long)]
        offline: bool,

        /// Pin the fallback random source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate motivation quotes
    Quotes {
        /// Skip the generator and pick a built-in quote set
        #[arg(long)]
        offline: bool,

        /// Pin the fallback random source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run captured generator output through the repair pipeline
    Repair {
        /// Expected top-level shape
        #[arg(long, value_enum, required_unless_present = "plan", conflicts_with = "plan")]
        shape: Option<ShapeArg>,

        /// Validate the repaired object as a complete plan (implies the object shape)
        #[arg(long)]
        plan: bool,

        /// Validate against the richer plan contract
        #[arg(long, requires = "plan")]
        regenerate: bool,

        /// File holding the raw generator text
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    Array,
    Object,
}

impl From<ShapeArg> for ExpectedShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Array => Self::Array,
            ShapeArg::Object => Self::Object,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Plan {
            profile,
            regenerate,
            offline,
            seed,
        } => commands::plan::run(&profile, regenerate, offline, seed).await,
        Command::Quotes { offline, seed } => commands::quotes::run(offline, seed).await,
        Command::Repair {
            shape,
            plan,
            regenerate,
            input,
        } => {
            let shape = if plan {
                ExpectedShape::Object
            } else {
                shape.map_or(ExpectedShape::Object, ExpectedShape::from)
            };
            commands::repair::run(&input, shape, plan, regenerate)
        }
    }
}
