// ABOUTME: HTTP server binary for fitness plan and motivation quote generation
// ABOUTME: Loads environment configuration, initializes logging and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pierre Planner Server Binary
//!
//! Serves `POST /api/generate-plan`, `GET /api/generate-motivation`,
//! `GET /health` and `GET /ready`.

use anyhow::Result;
use clap::Parser;
use pierre_planner::{config::ServerConfig, logging, server};
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "pierre-planner-server")]
#[command(about = "Pierre Planner - fitness plans and motivation quotes with rule-based fallback")]
struct Args {
    /// Override interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Pin the fallback random source
    #[arg(long)]
    fallback_seed: Option<u64>,
}

impl Args {
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(http_port) = self.http_port {
            config.http_port = http_port;
        }
        if let Some(seed) = self.fallback_seed {
            config.generation.fallback_seed = Some(seed);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = args.apply(ServerConfig::from_env()?);

    logging::init_from_env()?;

    info!("Starting Pierre Planner server");
    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}
