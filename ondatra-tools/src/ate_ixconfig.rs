//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod config;

use clap::{App, Arg};
use config::{Config, LoggingFmtStyle};
use ondatra_ate::IxAte;
use ondatra_ate::topology::AteTopology;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

fn init_tracing(config: &config::Logging) {
    // Log to stderr, keeping stdout for the generated config.
    let stderr = config.enabled.then(|| {
        let log_level_filter = LevelFilter::from_level(tracing::Level::TRACE);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(config.show_thread_id)
            .with_file(config.show_source)
            .with_line_number(config.show_source)
            .with_ansi(config.colors);
        let layer = match config.style {
            LoggingFmtStyle::Compact => layer.compact().boxed(),
            LoggingFmtStyle::Full => layer.boxed(),
            LoggingFmtStyle::Json => layer.json().boxed(),
            LoggingFmtStyle::Pretty => layer.pretty().boxed(),
        };
        layer.with_filter(log_level_filter)
    });

    let directives = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV)
        .unwrap_or_else(|_| config.level.clone());
    let env_filter =
        tracing_subscriber::EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr)
        .init();
}

fn load_topology(filename: &str) -> Result<AteTopology, String> {
    let topology = std::fs::read_to_string(filename)
        .map_err(|error| format!("failed to read topology file: {error}"))?;
    serde_json::from_str(&topology)
        .map_err(|error| format!("failed to parse topology file: {error}"))
}

// ===== main =====

fn main() {
    // Parse command-line parameters.
    let matches = App::new("ATE IxNetwork config generator")
        .about("Translates an ATE topology into IxNetwork JSON config")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("file")
                .help("Specify an alternative configuration file."),
        )
        .arg(
            Arg::with_name("TOPOLOGY")
                .help("Topology file path")
                .required(true)
                .index(1),
        )
        .get_matches();

    // Read configuration file.
    let config = Config::load(matches.value_of("config"));

    // Initialize tracing.
    init_tracing(&config.logging);

    // Read topology file.
    let Some(filename) = matches.value_of("TOPOLOGY") else {
        eprintln!("missing topology file");
        std::process::exit(1);
    };
    let topology = match load_topology(filename) {
        Ok(topology) => topology,
        Err(error) => {
            eprintln!("{filename}: {error}");
            std::process::exit(1);
        }
    };
    debug!(interfaces = topology.interfaces.len(), "loaded topology");

    // Translate topology.
    let mut cfg = match IxAte::from_topology(&topology) {
        Ok(ate) => ate.into_config(),
        Err(error) => {
            let user_error = error.is_user_error();
            error!(%error, %user_error, "translation failed");
            eprintln!("invalid topology: {error}");
            std::process::exit(1);
        }
    };
    if config.output.xpaths {
        cfg.update_all_xpaths();
    }
    info!(topologies = cfg.topology.len(), "generated config");

    // Print config.
    let output = match config.output.pretty {
        true => serde_json::to_string_pretty(&cfg),
        false => serde_json::to_string(&cfg),
    };
    match output {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("failed to marshal config: {error}");
            std::process::exit(1);
        }
    }
}
