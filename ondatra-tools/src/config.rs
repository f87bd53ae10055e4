//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![allow(clippy::derivable_impls)]

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: Logging,
    pub output: Output,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logging {
    pub enabled: bool,
    pub level: String,
    pub style: LoggingFmtStyle,
    pub colors: bool,
    pub show_thread_id: bool,
    pub show_source: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingFmtStyle {
    Compact,
    Full,
    Json,
    Pretty,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Output {
    // Pretty-print the generated JSON.
    pub pretty: bool,
    // Populate the XPaths of the generated config.
    pub xpaths: bool,
}

// ===== impl Config =====

impl Config {
    const DFLT_FILEPATH: &'static str = "/etc/ondatra/ate-ixconfig.toml";

    pub(crate) fn load(config_file: Option<&str>) -> Config {
        let config_file = config_file.unwrap_or(Config::DFLT_FILEPATH);

        match std::fs::read_to_string(config_file) {
            Ok(config_str) => match toml::from_str(&config_str) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("Failed to parse configuration file: {err}");
                    std::process::exit(1);
                }
            },
            Err(err) => {
                eprintln!("Failed to load configuration file: {err}");
                eprintln!("Falling back to default configuration...");
                Config::default()
            }
        }
    }
}

// ===== impl Logging =====

impl Default for Logging {
    fn default() -> Logging {
        Logging {
            enabled: true,
            level: "ondatra=info,ate_ixconfig=info".to_owned(),
            style: LoggingFmtStyle::Compact,
            colors: false,
            show_thread_id: false,
            show_source: false,
        }
    }
}

// ===== impl Output =====

impl Default for Output {
    fn default() -> Output {
        Output {
            pretty: true,
            xpaths: true,
        }
    }
}
