// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Configuration management for stepwise.
//!
//! Layers, later wins: built-in defaults, the user config file, a
//! `stepwise.toml` in the working directory, an explicit `--config` file,
//! `STEPWISE_*` environment variables, then command line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::{Cli, RunArgs};
use crate::error::{Result, StepwiseError};

/// Project-local config file name.
pub const PROJECT_CONFIG: &str = "stepwise.toml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "STEPWISE_";

/// Configuration for stepwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Colourise output
    pub color: bool,

    /// Run walkthroughs on the rayon pool
    pub parallel: bool,

    /// Stop after the first failing walkthrough
    pub fail_fast: bool,

    /// Only run walkthroughs whose name contains this text
    pub filter: Option<String>,

    /// Default tracing filter
    pub log_level: String,

    /// REPL history length
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            parallel: false,
            fail_fast: false,
            filter: None,
            log_level: "warn".to_string(),
            history_size: 1000,
        }
    }
}

/// One config file. Every key is optional so a file only overrides what it
/// names.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    color: Option<bool>,
    parallel: Option<bool>,
    fail_fast: Option<bool>,
    filter: Option<String>,
    log_level: Option<String>,
    history_size: Option<usize>,
}

impl Config {
    /// Load configuration from default locations, the optional explicit
    /// file, and the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                config.merge_from_file(&user_config_path)?;
            }
        }

        let project = PathBuf::from(PROJECT_CONFIG);
        if project.exists() {
            config.merge_from_file(&project)?;
        }

        // an explicit file must exist
        if let Some(path) = explicit {
            config.merge_from_file(path)?;
        }

        config.load_from_env(std::env::vars());

        Ok(config)
    }

    /// Merge configuration from a TOML file.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        self.merge_from_str(&content)
            .map_err(|source| StepwiseError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Merged config from {}", path.display());
        Ok(())
    }

    fn merge_from_str(&mut self, content: &str) -> std::result::Result<(), toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;

        if let Some(color) = file.color {
            self.color = color;
        }
        if let Some(parallel) = file.parallel {
            self.parallel = parallel;
        }
        if let Some(fail_fast) = file.fail_fast {
            self.fail_fast = fail_fast;
        }
        if file.filter.is_some() {
            self.filter = file.filter;
        }
        if let Some(log_level) = file.log_level {
            self.log_level = log_level;
        }
        if let Some(history_size) = file.history_size {
            self.history_size = history_size;
        }
        Ok(())
    }

    /// Apply `STEPWISE_*` variables from `vars`.
    pub fn load_from_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(config_key) = key.strip_prefix(ENV_PREFIX) {
                let config_key = config_key.to_lowercase();
                self.set(&config_key, &value);
            }
        }
    }

    /// Set a configuration value from text. Values that do not parse leave
    /// the setting unchanged.
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            "color" => set_flag(&mut self.color, value),
            "parallel" => set_flag(&mut self.parallel, value),
            "fail_fast" => set_flag(&mut self.fail_fast, value),
            "filter" => {
                self.filter = Some(value.to_string()).filter(|f| !f.is_empty());
            }
            "log_level" => self.log_level = value.to_string(),
            "history_size" => {
                if let Ok(n) = value.parse() {
                    self.history_size = n;
                }
            }
            _ => debug!("Ignoring unknown config key '{}'", key),
        }
    }

    /// Apply global command line flags.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.no_color {
            self.color = false;
        }
    }

    /// Apply `run` command flags.
    pub fn apply_run_args(&mut self, args: &RunArgs) {
        if args.filter.is_some() {
            self.filter = args.filter.clone();
        }
        if args.fail_fast {
            self.fail_fast = true;
        }
        if args.parallel {
            self.parallel = true;
        }
    }
}

fn set_flag(flag: &mut bool, value: &str) {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => *flag = true,
        "0" | "false" | "no" | "off" => *flag = false,
        _ => debug!("Ignoring non-boolean config value '{}'", value),
    }
}

/// Get the user config path.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stepwise").join("config.toml"))
}
