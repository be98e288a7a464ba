// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the stepwise binary

use std::path::PathBuf;
use thiserror::Error;

/// Result type for stepwise operations
pub type Result<T> = std::result::Result<T, StepwiseError>;

/// Errors that can occur in the stepwise binary
#[derive(Debug, Error)]
pub enum StepwiseError {
    /// Pipeline text could not be parsed
    #[error("Pipeline error at stage {position}: {message}")]
    Pipeline {
        /// 1-based stage position, the source being stage 1
        position: usize,
        /// What was wrong
        message: String,
    },

    /// A REPL stepping command arrived before any pipeline
    #[error("No pipeline loaded; enter one first, e.g. `range 1 5 | map double`")]
    NoPipeline,

    /// Config file could not be parsed
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        /// File being read
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Line editor error
    #[error("REPL error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// One or more walkthroughs failed
    #[error("{failed} of {total} walkthroughs failed")]
    WalkthroughsFailed {
        /// Number of failures
        failed: usize,
        /// Number of walkthroughs run
        total: usize,
    },
}

impl StepwiseError {
    /// Create a pipeline parse error at `position`
    pub fn pipeline(position: usize, message: impl Into<String>) -> Self {
        Self::Pipeline {
            position,
            message: message.into(),
        }
    }
}
