// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CLI argument parsing for stepwise.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// stepwise - walkthroughs and an interactive stepper for lazy sequences
#[derive(Parser, Debug)]
#[command(name = "stepwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only report failures and the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Read configuration from this file as well
    #[arg(long, global = true, value_name = "PATH", env = "STEPWISE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the walkthrough suite (default)
    #[command(alias = "r")]
    Run(RunArgs),

    /// List suites and walkthroughs
    #[command(alias = "ls")]
    List,

    /// Build a pipeline, drain it and print every item
    #[command(alias = "e")]
    Eval(EvalArgs),

    /// Step through pipelines interactively
    Repl,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Only run walkthroughs whose suite or name contains this text
    pub filter: Option<String>,

    /// Stop at the first failure
    #[arg(long)]
    pub fail_fast: bool,

    /// Run walkthroughs in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    /// Pipeline text, e.g. `list Purple Green Paras | filter starts-with p | take 2`
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub pipeline: Vec<String>,
}

impl EvalArgs {
    /// The pipeline words joined back into one line.
    pub fn text(&self) -> String {
        self.pipeline.join(" ")
    }
}
