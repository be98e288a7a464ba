// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! stepwise - walkthroughs and an interactive stepper for lazy sequences
//!
//! This is the main entry point for the stepwise CLI/REPL.
//!
//! ## Features
//!
//! - Runnable walkthroughs of sources, stages and generators
//! - Parallel walkthrough execution with rayon
//! - One-shot pipeline evaluation from the command line
//! - Interactive REPL stepping a pipeline one item at a time

mod cli;
mod config;
mod error;
mod pipeline;
mod repl;
mod runner;
mod style;
mod walkthroughs;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use stepwise_core::SequenceExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, RunArgs};
use config::Config;
use error::StepwiseError;
use pipeline::Pipeline;
use runner::RunOptions;
use style::Style;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_cli(&cli);

    init_tracing(&cli, &config);

    match cli.command {
        Some(Commands::Run(ref args)) => run_walkthroughs(&cli, &mut config, args),
        None => run_walkthroughs(&cli, &mut config, &RunArgs::default()),
        Some(Commands::List) => {
            list_walkthroughs(Style::new(config.color));
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Eval(ref args)) => eval_pipeline(&args.text(), Style::new(config.color)),
        Some(Commands::Repl) => {
            let mut repl = repl::Repl::new(&config).context("Failed to initialize REPL")?;
            repl.run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins, then `--verbose`, then the configured level.
fn init_tracing(cli: &Cli, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cli.verbose {
            "debug"
        } else {
            config.log_level.as_str()
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(config.color),
        )
        .init();
}

fn run_walkthroughs(cli: &Cli, config: &mut Config, args: &RunArgs) -> anyhow::Result<ExitCode> {
    config.apply_run_args(args);
    let options = RunOptions::from_config(config);

    let report = runner::run(&walkthroughs::all(), &options);
    print!(
        "{}",
        runner::format_report(&report, Style::new(config.color), cli.quiet)
    );

    match report.into_result() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err @ StepwiseError::WalkthroughsFailed { .. }) => {
            tracing::debug!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn list_walkthroughs(style: Style) {
    let mut suite = None;
    for walkthrough in walkthroughs::all() {
        if suite != Some(walkthrough.suite) {
            suite = Some(walkthrough.suite);
            println!("{}", style.heading(walkthrough.suite));
        }
        println!("  {}", walkthrough.name);
    }
}

fn eval_pipeline(text: &str, style: Style) -> anyhow::Result<ExitCode> {
    let pipeline: Pipeline = match text.parse() {
        Ok(pipeline) => pipeline,
        Err(err) => {
            eprintln!("{}: {}", style.fail("Error"), err);
            return Ok(ExitCode::FAILURE);
        }
    };

    pipeline
        .build()
        .for_each(|value| println!("{}", repl::format_value(&value, style)));
    Ok(ExitCode::SUCCESS)
}
