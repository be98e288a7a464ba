// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Walkthrough runner.
//!
//! Runs a set of walkthroughs sequentially or on the rayon pool, turns
//! panics into failures and renders a report grouped by suite.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, StepwiseError};
use crate::style::Style;
use crate::walkthroughs::{Check, Walkthrough};

/// How to run a batch of walkthroughs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub filter: Option<String>,
    /// Ignored in parallel mode, where every walkthrough is already running
    pub fail_fast: bool,
    pub parallel: bool,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            filter: config.filter.clone(),
            fail_fast: config.fail_fast,
            parallel: config.parallel,
        }
    }
}

/// Result of one walkthrough.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub walkthrough: Walkthrough,
    pub result: Check,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything a run produced, in walkthrough order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
    /// Walkthroughs matched by the filter but not run because of fail-fast
    pub skipped: usize,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len() + self.skipped
    }

    /// `Err(WalkthroughsFailed)` when anything failed.
    pub fn into_result(self) -> Result<Self> {
        let failed = self.failed();
        if failed > 0 {
            return Err(StepwiseError::WalkthroughsFailed {
                failed,
                total: self.total(),
            });
        }
        Ok(self)
    }
}

/// Run every walkthrough in `walkthroughs` selected by `options`.
pub fn run(walkthroughs: &[Walkthrough], options: &RunOptions) -> Report {
    let selected: Vec<Walkthrough> = walkthroughs
        .iter()
        .filter(|w| options.filter.as_deref().is_none_or(|f| w.matches(f)))
        .copied()
        .collect();
    info!(
        selected = selected.len(),
        parallel = options.parallel,
        "running walkthroughs"
    );

    if options.parallel {
        let outcomes = selected.par_iter().map(|w| run_one(*w)).collect();
        return Report {
            outcomes,
            skipped: 0,
        };
    }

    let mut report = Report::default();
    for (index, walkthrough) in selected.iter().enumerate() {
        let outcome = run_one(*walkthrough);
        let failed = !outcome.passed();
        report.outcomes.push(outcome);
        if failed && options.fail_fast {
            report.skipped = selected.len() - index - 1;
            debug!(skipped = report.skipped, "stopping at first failure");
            break;
        }
    }
    report
}

/// Run a single walkthrough, catching panics.
pub fn run_one(walkthrough: Walkthrough) -> Outcome {
    let start = Instant::now();
    let result = match panic::catch_unwind(AssertUnwindSafe(walkthrough.run)) {
        Ok(result) => result,
        Err(payload) => Err(panic_message(payload.as_ref())),
    };
    let elapsed = start.elapsed();
    debug!(
        suite = walkthrough.suite,
        name = walkthrough.name,
        passed = result.is_ok(),
        "walkthrough finished"
    );
    Outcome {
        walkthrough,
        result,
        elapsed,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic")
    };
    format!("panicked: {message}")
}

/// Render a report. Quiet mode keeps only failures and the summary line.
pub fn format_report(report: &Report, style: Style, quiet: bool) -> String {
    let mut out = String::new();
    let mut suite = None;

    for outcome in &report.outcomes {
        if quiet && outcome.passed() {
            continue;
        }
        if suite != Some(outcome.walkthrough.suite) {
            suite = Some(outcome.walkthrough.suite);
            out.push_str(&style.heading(outcome.walkthrough.suite));
            out.push('\n');
        }
        out.push_str(&format_outcome(outcome, style));
    }

    if !report.outcomes.is_empty() {
        out.push('\n');
    }
    out.push_str(&format_summary(report, style));
    out.push('\n');
    out
}

/// One walkthrough line, plus the failure reason indented below it.
pub fn format_outcome(outcome: &Outcome, style: Style) -> String {
    let timing = style.dim(&format!("({}ms)", outcome.elapsed.as_millis()));
    match &outcome.result {
        Ok(()) => format!(
            "  {} {} {}\n",
            style.pass("✓"),
            outcome.walkthrough.name,
            timing
        ),
        Err(reason) => {
            let mut line = format!(
                "  {} {} {}\n",
                style.fail("✗"),
                outcome.walkthrough.name,
                timing
            );
            for reason_line in reason.lines() {
                line.push_str(&format!("      {}\n", style.dim(reason_line)));
            }
            line
        }
    }
}

fn format_summary(report: &Report, style: Style) -> String {
    let mut summary = format!(
        "{} passed, {} failed",
        style.pass(&report.passed().to_string()),
        if report.failed() > 0 {
            style.fail(&report.failed().to_string())
        } else {
            report.failed().to_string()
        }
    );
    if report.skipped > 0 {
        summary.push_str(&format!(", {} skipped", report.skipped));
    }
    summary.push_str(&format!(" ({} total)", report.total()));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> Check {
        Ok(())
    }

    fn broken() -> Check {
        Err("expected 3\ngot 4".to_string())
    }

    fn panics() -> Check {
        panic!("boom")
    }

    fn sample() -> Vec<Walkthrough> {
        vec![
            Walkthrough::new("Alpha", "first", ok),
            Walkthrough::new("Alpha", "second", broken),
            Walkthrough::new("Beta", "third", ok),
        ]
    }

    #[test]
    fn test_sequential_run_reports_all() {
        let report = run(&sample(), &RunOptions::default());
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.total(), 3);
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_fail_fast_skips_the_rest() {
        let options = RunOptions {
            fail_fast: true,
            ..RunOptions::default()
        };
        let report = run(&sample(), &options);
        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_filter_selects_by_suite() {
        let options = RunOptions {
            filter: Some("beta".to_string()),
            ..RunOptions::default()
        };
        let report = run(&sample(), &options);
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].walkthrough.name, "third");
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_parallel_keeps_order() {
        let options = RunOptions {
            parallel: true,
            fail_fast: true,
            ..RunOptions::default()
        };
        let report = run(&sample(), &options);
        let names: Vec<_> = report.outcomes.iter().map(|o| o.walkthrough.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_panic_becomes_failure() {
        let outcome = run_one(Walkthrough::new("Alpha", "panics", panics));
        assert_eq!(outcome.result, Err("panicked: boom".to_string()));
    }

    #[test]
    fn test_format_report_plain() {
        let report = run(&sample(), &RunOptions::default());
        let text = format_report(&report, Style::new(false), false);
        assert!(text.contains("Alpha\n"));
        assert!(text.contains("✓ first"));
        assert!(text.contains("✗ second"));
        assert!(text.contains("      expected 3\n      got 4\n"));
        assert!(text.ends_with("2 passed, 1 failed (3 total)\n"));
    }

    #[test]
    fn test_quiet_report_hides_passes() {
        let report = run(&sample(), &RunOptions::default());
        let text = format_report(&report, Style::new(false), true);
        assert!(!text.contains("first"));
        assert!(!text.contains("Beta"));
        assert!(text.contains("✗ second"));
    }
}
