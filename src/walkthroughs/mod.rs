// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Runnable walkthroughs of the sequence library.
//!
//! Each walkthrough is a small, self-contained example that either passes
//! or explains what went wrong. They are grouped into suites the same way
//! the runner reports them.

mod arrays;
mod comprehensions;
mod generators;
mod iterators;

/// Outcome of a single walkthrough body.
pub type Check = Result<(), String>;

/// One runnable example.
#[derive(Debug, Clone, Copy)]
pub struct Walkthrough {
    pub suite: &'static str,
    pub name: &'static str,
    pub run: fn() -> Check,
}

impl Walkthrough {
    pub const fn new(suite: &'static str, name: &'static str, run: fn() -> Check) -> Self {
        Self { suite, name, run }
    }

    /// Case-insensitive substring match on suite or name.
    pub fn matches(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.suite.to_lowercase().contains(&filter) || self.name.to_lowercase().contains(&filter)
    }
}

/// Every walkthrough, in suite order.
pub fn all() -> Vec<Walkthrough> {
    let mut all = Vec::new();
    all.extend_from_slice(iterators::WALKTHROUGHS);
    all.extend_from_slice(generators::WALKTHROUGHS);
    all.extend_from_slice(comprehensions::WALKTHROUGHS);
    all.extend_from_slice(arrays::WALKTHROUGHS);
    all
}
