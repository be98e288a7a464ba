// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Bounded early termination.

use tracing::trace;

use crate::sequence::Sequence;
use crate::step::Step;

/// Yields at most `max` items of the wrapped sequence.
///
/// Once `max` items have been produced the stage finishes without touching
/// the source again, even if the source has more. A bound of zero finishes
/// on the first step with no pulls at all.
#[derive(Debug)]
pub struct Take<S> {
    source: S,
    max: usize,
    count: usize,
    source_done: bool,
}

impl<S: Sequence> Take<S> {
    /// Wrap `source`, stopping after `max` items.
    pub fn new(source: S, max: usize) -> Self {
        Self {
            source,
            max,
            count: 0,
            source_done: false,
        }
    }
}

impl<S> Take<S> {
    /// Items yielded so far.
    pub fn yielded(&self) -> usize {
        self.count
    }

    /// The bound this stage was built with.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Recover the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn step(&mut self) -> Step<S::Item> {
        if self.count >= self.max || self.source_done {
            return Step::Finished;
        }
        match self.source.step() {
            Step::Yielded(item) => {
                self.count += 1;
                if self.count == self.max {
                    trace!(max = self.max, "take bound reached");
                }
                Step::Yielded(item)
            }
            Step::Finished => {
                trace!(count = self.count, max = self.max, "take source exhausted early");
                self.source_done = true;
                Step::Finished
            }
        }
    }
}
