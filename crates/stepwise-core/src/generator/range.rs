// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Consumer-steerable integer range.

use tracing::trace;

use crate::generator::Generator;
use crate::sequence::Sequence;
use crate::step::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Not yet resumed; `current` has not been bound-checked
    Ready(i64),
    /// Yielded `current`, waiting for the consumer's delta
    Suspended(i64),
    Exhausted,
}

/// Integers from `start` to `end` inclusive, where the consumer chooses the
/// stride on every resumption.
///
/// After yielding `current`, the next resumption adds the delta it carries
/// (or the range's default stride when it carries none) and then checks the
/// bound. Passing `end`, or overflowing `i64`, exhausts the range for good.
///
/// ```
/// use stepwise_core::{Generator, Step};
/// use stepwise_core::Range;
///
/// let mut range = Range::new(1, 10);
/// let mut result = Vec::new();
/// let mut next = range.resume(None);
/// while let Step::Yielded(n) = next {
///     result.push(n);
///     next = range.resume(Some(2));
/// }
/// assert_eq!(result, vec![1, 3, 5, 7, 9]);
/// ```
#[derive(Debug)]
pub struct Range {
    end: i64,
    stride: i64,
    state: State,
}

impl Range {
    /// Range with default stride 1: stepping it plainly yields `start..=end`.
    pub fn new(start: i64, end: i64) -> Self {
        Self::with_stride(start, end, 1)
    }

    /// Range with default stride 0, for consumers that always send a delta.
    ///
    /// Resuming without a value repeats the current number, so stepping this
    /// range as a plain [`Sequence`], e.g. with `collect_vec`,
    /// never finishes unless `start > end`. Drive it with
    /// [`Generator::resume`] or through [`crate::GeneratorExt::steer`].
    pub fn steered(start: i64, end: i64) -> Self {
        Self::with_stride(start, end, 0)
    }

    /// Range with an explicit default stride.
    pub fn with_stride(start: i64, end: i64, stride: i64) -> Self {
        Self {
            end,
            stride,
            state: State::Ready(start),
        }
    }

    /// The last number yielded, if any and not yet exhausted.
    pub fn current(&self) -> Option<i64> {
        match self.state {
            State::Suspended(current) => Some(current),
            State::Ready(_) | State::Exhausted => None,
        }
    }

    /// Whether the range has passed its end.
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    fn exhaust(&mut self) -> Step<i64> {
        if self.state != State::Exhausted {
            trace!(end = self.end, "range exhausted");
            self.state = State::Exhausted;
        }
        Step::Finished
    }
}

impl Generator for Range {
    type Yield = i64;
    type Resume = i64;

    fn resume(&mut self, delta: Option<i64>) -> Step<i64> {
        let next = match self.state {
            State::Ready(start) => start,
            State::Suspended(current) => {
                match current.checked_add(delta.unwrap_or(self.stride)) {
                    Some(next) => next,
                    None => return self.exhaust(),
                }
            }
            State::Exhausted => return Step::Finished,
        };

        if next > self.end {
            return self.exhaust();
        }
        self.state = State::Suspended(next);
        Step::Yielded(next)
    }
}

impl Sequence for Range {
    type Item = i64;

    fn step(&mut self) -> Step<i64> {
        self.resume(None)
    }
}
