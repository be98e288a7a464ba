// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Resumable generators.
//!
//! A generator is a sequence the consumer can talk back to: every
//! [`Generator::resume`] may carry a value that steers what the producer does
//! next. Paused state lives in the generator's fields, never on a suspended
//! call stack.

mod range;

use std::fmt;

pub use range::Range;

use crate::sequence::Sequence;
use crate::step::Step;

/// A producer that accepts a resumption value on every step.
pub trait Generator {
    /// The type of item produced
    type Yield;
    /// The type of value the consumer may send back
    type Resume;

    /// Resume the producer, optionally handing it a value.
    ///
    /// The value sent with a call is delivered to the yield that the
    /// *previous* call returned from, so a value passed on the very first
    /// call is ignored.
    fn resume(&mut self, input: Option<Self::Resume>) -> Step<Self::Yield>;
}

impl<G: Generator + ?Sized> Generator for &mut G {
    type Yield = G::Yield;
    type Resume = G::Resume;

    fn resume(&mut self, input: Option<Self::Resume>) -> Step<Self::Yield> {
        (**self).resume(input)
    }
}

/// Adapters available on every [`Generator`].
pub trait GeneratorExt: Generator {
    /// Turn this generator into a plain [`Sequence`], computing each
    /// resumption value from the item just yielded.
    ///
    /// ```
    /// use stepwise_core::{GeneratorExt, Range, SequenceExt};
    ///
    /// let odds = Range::steered(1, 10).steer(|_| Some(2)).collect_vec();
    /// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
    /// ```
    fn steer<F>(self, feedback: F) -> Steered<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Yield) -> Option<Self::Resume>,
    {
        Steered {
            generator: self,
            feedback,
            pending: None,
        }
    }
}

impl<G: Generator + ?Sized> GeneratorExt for G {}

/// A generator driven by a feedback closure.
///
/// Created by [`GeneratorExt::steer`].
pub struct Steered<G: Generator, F> {
    generator: G,
    feedback: F,
    pending: Option<G::Resume>,
}

impl<G, F> Sequence for Steered<G, F>
where
    G: Generator,
    F: FnMut(&G::Yield) -> Option<G::Resume>,
{
    type Item = G::Yield;

    fn step(&mut self) -> Step<G::Yield> {
        let step = self.generator.resume(self.pending.take());
        if let Step::Yielded(item) = &step {
            self.pending = (self.feedback)(item);
        }
        step
    }
}

impl<G: Generator + fmt::Debug, F> fmt::Debug for Steered<G, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Steered")
            .field("generator", &self.generator)
            .finish()
    }
}
