// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # stepwise-core
//!
//! Pull-based lazy sequences with composable transformation stages.
//!
//! ## Overview
//!
//! Every producer in this crate implements [`Sequence`], a single-method
//! contract: [`Sequence::step`] returns either the next item or
//! [`Step::Finished`]. Once a sequence reports `Finished` it keeps doing so.
//!
//! - Sources: [`ListSource`], [`SliceSource`], [`FromFn`] and the
//!   [`Iterable`] adapter for anything holding an ordered collection
//! - Stages: [`Filter`], [`Take`], [`Map`], [`Enumerate`], [`Cloned`]
//! - Generators: [`Range`], a consumer-steerable counter implementing
//!   [`Generator`]
//! - Consumers: the provided methods on [`SequenceExt`]
//!
//! ## Quick Start
//!
//! ```rust
//! use stepwise_core::{ListSource, SequenceExt};
//!
//! let colors = ListSource::new(vec!["Purple", "Green", "yellow", "Paras", "popple"]);
//! let first_two: Vec<_> = colors
//!     .filter(|c| c.to_uppercase().starts_with('P'))
//!     .take(2)
//!     .collect_vec();
//! assert_eq!(first_two, vec!["Purple", "Paras"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bound;
pub mod error;
pub mod generator;
pub mod sequence;
pub mod source;
pub mod stages;
pub mod step;

// Re-exports for convenience
pub use bound::Bound;
pub use error::{Result, SequenceError};
pub use generator::{Generator, GeneratorExt, Range, Steered};
pub use sequence::{Iter, Sequence, SequenceExt};
pub use source::{from_fn, FromFn, Iterable, ListSource, SliceSource};
pub use stages::{Cloned, Enumerate, Filter, Map, Take};
pub use step::Step;

/// Build a [`ListSource`] from a list of expressions.
///
/// # Example
///
/// ```
/// use stepwise_core::{seq, SequenceExt};
///
/// let numbers = seq![1, 2, 3, 4];
/// assert_eq!(numbers.sum::<i32>(), 10);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::ListSource::new(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::ListSource::new(::std::vec![$($item),+])
    };
}
