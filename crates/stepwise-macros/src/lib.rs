// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Assertion and expectation macros for stepwise sequences.
//!
//! # Macros Overview
//!
//! ## Error Handling
//! - [`bail!`] - Early return with an error
//! - [`ensure!`] - Assertion that returns an error instead of panicking
//! - [`try_unwrap!`] - Unwrap Option or return error
//! - [`expect_eq!`] - Equality check that returns a descriptive error
//!
//! ## Testing
//! - [`assert_matches!`], [`assert_ok!`], [`assert_err!`], [`assert_some!`],
//!   [`assert_none!`]
//! - [`assert_yields!`] - Step a sequence through exact items, then check it
//!   stays finished
//! - [`assert_exhausted!`] - Check a sequence is finished
//!
//! The sequence macros only call `.step()` and the `Step` helper methods, so
//! they work with any type implementing `stepwise_core::Sequence` as long as
//! the trait is in scope.
//!
//! # Examples
//!
//! ```
//! use stepwise_core::{seq, Sequence};
//! use stepwise_macros::*;
//!
//! fn walkthrough() -> Result<(), String> {
//!     let mut names = seq!["jason", "gretz"];
//!     let first = try_unwrap!(names.step().into_item(), "expected a name");
//!     expect_eq!(first, "jason");
//!     ensure!(names.step().is_yielded(), "expected a second name");
//!     Ok(())
//! }
//!
//! assert!(walkthrough().is_ok());
//! ```

#![warn(missing_docs)]

#[macro_use]
mod error;
#[macro_use]
mod testing;
