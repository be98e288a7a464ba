// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Validated take bounds.
//!
//! [`crate::Take`] works on `usize`, so a negative bound cannot reach it.
//! Bounds arriving as signed integers or text go through [`Bound`] first,
//! which rejects anything that is not a non-negative integer with
//! [`SequenceError::InvalidBound`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::SequenceError;

/// A non-negative take bound. Zero is valid and means "take nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bound(usize);

impl Bound {
    /// Wrap an already non-negative bound.
    pub const fn new(max: usize) -> Self {
        Self(max)
    }

    /// The bound as a count.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Bound {
    fn from(max: usize) -> Self {
        Self(max)
    }
}

impl From<Bound> for usize {
    fn from(bound: Bound) -> Self {
        bound.0
    }
}

impl TryFrom<i64> for Bound {
    type Error = SequenceError;

    fn try_from(max: i64) -> Result<Self, Self::Error> {
        usize::try_from(max).map(Self).map_err(|_| {
            debug!(max, "rejected negative bound");
            SequenceError::invalid_bound(max.to_string())
        })
    }
}

impl FromStr for Bound {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // leading '+' is accepted by usize::from_str; keep the textual form strict
        if trimmed.starts_with('+') {
            debug!(input = s, "rejected signed bound");
            return Err(SequenceError::invalid_bound(s));
        }
        trimmed.parse::<usize>().map(Self).map_err(|_| {
            debug!(input = s, "rejected bound");
            SequenceError::invalid_bound(s)
        })
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
