// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for sequence construction

use thiserror::Error;

/// Result type for sequence construction
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Errors raised while validating sequence parameters.
///
/// Stepping itself never fails; only inputs that cannot describe a valid
/// stage are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A take bound that is negative or not a number
    #[error("InvalidBound: expected a non-negative integer, got '{input}'")]
    InvalidBound {
        /// The rejected input, as written
        input: String,
    },
}

impl SequenceError {
    /// Create a new InvalidBound error
    pub fn invalid_bound(input: impl Into<String>) -> Self {
        Self::InvalidBound {
            input: input.into(),
        }
    }
}
