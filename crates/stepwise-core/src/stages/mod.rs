// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Transformation stages.
//!
//! A stage owns the sequence it wraps and is the only caller of its `step`.
//! Stages never buffer more than the item currently being considered.

mod enumerate;
mod filter;
mod map;
mod take;

pub use enumerate::{Cloned, Enumerate};
pub use filter::Filter;
pub use map::Map;
pub use take::Take;
