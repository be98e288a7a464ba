// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Comprehension-style pipelines built from map and filter.

use stepwise_core::{seq, Range, SequenceExt};
use stepwise_macros::expect_eq;

use super::{Check, Walkthrough};

const SUITE: &str = "Comprehensions";

pub(super) const WALKTHROUGHS: &[Walkthrough] = &[
    Walkthrough::new(SUITE, "map doubles every element", map_doubles),
    Walkthrough::new(SUITE, "filter then map", filter_then_map),
    Walkthrough::new(SUITE, "squares over a range", squares_over_range),
];

fn map_doubles() -> Check {
    let doubled = seq![1, 2, 3, 4].map(|n| n * 2).collect_vec();
    expect_eq!(doubled, vec![2, 4, 6, 8]);
    Ok(())
}

fn filter_then_map() -> Check {
    let doubled = seq![1, 2, 3, 4].filter(|n| *n > 2).map(|n| n * 2).collect_vec();
    expect_eq!(doubled, vec![6, 8]);
    Ok(())
}

fn squares_over_range() -> Check {
    let squares = Range::new(1, 5).map(|n| n * n).collect_vec();
    expect_eq!(squares, vec![1, 4, 9, 16, 25]);
    Ok(())
}
