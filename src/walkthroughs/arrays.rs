// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Array-style helpers expressed as sequence consumers.

use stepwise_core::{seq, ListSource, SequenceExt};
use stepwise_macros::{ensure, expect_eq};

use super::{Check, Walkthrough};

const SUITE: &str = "Array helpers";

pub(super) const WALKTHROUGHS: &[Walkthrough] = &[
    Walkthrough::new(SUITE, "find returns the first match", find_hit),
    Walkthrough::new(SUITE, "find returns nothing without a match", find_miss),
    Walkthrough::new(SUITE, "position returns the first matching index", position_hit),
    Walkthrough::new(SUITE, "position returns nothing without a match", position_miss),
    Walkthrough::new(SUITE, "entries pair indexes with values", entries),
    Walkthrough::new(SUITE, "keys are the indexes", keys),
];

fn sample() -> ListSource<i32> {
    seq![5, 12, 8, 130, 44]
}

fn find_hit() -> Check {
    let mut numbers = sample();
    expect_eq!(numbers.find(|n| *n > 10), Some(12));
    // find stops at the match
    expect_eq!(numbers.pulled(), 2);
    Ok(())
}

fn find_miss() -> Check {
    let found = sample().find(|n| *n > 1000);
    ensure!(found.is_none(), "found {:?} above 1000", found);
    Ok(())
}

fn position_hit() -> Check {
    expect_eq!(sample().position(|n| n == 130), Some(3));
    Ok(())
}

fn position_miss() -> Check {
    expect_eq!(sample().position(|n| n == 7), None);
    Ok(())
}

fn entries() -> Check {
    let entries = seq!["a", "b", "c"].enumerate().collect_vec();
    expect_eq!(entries, vec![(0, "a"), (1, "b"), (2, "c")]);
    Ok(())
}

fn keys() -> Check {
    let keys = seq!["a", "b", "c"].enumerate().map(|(key, _)| key).collect_vec();
    expect_eq!(keys, vec![0, 1, 2]);
    Ok(())
}
