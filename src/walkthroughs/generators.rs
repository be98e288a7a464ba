// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Generators: lazy producers, lazy pipelines and consumer feedback.

use std::cell::Cell;

use stepwise_core::{
    from_fn, Bound, Generator, Iterable, Range, Sequence, SequenceError, SequenceExt, Step,
};
use stepwise_macros::{bail, ensure, expect_eq};

use super::{Check, Walkthrough};

const SUITE: &str = "Generators";

pub(super) const WALKTHROUGHS: &[Walkthrough] = &[
    Walkthrough::new(SUITE, "yielded values can be summed", yielded_values),
    Walkthrough::new(SUITE, "a palette is iterable", palette_is_iterable),
    Walkthrough::new(SUITE, "filter keeps colors starting with p", filter_colors),
    Walkthrough::new(SUITE, "take over filter stops pulling early", take_over_filter),
    Walkthrough::new(SUITE, "feedback steers the range", range_feedback),
    Walkthrough::new(SUITE, "a range without feedback counts by one", range_default),
    Walkthrough::new(SUITE, "a zero bound takes nothing", zero_bound),
    Walkthrough::new(SUITE, "a negative bound is rejected", negative_bound),
];

struct ColorPalette {
    colors: Vec<&'static str>,
}

impl ColorPalette {
    fn new(colors: Vec<&'static str>) -> Self {
        Self { colors }
    }

    fn standard() -> Self {
        Self::new(vec!["Purple", "Green", "yellow", "Paras", "popple"])
    }
}

impl Iterable for ColorPalette {
    type Item = &'static str;

    fn items(&self) -> &[Self::Item] {
        &self.colors
    }
}

fn starts_with_p(color: &&str) -> bool {
    color
        .chars()
        .next()
        .is_some_and(|c| c.to_ascii_uppercase() == 'P')
}

fn yielded_values() -> Check {
    // a generator with four fixed yields, paused between each
    let mut state = 0;
    let mut numbers = from_fn(move || {
        state += 1;
        (state <= 4).then_some(state)
    });

    let mut sum = 0;
    let mut next = numbers.step();
    while let Step::Yielded(n) = next {
        sum += n;
        next = numbers.step();
    }
    expect_eq!(sum, 10);
    Ok(())
}

fn palette_is_iterable() -> Check {
    let palette = ColorPalette::new(vec!["Purple", "Green", "yellow"]);
    let mut iterator = palette.sequence();
    expect_eq!(iterator.step(), Step::Yielded(&"Purple"));
    expect_eq!(iterator.step(), Step::Yielded(&"Green"));
    let _ = iterator.step();
    ensure!(iterator.step().is_finished(), "palette should be exhausted");
    Ok(())
}

fn filter_colors() -> Check {
    let palette = ColorPalette::standard();
    let count = palette.sequence().cloned().filter(starts_with_p).count();
    expect_eq!(count, 3);
    Ok(())
}

fn take_over_filter() -> Check {
    let palette = ColorPalette::standard();
    let pulled = Cell::new(0);
    let mut colors = palette.sequence().cloned();
    let source = from_fn(|| {
        pulled.set(pulled.get() + 1);
        colors.step().into_item()
    });

    let taken = source.filter(starts_with_p).take(2).collect_vec();
    expect_eq!(taken, vec!["Purple", "Paras"]);
    // popple, the third match, is never looked at
    expect_eq!(pulled.get(), 4);
    Ok(())
}

fn range_feedback() -> Check {
    let mut iterator = Range::new(1, 10);
    let mut result = Vec::new();
    let mut next = iterator.resume(None);
    while let Step::Yielded(n) = next {
        result.push(n);
        next = iterator.resume(Some(2));
    }
    expect_eq!(result, vec![1, 3, 5, 7, 9]);
    Ok(())
}

fn range_default() -> Check {
    let values = Range::new(1, 10).collect_vec();
    expect_eq!(values, (1..=10).collect::<Vec<i64>>());
    Ok(())
}

fn zero_bound() -> Check {
    let bound: Bound = "0".parse().map_err(|e: SequenceError| e.to_string())?;
    let mut pulled = false;
    let mut nothing = from_fn(|| {
        pulled = true;
        Some("anything")
    })
    .take(bound.get());
    ensure!(nothing.step().is_finished(), "take 0 produced an item");
    drop(nothing);
    ensure!(!pulled, "take 0 pulled from its source");
    Ok(())
}

fn negative_bound() -> Check {
    match Bound::try_from(-1i64) {
        Err(SequenceError::InvalidBound { input }) => {
            expect_eq!(input, "-1");
            Ok(())
        }
        Ok(bound) => bail!("accepted a negative bound as {}", bound),
    }
}
