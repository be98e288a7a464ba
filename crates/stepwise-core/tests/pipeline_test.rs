// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Pipeline integration tests
//!
//! Exercises sources, stages and generators composed the way callers use
//! them, through the public API only.

use std::cell::Cell;

use stepwise_core::{
    from_fn, seq, Bound, Generator, GeneratorExt, Iterable, ListSource, Range, Sequence,
    SequenceError, SequenceExt, Step,
};
use stepwise_macros::{assert_err, assert_exhausted, assert_ok, assert_yields};

fn palette() -> Vec<&'static str> {
    vec!["Purple", "Green", "yellow", "Paras", "popple"]
}

fn starts_with_p(color: &&str) -> bool {
    color.to_uppercase().starts_with('P')
}

#[test]
fn test_filter_over_iterable() {
    let colors = palette();
    let count = colors.sequence().filter(|c| starts_with_p(c)).count();
    assert_eq!(count, 3);
}

#[test]
fn test_take_of_filter_is_lazy() {
    let pulls = Cell::new(0);
    let colors = palette();
    let mut cursor = colors.iter().copied();
    let source = from_fn(|| {
        pulls.set(pulls.get() + 1);
        cursor.next()
    });

    let mut first_two = source.filter(starts_with_p).take(2);
    assert_yields!(first_two, ["Purple", "Paras"]);
    // Purple, Green, yellow, Paras: popple is never pulled
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_take_of_filter_with_fewer_matches() {
    let mut few = seq![1, 2, 3, 4, 5].filter(|n| *n > 3).take(10);
    assert_yields!(few, [4, 5]);
}

#[test]
fn test_zero_bound_from_text() {
    let bound: Bound = assert_ok!("0".parse());
    let mut nothing = seq!["a", "b"].take(bound.into());
    assert_exhausted!(nothing);
}

#[test]
fn test_negative_bound_is_rejected() {
    let err = assert_err!(Bound::try_from(-2i64));
    assert_eq!(err, SequenceError::invalid_bound("-2"));
}

#[test]
fn test_range_default_increment() {
    let mut range = Range::new(1, 10);
    assert_yields!(range, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_range_with_consumer_increment() {
    let mut range = Range::new(1, 10);
    let mut result = Vec::new();
    let mut next = range.resume(None);
    while let Step::Yielded(n) = next {
        result.push(n);
        next = range.resume(Some(2));
    }
    assert_eq!(result, vec![1, 3, 5, 7, 9]);
    assert!(range.resume(Some(2)).is_finished());
}

#[test]
fn test_comprehension_style_pipeline() {
    let doubled = seq![1, 2, 3, 4].map(|n| n * 2).collect_vec();
    assert_eq!(doubled, vec![2, 4, 6, 8]);

    let filtered = seq![1, 2, 3, 4].filter(|n| *n > 2).map(|n| n * 2).collect_vec();
    assert_eq!(filtered, vec![6, 8]);
}

#[test]
fn test_boxed_pipeline_stages() {
    let mut stages: Box<dyn Sequence<Item = i64>> = Box::new(Range::new(1, 20));
    stages = Box::new(stages.filter(|n| n % 3 == 0));
    stages = Box::new(stages.take(3));
    assert_yields!(stages, [3, 6, 9]);
}

#[test]
fn test_steered_range_through_stages() {
    let mut odds = Range::steered(1, 10).steer(|_| Some(2)).map(|n| n * 10);
    assert_yields!(odds, [10, 30, 50, 70, 90]);
}

#[test]
fn test_entries_of_list() {
    let mut entries = ListSource::new(vec!["a", "b"]).enumerate();
    assert_yields!(entries, [(0, "a"), (1, "b")]);
}

#[test]
fn test_independent_consumers_of_one_iterable() {
    let colors = palette();
    let mut a = colors.sequence();
    let mut b = colors.sequence();
    assert_eq!(a.step(), Step::Yielded(&"Purple"));
    assert_eq!(a.step(), Step::Yielded(&"Green"));
    assert_eq!(b.step(), Step::Yielded(&"Purple"));
    assert_eq!(a.remaining(), 3);
    assert_eq!(b.remaining(), 4);
}
