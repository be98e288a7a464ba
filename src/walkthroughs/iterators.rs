// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Iterables and iterators: producing values one step at a time.

use stepwise_core::{Iterable, Sequence, SequenceExt, Step};
use stepwise_macros::{ensure, expect_eq, try_unwrap};

use super::{Check, Walkthrough};

const SUITE: &str = "Iterables & iterators";

pub(super) const WALKTHROUGHS: &[Walkthrough] = &[
    Walkthrough::new(SUITE, "a hand-written iterator tracks its own position", hand_written_iterator),
    Walkthrough::new(SUITE, "a custom iterable hands out fresh cursors", custom_iterable),
    Walkthrough::new(SUITE, "values can be summed by stepping explicitly", explicit_stepping),
    Walkthrough::new(SUITE, "a for loop consumes the iterator bridge", for_loop_bridge),
    Walkthrough::new(SUITE, "a finished iterator stays finished", stays_finished),
];

/// An iterator written out by hand: the array and a cursor into it.
struct ArrayIterator<T> {
    array: Vec<T>,
    index: usize,
}

impl<T> ArrayIterator<T> {
    fn new(array: Vec<T>) -> Self {
        Self { array, index: 0 }
    }
}

impl<T: Clone> Sequence for ArrayIterator<T> {
    type Item = T;

    fn step(&mut self) -> Step<T> {
        match self.array.get(self.index) {
            Some(item) => {
                self.index += 1;
                Step::Yielded(item.clone())
            }
            None => Step::Finished,
        }
    }
}

/// Holds its values and becomes iterable by exposing them in order.
struct MyVeryOwnIterable {
    array: Vec<&'static str>,
}

impl Iterable for MyVeryOwnIterable {
    type Item = &'static str;

    fn items(&self) -> &[Self::Item] {
        &self.array
    }
}

fn numbers() -> Vec<i32> {
    vec![1, 2, 3, 4]
}

fn hand_written_iterator() -> Check {
    let mut iterator = ArrayIterator::new(vec!["jason", "gretz"]);
    expect_eq!(iterator.step(), Step::Yielded("jason"));
    expect_eq!(iterator.step(), Step::Yielded("gretz"));
    ensure!(iterator.step().is_finished(), "expected the iterator to be done");
    Ok(())
}

fn custom_iterable() -> Check {
    let my_iterable = MyVeryOwnIterable {
        array: vec!["jason", "gretz"],
    };

    let mut iterator = my_iterable.sequence();
    let first = try_unwrap!(iterator.step().into_item(), "iterator was empty");
    expect_eq!(*first, "jason");
    expect_eq!(iterator.step(), Step::Yielded(&"gretz"));
    ensure!(iterator.step().is_finished(), "expected the iterator to be done");

    // a second request starts over
    let mut again = my_iterable.sequence();
    expect_eq!(again.step(), Step::Yielded(&"jason"));
    Ok(())
}

fn explicit_stepping() -> Check {
    let numbers = numbers();
    let mut iterator = numbers.sequence();
    let mut sum = 0;
    let mut next = iterator.step();
    while let Step::Yielded(n) = next {
        sum += n;
        next = iterator.step();
    }
    expect_eq!(sum, 10);
    Ok(())
}

fn for_loop_bridge() -> Check {
    let mut sum = 0;
    for n in numbers().sequence().iter() {
        sum += n;
    }
    expect_eq!(sum, 10);
    Ok(())
}

fn stays_finished() -> Check {
    let mut iterator = ArrayIterator::new(vec![1]);
    expect_eq!(iterator.step(), Step::Yielded(1));
    for attempt in 0..3 {
        ensure!(
            iterator.step().is_finished(),
            "step {} after the end produced an item",
            attempt
        );
    }
    expect_eq!(iterator.index, 1);
    Ok(())
}
