// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The sequence capability and its combinators.
//!
//! [`Sequence`] is the only contract producers implement. Everything else in
//! this module is provided on top of it by [`SequenceExt`]: stage
//! constructors, which wrap `self` by value, and consumers, which drain it.

use std::iter::FusedIterator;

use crate::stages::{Cloned, Enumerate, Filter, Map, Take};
use crate::step::Step;

/// A stateful, single-use, pull-based producer of a finite run of values.
///
/// Implementations must never resurrect: after the first
/// [`Step::Finished`], every further call returns `Finished` again without
/// changing any observable state.
///
/// Sequences are deliberately not `Clone`. Copying one would duplicate its
/// position, not its data; build a fresh one instead.
pub trait Sequence {
    /// The type of item produced
    type Item;

    /// Produce the next item or the terminal signal.
    fn step(&mut self) -> Step<Self::Item>;
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn step(&mut self) -> Step<Self::Item> {
        (**self).step()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn step(&mut self) -> Step<Self::Item> {
        (**self).step()
    }
}

/// Stages and consumers available on every [`Sequence`].
pub trait SequenceExt: Sequence {
    /// Keep only the items satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yield at most `max` items, then finish regardless of what remains.
    fn take(self, max: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, max)
    }

    /// Transform every item with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Pair every item with its zero-based index.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Clone borrowed items into owned ones.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Sequence<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    /// Borrow this sequence so a stage can wrap it without consuming it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Bridge to [`std::iter::Iterator`], e.g. for `for` loops.
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter { inner: self }
    }

    /// Drain into any collection.
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromIterator<Self::Item>,
    {
        self.iter().collect()
    }

    /// Drain into a `Vec`.
    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Sum every item.
    fn sum<T>(self) -> T
    where
        Self: Sized,
        T: std::iter::Sum<Self::Item>,
    {
        self.iter().sum()
    }

    /// Number of items left in the sequence.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Fold every item into an accumulator.
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Step::Yielded(item) = self.step() {
            acc = f(acc, item);
        }
        acc
    }

    /// Call `f` on every item.
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), item| f(item));
    }

    /// First item satisfying `predicate`. Stops pulling at the match.
    fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        while let Step::Yielded(item) = self.step() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Index of the first item satisfying `predicate`, counted from the
    /// current position. Stops pulling at the match.
    fn position<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut index = 0;
        while let Step::Yielded(item) = self.step() {
            if predicate(item) {
                return Some(index);
            }
            index += 1;
        }
        None
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}

/// A [`Sequence`] viewed as a fused [`Iterator`].
///
/// Created by [`SequenceExt::iter`].
#[derive(Debug)]
pub struct Iter<S> {
    inner: S,
}

impl<S> Iter<S> {
    /// Recover the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.step().into_item()
    }
}

impl<S: Sequence> FusedIterator for Iter<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ListSource;
    use stepwise_macros::{assert_none, assert_some};

    #[test]
    fn test_sum_of_numbers() {
        let numbers = ListSource::new(vec![1, 2, 3, 4]);
        assert_eq!(numbers.sum::<i32>(), 10);
    }

    #[test]
    fn test_for_loop_bridge() {
        let mut sum = 0;
        for n in ListSource::new(vec![1, 2, 3, 4]).iter() {
            sum += n;
        }
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_find_stops_at_match() {
        let mut numbers = ListSource::new(vec![5, 12, 8, 130, 44]);
        assert_eq!(assert_some!(numbers.find(|n| *n > 10)), 12);
        // the rest is still available
        assert_eq!(numbers.collect_vec(), vec![8, 130, 44]);
    }

    #[test]
    fn test_find_miss_exhausts() {
        let mut numbers = ListSource::new(vec![1, 2, 3]);
        assert_none!(numbers.find(|n| *n > 10));
        assert!(numbers.step().is_finished());
    }

    #[test]
    fn test_position() {
        let mut numbers = ListSource::new(vec![5, 12, 8, 130, 44]);
        assert_eq!(assert_some!(numbers.position(|n| n == 130)), 3);
        // stops at the match
        assert_eq!(numbers.pulled(), 4);

        let mut numbers = ListSource::new(vec![5, 12]);
        assert_none!(numbers.position(|n| n == 7));
        assert_eq!(numbers.remaining(), 0);
    }

    #[test]
    fn test_by_ref_keeps_ownership() {
        let mut numbers = ListSource::new(vec![1, 2, 3, 4, 5]);
        let head = numbers.by_ref().take(2).collect_vec();
        assert_eq!(head, vec![1, 2]);
        assert_eq!(numbers.collect_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_boxed_sequence() {
        let mut boxed: Box<dyn Sequence<Item = i32>> = Box::new(ListSource::new(vec![7]));
        assert_eq!(boxed.step(), Step::Yielded(7));
        assert!(boxed.step().is_finished());
    }

    #[test]
    fn test_count_and_fold() {
        assert_eq!(ListSource::new(vec!['a', 'b', 'c']).count(), 3);
        let joined = ListSource::new(vec!["a", "b"]).fold(String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "ab");
    }
}
