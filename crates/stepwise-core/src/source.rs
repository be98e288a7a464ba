// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Sequence sources.
//!
//! A source wraps a finite backing collection captured at construction and
//! walks it with a cursor starting at zero. [`ListSource`] owns its items,
//! [`SliceSource`] borrows them. [`FromFn`] pulls from a closure instead.

use std::fmt;

use tracing::trace;

use crate::sequence::Sequence;
use crate::step::Step;

/// A source that owns its backing list and yields items by value.
#[derive(Debug)]
pub struct ListSource<T> {
    items: std::vec::IntoIter<T>,
    cursor: usize,
    len: usize,
}

impl<T> ListSource<T> {
    /// Capture `items` as the backing list.
    pub fn new(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            items: items.into_iter(),
            cursor: 0,
            len,
        }
    }

    /// Number of items produced so far.
    pub fn pulled(&self) -> usize {
        self.cursor
    }

    /// Number of items not yet produced.
    pub fn remaining(&self) -> usize {
        self.len - self.cursor
    }

    /// Length of the backing list captured at construction.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the backing list was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Sequence for ListSource<T> {
    type Item = T;

    fn step(&mut self) -> Step<T> {
        match self.items.next() {
            Some(item) => {
                self.cursor += 1;
                Step::Yielded(item)
            }
            None => Step::Finished,
        }
    }
}

impl<T> From<Vec<T>> for ListSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for ListSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A source that borrows its backing slice and yields references.
#[derive(Debug)]
pub struct SliceSource<'a, T> {
    items: &'a [T],
    cursor: usize,
}

impl<'a, T> SliceSource<'a, T> {
    /// Walk `items` from the start.
    pub fn new(items: &'a [T]) -> Self {
        Self { items, cursor: 0 }
    }

    /// Number of items produced so far.
    pub fn pulled(&self) -> usize {
        self.cursor
    }

    /// Number of items not yet produced.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }
}

impl<'a, T> Sequence for SliceSource<'a, T> {
    type Item = &'a T;

    fn step(&mut self) -> Step<&'a T> {
        match self.items.get(self.cursor) {
            Some(item) => {
                self.cursor += 1;
                Step::Yielded(item)
            }
            None => Step::Finished,
        }
    }
}

/// Anything holding an ordered collection can hand out fresh sources over it.
///
/// Every call to [`Iterable::sequence`] starts a new, independent cursor, so
/// two consumers walking the same value never interfere.
///
/// ```
/// use stepwise_core::{Iterable, SequenceExt};
///
/// struct Palette {
///     colors: Vec<&'static str>,
/// }
///
/// impl Iterable for Palette {
///     type Item = &'static str;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.colors
///     }
/// }
///
/// let palette = Palette { colors: vec!["Purple", "Green"] };
/// assert_eq!(palette.sequence().count(), 2);
/// ```
pub trait Iterable {
    /// Element type of the backing collection
    type Item;

    /// The backing collection, in order.
    fn items(&self) -> &[Self::Item];

    /// A fresh source over the current backing data.
    fn sequence(&self) -> SliceSource<'_, Self::Item> {
        SliceSource::new(self.items())
    }
}

impl<T> Iterable for Vec<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        self
    }
}

impl<T> Iterable for [T] {
    type Item = T;

    fn items(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Iterable for [T; N] {
    type Item = T;

    fn items(&self) -> &[T] {
        self
    }
}

/// A source pulling from a closure until it returns `None`.
///
/// Created by [`from_fn`]. The first `None` latches the source: the closure
/// is never called again.
pub struct FromFn<F> {
    f: F,
    done: bool,
}

/// Build a source from a closure returning `Some(item)` until exhausted.
///
/// ```
/// use stepwise_core::{from_fn, SequenceExt};
///
/// let mut n = 0;
/// let counter = from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(n)
/// });
/// assert_eq!(counter.collect_vec(), vec![1, 2, 3]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f, done: false }
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        if self.done {
            return Step::Finished;
        }
        match (self.f)() {
            Some(item) => Step::Yielded(item),
            None => {
                trace!("closure source exhausted");
                self.done = true;
                Step::Finished
            }
        }
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("done", &self.done).finish()
    }
}
