// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Index pairing and reference cloning.

use crate::sequence::Sequence;
use crate::step::Step;

/// Pairs each item with its zero-based index, like an array's `entries()`.
#[derive(Debug)]
pub struct Enumerate<S> {
    source: S,
    index: usize,
}

impl<S> Enumerate<S> {
    /// Wrap `source`, counting from zero.
    pub fn new(source: S) -> Self {
        Self { source, index: 0 }
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn step(&mut self) -> Step<Self::Item> {
        match self.source.step() {
            Step::Yielded(item) => {
                let index = self.index;
                self.index += 1;
                Step::Yielded((index, item))
            }
            Step::Finished => Step::Finished,
        }
    }
}

/// Clones borrowed items out of a sequence of references.
#[derive(Debug)]
pub struct Cloned<S> {
    source: S,
}

impl<S> Cloned<S> {
    /// Wrap a sequence of references.
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<'a, S, T> Sequence for Cloned<S>
where
    S: Sequence<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        self.source.step().map(T::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;
    use crate::source::{Iterable, ListSource};

    #[test]
    fn test_entries() {
        let entries = Enumerate::new(ListSource::new(vec!["a", "b", "c"])).collect_vec();
        assert_eq!(entries, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_keys() {
        let keys = ListSource::new(vec!["a", "b", "c"])
            .enumerate()
            .map(|(index, _)| index)
            .collect_vec();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn test_cloned_owns_items() {
        let names = vec![String::from("jason"), String::from("gretz")];
        let owned: Vec<String> = Cloned::new(names.sequence()).collect_vec();
        assert_eq!(owned, names);
    }
}
