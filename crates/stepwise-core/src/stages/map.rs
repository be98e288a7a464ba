// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Per-item transformation.

use std::fmt;

use crate::sequence::Sequence;
use crate::step::Step;

/// Applies a function to every item of the wrapped sequence.
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F> Map<S, F> {
    /// Wrap `source`, transforming each item with `f`.
    pub fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn step(&mut self) -> Step<U> {
        self.source.step().map(&mut self.f)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("source", &self.source).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;
    use crate::source::ListSource;

    #[test]
    fn test_map_doubles() {
        let doubled = Map::new(ListSource::new(vec![1, 2, 3, 4]), |n| n * 2).collect_vec();
        assert_eq!(doubled, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_map_changes_item_type() {
        let mut lengths = Map::new(ListSource::new(vec!["ab", "c"]), str::len);
        assert_eq!(lengths.step(), Step::Yielded(2));
        assert_eq!(lengths.step(), Step::Yielded(1));
        assert!(lengths.step().is_finished());
    }
}
