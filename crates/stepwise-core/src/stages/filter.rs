// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Predicate filtering.

use std::fmt;

use tracing::trace;

use crate::sequence::Sequence;
use crate::step::Step;

/// Yields only the items of the wrapped sequence that satisfy a predicate.
///
/// One call to [`Sequence::step`] may pull many items from the source,
/// bounded by however many it takes to reach a match or the end.
pub struct Filter<S, P> {
    source: S,
    predicate: P,
    done: bool,
}

impl<S, P> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    /// Wrap `source`, keeping items for which `predicate` returns true.
    pub fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Filter<S, P> {
    /// Recover the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn step(&mut self) -> Step<S::Item> {
        if self.done {
            return Step::Finished;
        }
        let mut skipped = 0usize;
        loop {
            match self.source.step() {
                Step::Yielded(item) if (self.predicate)(&item) => return Step::Yielded(item),
                Step::Yielded(_) => skipped += 1,
                Step::Finished => {
                    trace!(skipped, "filter source exhausted");
                    self.done = true;
                    return Step::Finished;
                }
            }
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;
    use crate::source::ListSource;

    fn palette() -> ListSource<&'static str> {
        ListSource::new(vec!["Purple", "Green", "yellow", "Paras", "popple"])
    }

    fn starts_with_p(color: &&str) -> bool {
        color.to_uppercase().starts_with('P')
    }

    #[test]
    fn test_filter_keeps_matches_in_order() {
        let matches = Filter::new(palette(), starts_with_p).collect_vec();
        assert_eq!(matches, vec!["Purple", "Paras", "popple"]);
    }

    #[test]
    fn test_filter_no_matches() {
        let mut none = Filter::new(palette(), |c: &&str| c.is_empty());
        assert!(none.step().is_finished());
        assert!(none.step().is_finished());
    }

    #[test]
    fn test_filter_does_not_call_predicate_after_exhaustion() {
        let mut calls = 0;
        let mut evens = Filter::new(ListSource::new(vec![1, 2]), |n: &i32| {
            calls += 1;
            n % 2 == 0
        });
        assert_eq!(evens.step(), Step::Yielded(2));
        assert!(evens.step().is_finished());
        assert!(evens.step().is_finished());
        drop(evens);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_filter_skips_several_per_step() {
        let source = ListSource::new(vec![1, 3, 5, 6]);
        let mut evens = Filter::new(source, |n: &i32| n % 2 == 0);
        assert_eq!(evens.step(), Step::Yielded(6));
        assert_eq!(evens.into_inner().pulled(), 4);
    }
}
