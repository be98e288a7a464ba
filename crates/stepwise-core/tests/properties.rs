// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Property tests for the stepping contract
//!
//! For arbitrary finite lists and bounds, sources, stages and ranges produce
//! exactly what the equivalent eager computation produces, and stay finished
//! once finished.

use proptest::prelude::*;
use stepwise_core::{GeneratorExt, ListSource, Range, Sequence, SequenceExt};

/// Drain a sequence, then check it is still finished on later steps.
fn drain_fused<S: Sequence>(mut seq: S) -> Vec<S::Item> {
    let items = seq.by_ref().collect_vec();
    for _ in 0..3 {
        assert!(seq.step().is_finished());
    }
    items
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A source over L yields len(L) items, then only finished steps.
    #[test]
    fn source_yields_every_item(list in prop::collection::vec(any::<i32>(), 0..64)) {
        let items = drain_fused(ListSource::new(list.clone()));
        prop_assert_eq!(items, list);
    }

    /// Steps after Finished leave the source's cursor where it was.
    #[test]
    fn finished_source_is_not_mutated(
        list in prop::collection::vec(any::<i32>(), 0..16),
        extra in 1usize..8,
    ) {
        let len = list.len();
        let mut source = ListSource::new(list);
        let _ = source.by_ref().collect_vec();
        for _ in 0..extra {
            prop_assert!(source.step().is_finished());
            prop_assert_eq!(source.pulled(), len);
            prop_assert_eq!(source.remaining(), 0);
        }
    }

    /// Filter yields exactly the matching sub-sequence, in order.
    #[test]
    fn filter_matches_eager_filter(
        list in prop::collection::vec(-50i32..50, 0..64),
        modulus in 1i32..7,
    ) {
        let expected: Vec<i32> = list.iter().copied().filter(|n| n % modulus == 0).collect();
        let items = drain_fused(ListSource::new(list).filter(|n| n % modulus == 0));
        prop_assert_eq!(items, expected);
    }

    /// Take yields min(max, len) items.
    #[test]
    fn take_yields_min_of_bound_and_len(
        list in prop::collection::vec(any::<u8>(), 0..32),
        max in 0usize..48,
    ) {
        let expected = max.min(list.len());
        let items = drain_fused(ListSource::new(list.clone()).take(max));
        prop_assert_eq!(items.len(), expected);
        prop_assert_eq!(&items[..], &list[..expected]);
    }

    /// Take(Filter(S, P), k) yields the first k matches and never pulls
    /// past the k-th match.
    #[test]
    fn take_of_filter_stops_at_kth_match(
        list in prop::collection::vec(0u32..20, 0..64),
        k in 0usize..8,
    ) {
        let matches: Vec<usize> = list
            .iter()
            .enumerate()
            .filter(|(_, n)| *n % 2 == 0)
            .map(|(i, _)| i)
            .collect();

        let mut source = ListSource::new(list.clone());
        let items = source.by_ref().filter(|n| n % 2 == 0).take(k).collect_vec();

        let expected: Vec<u32> = list.iter().copied().filter(|n| n % 2 == 0).take(k).collect();
        prop_assert_eq!(items, expected);

        let max_pulls = if k == 0 {
            0
        } else if k <= matches.len() {
            matches[k - 1] + 1
        } else {
            list.len()
        };
        prop_assert!(source.pulled() <= max_pulls);
    }

    /// A range stepped with a fixed positive delta matches a stepped
    /// inclusive std range.
    #[test]
    fn steered_range_matches_step_by(start in -100i64..100, len in 0i64..200, delta in 1i64..9) {
        let end = start + len;
        let expected: Vec<i64> = (start..=end).step_by(delta as usize).collect();
        let items = drain_fused(Range::steered(start, end).steer(move |_| Some(delta)));
        prop_assert_eq!(items, expected);
    }
}
