// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Testing helper macros.

/// Assert that an expression matches a pattern.
///
/// # Example
///
/// ```
/// use stepwise_core::Step;
/// use stepwise_macros::assert_matches;
///
/// let step = Step::Yielded(42);
/// assert_matches!(step, Step::Yielded(n) if n > 0);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match $expr {
            $pat => {}
            ref e => panic!(
                "assertion failed: `{}` does not match pattern `{}`\n  value: {:?}",
                stringify!($expr),
                stringify!($pat),
                e
            ),
        }
    };
    ($expr:expr, $pat:pat if $guard:expr) => {
        match $expr {
            $pat if $guard => {}
            ref e => panic!(
                "assertion failed: `{}` does not match pattern `{} if {}`\n  value: {:?}",
                stringify!($expr),
                stringify!($pat),
                stringify!($guard),
                e
            ),
        }
    };
}

/// Assert that a Result is Ok and extract the value.
///
/// # Example
///
/// ```
/// use stepwise_core::Bound;
/// use stepwise_macros::assert_ok;
///
/// let bound: Bound = assert_ok!("2".parse());
/// assert_eq!(bound.get(), 2);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!(
                "assertion failed: expected Ok, got Err\n  expression: `{}`\n  error: {:?}",
                stringify!($expr),
                e
            ),
        }
    };
}

/// Assert that a Result is Err and extract the error.
///
/// # Example
///
/// ```
/// use stepwise_core::{Bound, SequenceError};
/// use stepwise_macros::assert_err;
///
/// let err = assert_err!("-1".parse::<Bound>());
/// assert!(matches!(err, SequenceError::InvalidBound { .. }));
/// ```
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!(
                "assertion failed: expected Err, got Ok\n  expression: `{}`\n  value: {:?}",
                stringify!($expr),
                v
            ),
            Err(e) => e,
        }
    };
}

/// Assert that an Option is Some and extract the value.
///
/// # Example
///
/// ```
/// use stepwise_macros::assert_some;
///
/// let opt = Some(42);
/// let value = assert_some!(opt);
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!(
                "assertion failed: expected Some, got None\n  expression: `{}`",
                stringify!($expr)
            ),
        }
    };
}

/// Assert that an Option is None.
///
/// # Example
///
/// ```
/// use stepwise_macros::assert_none;
///
/// let opt: Option<i32> = None;
/// assert_none!(opt);
/// ```
#[macro_export]
macro_rules! assert_none {
    ($expr:expr) => {
        match $expr {
            Some(v) => panic!(
                "assertion failed: expected None, got Some\n  expression: `{}`\n  value: {:?}",
                stringify!($expr),
                v
            ),
            None => {}
        }
    };
}

/// Step a sequence through exactly the given items, then check that it
/// reports finished on two consecutive steps.
///
/// # Example
///
/// ```
/// use stepwise_core::{seq, Sequence, SequenceExt};
/// use stepwise_macros::assert_yields;
///
/// let mut odds = seq![1, 2, 3, 4, 5].filter(|n| n % 2 == 1);
/// assert_yields!(odds, [1, 3, 5]);
/// ```
#[macro_export]
macro_rules! assert_yields {
    ($seq:expr, [$($item:expr),* $(,)?]) => {{
        #[allow(unused_mut, unused_assignments)]
        let mut index = 0usize;
        $(
            match $seq.step().into_item() {
                Some(actual) => assert_eq!(
                    actual,
                    $item,
                    "item {} of `{}` differs",
                    index,
                    stringify!($seq)
                ),
                None => panic!(
                    "assertion failed: `{}` finished early at item {}, expected {:?}",
                    stringify!($seq),
                    index,
                    $item
                ),
            }
            index += 1;
        )*
        let _ = index;
        $crate::assert_exhausted!($seq);
    }};
}

/// Assert that a sequence reports finished, and keeps doing so.
///
/// # Example
///
/// ```
/// use stepwise_core::{seq, Sequence, SequenceExt};
/// use stepwise_macros::assert_exhausted;
///
/// let mut nothing = seq!["a", "b"].take(0);
/// assert_exhausted!(nothing);
/// ```
#[macro_export]
macro_rules! assert_exhausted {
    ($seq:expr) => {
        for _ in 0..2 {
            if let Some(extra) = $seq.step().into_item() {
                panic!(
                    "assertion failed: expected the sequence to be finished\n  sequence: `{}`\n  extra item: {:?}",
                    stringify!($seq),
                    extra
                );
            }
        }
    };
}
