// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error handling macros.
//!
//! These return early from functions whose error type can be built from a
//! `String` (walkthroughs use `Result<(), String>`).

/// Early return with an error.
///
/// # Example
///
/// ```
/// use stepwise_macros::bail;
///
/// fn bound(max: i64) -> Result<usize, String> {
///     if max < 0 {
///         bail!("bound must be non-negative, got {}", max);
///     }
///     Ok(max as usize)
/// }
///
/// assert!(bound(-1).is_err());
/// assert_eq!(bound(2), Ok(2));
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($msg.into())
    };
    ($fmt:literal, $($arg:tt)*) => {
        return Err(format!($fmt, $($arg)*).into())
    };
    ($err:expr $(,)?) => {
        return Err($err.into())
    };
}

/// Ensure a condition is true, or return an error.
///
/// # Example
///
/// ```
/// use stepwise_macros::ensure;
///
/// fn non_empty(items: &[i32]) -> Result<(), String> {
///     ensure!(!items.is_empty(), "no items");
///     Ok(())
/// }
///
/// assert!(non_empty(&[]).is_err());
/// assert!(non_empty(&[1]).is_ok());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($msg.into());
        }
    };
    ($cond:expr, $fmt:literal, $($arg:tt)*) => {
        if !$cond {
            return Err(format!($fmt, $($arg)*).into());
        }
    };
}

/// Unwrap an Option or return early with an error.
///
/// # Example
///
/// ```
/// use stepwise_macros::try_unwrap;
///
/// fn first(items: &[i32]) -> Result<i32, String> {
///     let value = try_unwrap!(items.first(), "no first item");
///     Ok(*value)
/// }
///
/// assert_eq!(first(&[5]), Ok(5));
/// assert!(first(&[]).is_err());
/// ```
#[macro_export]
macro_rules! try_unwrap {
    ($opt:expr, $msg:literal) => {
        match $opt {
            Some(v) => v,
            None => return Err($msg.into()),
        }
    };
    ($opt:expr, $fmt:literal, $($arg:tt)*) => {
        match $opt {
            Some(v) => v,
            None => return Err(format!($fmt, $($arg)*).into()),
        }
    };
    ($opt:expr) => {
        match $opt {
            Some(v) => v,
            None => return Err("unwrap failed on None".into()),
        }
    };
}

/// Compare two values, returning a descriptive error when they differ.
///
/// The non-panicking counterpart of `assert_eq!`, for code that reports
/// failures instead of aborting.
///
/// # Example
///
/// ```
/// use stepwise_macros::expect_eq;
///
/// fn check(sum: i32) -> Result<(), String> {
///     expect_eq!(sum, 10);
///     Ok(())
/// }
///
/// assert!(check(10).is_ok());
/// assert!(check(9).is_err());
/// ```
#[macro_export]
macro_rules! expect_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return Err(format!(
                        "expected `{}` to equal `{}`\n  left: {:?}\n  right: {:?}",
                        stringify!($left),
                        stringify!($right),
                        left,
                        right
                    )
                    .into());
                }
            }
        }
    };
}
