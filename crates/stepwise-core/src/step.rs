// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The result of a single step.

/// Outcome of one request/response exchange with a sequence.
///
/// `Finished` carries no item. A sequence that has produced `Finished` must
/// produce it on every later step as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a step may carry an item that would be lost"]
pub enum Step<T> {
    /// The next item of the sequence
    Yielded(T),
    /// Terminal signal
    Finished,
}

impl<T> Step<T> {
    /// Returns `true` for the terminal signal.
    pub fn is_finished(&self) -> bool {
        matches!(self, Step::Finished)
    }

    /// Returns `true` if this step carries an item.
    pub fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Converts into the item, discarding the terminal signal.
    pub fn into_item(self) -> Option<T> {
        match self {
            Step::Yielded(item) => Some(item),
            Step::Finished => None,
        }
    }

    /// Borrows the item, if any.
    pub fn item(&self) -> Option<&T> {
        match self {
            Step::Yielded(item) => Some(item),
            Step::Finished => None,
        }
    }

    /// Maps the carried item, leaving `Finished` untouched.
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Yielded(item) => Step::Yielded(f(item)),
            Step::Finished => Step::Finished,
        }
    }

    /// The `(item, finished)` pair view of this step.
    pub fn into_parts(self) -> (Option<T>, bool) {
        let finished = self.is_finished();
        (self.into_item(), finished)
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => Step::Yielded(item),
            None => Step::Finished,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        step.into_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        assert_eq!(Step::Yielded(3).into_parts(), (Some(3), false));
        assert_eq!(Step::<i32>::Finished.into_parts(), (None, true));
    }

    #[test]
    fn test_map_keeps_finished() {
        let done: Step<i32> = Step::Finished;
        assert_eq!(done.map(|n| n * 2), Step::Finished);
        assert_eq!(Step::Yielded(4).map(|n| n * 2), Step::Yielded(8));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Step::from(Some('a')), Step::Yielded('a'));
        assert_eq!(Step::<char>::from(None), Step::Finished);
        assert_eq!(Option::from(Step::Yielded(1)), Some(1));
    }
}
