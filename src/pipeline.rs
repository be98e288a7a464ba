// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Textual pipelines for `eval` and the REPL.
//!
//! ```text
//! pipeline := source ( '|' stage )*
//! source   := 'list' word*
//!           | 'range' int int [ 'by' int ]
//! stage    := 'filter' ( 'even' | 'odd' | 'gt' int | 'lt' int | 'starts-with' word )
//!           | 'take' bound
//!           | 'map' ( 'double' | 'negate' | 'upper' )
//!           | 'enumerate'
//! ```
//!
//! The source is stage 1 for error positions.

use std::fmt;
use std::str::FromStr;

use stepwise_core::{Bound, GeneratorExt, ListSource, Range, Sequence, SequenceExt};
use tracing::debug;

use crate::error::{Result, StepwiseError};

/// A type-erased pipeline ready to be stepped.
pub type BoxedSequence = Box<dyn Sequence<Item = Value>>;

/// Words that start a source or a stage, for completion.
pub const KEYWORDS: &[&str] = &[
    "list",
    "range",
    "by",
    "filter",
    "even",
    "odd",
    "gt",
    "lt",
    "starts-with",
    "take",
    "map",
    "double",
    "negate",
    "upper",
    "enumerate",
];

/// An item flowing through a textual pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
    /// An item paired with its index by `enumerate`
    Entry(usize, Box<Value>),
}

impl Value {
    /// Integers become `Int`, anything else `Text`.
    pub fn from_word(word: &str) -> Self {
        match word.parse() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Text(word.to_string()),
        }
    }

    /// The value an `Entry` wraps, or the value itself.
    fn inner(&self) -> &Value {
        match self {
            Value::Entry(_, inner) => inner.inner(),
            other => other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Entry(index, value) => write!(f, "[{}, {}]", index, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    List(Vec<Value>),
    Range { start: i64, end: i64, by: Option<i64> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Even,
    Odd,
    Gt(i64),
    Lt(i64),
    /// Case-insensitive prefix match on text
    StartsWith(String),
}

impl Predicate {
    /// Numeric predicates are false for text; `starts-with` is false for
    /// numbers.
    pub fn test(&self, value: &Value) -> bool {
        match (self, value.inner()) {
            (Predicate::Even, Value::Int(n)) => n % 2 == 0,
            (Predicate::Odd, Value::Int(n)) => n % 2 != 0,
            (Predicate::Gt(limit), Value::Int(n)) => n > limit,
            (Predicate::Lt(limit), Value::Int(n)) => n < limit,
            (Predicate::StartsWith(prefix), Value::Text(s)) => {
                s.to_lowercase().starts_with(&prefix.to_lowercase())
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Double,
    Negate,
    Upper,
}

impl Transform {
    /// Transforms that do not apply to a value's kind leave it unchanged.
    pub fn apply(self, value: Value) -> Value {
        match (self, value) {
            (Transform::Double, Value::Int(n)) => Value::Int(n.saturating_mul(2)),
            (Transform::Negate, Value::Int(n)) => Value::Int(n.saturating_neg()),
            (Transform::Upper, Value::Text(s)) => Value::Text(s.to_uppercase()),
            (transform, Value::Entry(index, inner)) => {
                Value::Entry(index, Box::new(transform.apply(*inner)))
            }
            (_, other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Filter(Predicate),
    Take(Bound),
    Map(Transform),
    Enumerate,
}

/// A parsed pipeline. Building it yields a fresh sequence every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    source: Source,
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Build a fresh sequence for this pipeline.
    pub fn build(&self) -> BoxedSequence {
        let mut sequence: BoxedSequence = match &self.source {
            Source::List(items) => Box::new(ListSource::new(items.clone())),
            Source::Range { start, end, by: None } => {
                Box::new(Range::new(*start, *end).map(Value::Int))
            }
            Source::Range { start, end, by: Some(delta) } => {
                let delta = *delta;
                Box::new(
                    Range::steered(*start, *end)
                        .steer(move |_| Some(delta))
                        .map(Value::Int),
                )
            }
        };

        for stage in &self.stages {
            sequence = match stage.clone() {
                Stage::Filter(predicate) => {
                    Box::new(sequence.filter(move |value| predicate.test(value)))
                }
                Stage::Take(bound) => Box::new(sequence.take(bound.get())),
                Stage::Map(transform) => Box::new(sequence.map(move |value| transform.apply(value))),
                Stage::Enumerate => Box::new(
                    sequence
                        .enumerate()
                        .map(|(index, value)| Value::Entry(index, Box::new(value))),
                ),
            };
        }
        sequence
    }

    /// Number of stages after the source.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

impl FromStr for Pipeline {
    type Err = StepwiseError;

    fn from_str(text: &str) -> Result<Self> {
        let mut segments = text.split('|').map(str::trim);

        let source = match segments.next() {
            Some(segment) if !segment.is_empty() => parse_source(segment)?,
            _ => return Err(StepwiseError::pipeline(1, "expected a source (`list` or `range`)")),
        };

        let mut stages = Vec::new();
        for (offset, segment) in segments.enumerate() {
            stages.push(parse_stage(segment, offset + 2)?);
        }

        debug!(stages = stages.len(), "parsed pipeline");
        Ok(Self { source, stages })
    }
}

fn parse_source(segment: &str) -> Result<Source> {
    let words: Vec<&str> = segment.split_whitespace().collect();
    match words.as_slice() {
        ["list", items @ ..] => Ok(Source::List(
            items.iter().map(|word| Value::from_word(word)).collect(),
        )),
        ["range", start, end] => Ok(Source::Range {
            start: parse_int(start, 1)?,
            end: parse_int(end, 1)?,
            by: None,
        }),
        ["range", start, end, "by", delta] => {
            let delta = parse_int(delta, 1)?;
            if delta < 1 {
                return Err(StepwiseError::pipeline(
                    1,
                    format!("range stride must be positive, got {}", delta),
                ));
            }
            Ok(Source::Range {
                start: parse_int(start, 1)?,
                end: parse_int(end, 1)?,
                by: Some(delta),
            })
        }
        ["range", ..] => Err(StepwiseError::pipeline(
            1,
            "usage: range <start> <end> [by <delta>]",
        )),
        [other, ..] => Err(StepwiseError::pipeline(
            1,
            format!("unknown source '{}', expected `list` or `range`", other),
        )),
        [] => Err(StepwiseError::pipeline(1, "expected a source")),
    }
}

fn parse_stage(segment: &str, position: usize) -> Result<Stage> {
    let words: Vec<&str> = segment.split_whitespace().collect();
    match words.as_slice() {
        ["filter", "even"] => Ok(Stage::Filter(Predicate::Even)),
        ["filter", "odd"] => Ok(Stage::Filter(Predicate::Odd)),
        ["filter", "gt", n] => Ok(Stage::Filter(Predicate::Gt(parse_int(n, position)?))),
        ["filter", "lt", n] => Ok(Stage::Filter(Predicate::Lt(parse_int(n, position)?))),
        ["filter", "starts-with", prefix] => {
            Ok(Stage::Filter(Predicate::StartsWith(prefix.to_string())))
        }
        ["filter", ..] => Err(StepwiseError::pipeline(
            position,
            "usage: filter even|odd|gt <n>|lt <n>|starts-with <prefix>",
        )),
        ["take", max] => max
            .parse::<Bound>()
            .map(Stage::Take)
            .map_err(|err| StepwiseError::pipeline(position, err.to_string())),
        ["take", ..] => Err(StepwiseError::pipeline(position, "usage: take <max>")),
        ["map", "double"] => Ok(Stage::Map(Transform::Double)),
        ["map", "negate"] => Ok(Stage::Map(Transform::Negate)),
        ["map", "upper"] => Ok(Stage::Map(Transform::Upper)),
        ["map", ..] => Err(StepwiseError::pipeline(
            position,
            "usage: map double|negate|upper",
        )),
        ["enumerate"] => Ok(Stage::Enumerate),
        [] => Err(StepwiseError::pipeline(position, "empty stage")),
        [other, ..] => Err(StepwiseError::pipeline(
            position,
            format!("unknown stage '{}'", other),
        )),
    }
}

fn parse_int(word: &str, position: usize) -> Result<i64> {
    word.parse()
        .map_err(|_| StepwiseError::pipeline(position, format!("expected an integer, got '{}'", word)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepwise_macros::{assert_err, assert_matches, assert_ok, assert_yields};

    fn run(text: &str) -> Vec<Value> {
        let pipeline: Pipeline = assert_ok!(text.parse());
        pipeline.build().collect_vec()
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_palette_take_filter() {
        assert_eq!(
            run("list Purple Green yellow Paras popple | filter starts-with p | take 2"),
            vec![text("Purple"), text("Paras")]
        );
    }

    #[test]
    fn test_range_by_feedback() {
        let values = run("range 1 10 by 2");
        assert_eq!(
            values,
            [1, 3, 5, 7, 9].into_iter().map(Value::Int).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_range_default_stride() {
        assert_eq!(run("range 1 10").len(), 10);
    }

    #[test]
    fn test_map_and_filter() {
        assert_eq!(
            run("list 1 2 3 4 | filter gt 2 | map double"),
            vec![Value::Int(6), Value::Int(8)]
        );
    }

    #[test]
    fn test_enumerate_then_map_keeps_index() {
        assert_eq!(
            run("list a b | enumerate | map upper"),
            vec![
                Value::Entry(0, Box::new(text("A"))),
                Value::Entry(1, Box::new(text("B"))),
            ]
        );
    }

    #[test]
    fn test_mismatched_kinds() {
        assert_eq!(run("list 1 two 3 | filter odd"), vec![Value::Int(1), Value::Int(3)]);
        assert_eq!(run("list 7 x | map upper"), vec![Value::Int(7), text("X")]);
    }

    #[test]
    fn test_build_is_fresh_each_time() {
        let pipeline: Pipeline = assert_ok!("range 1 3".parse());
        let mut first = pipeline.build();
        let _ = first.step();
        let mut second = pipeline.build();
        assert_yields!(second, [Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_yields!(first, [Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_take_zero() {
        assert!(run("range 1 5 | take 0").is_empty());
    }

    #[test]
    fn test_negative_take_reports_invalid_bound() {
        let err = assert_err!("range 1 5 | take -1".parse::<Pipeline>());
        assert_matches!(err, StepwiseError::Pipeline { position: 2, ref message } if message.contains("InvalidBound"));
    }

    #[test]
    fn test_parse_errors_carry_position() {
        assert_matches!(
            assert_err!("".parse::<Pipeline>()),
            StepwiseError::Pipeline { position: 1, .. }
        );
        assert_matches!(
            assert_err!("range 1 x".parse::<Pipeline>()),
            StepwiseError::Pipeline { position: 1, .. }
        );
        assert_matches!(
            assert_err!("list a | take 1 | shuffle".parse::<Pipeline>()),
            StepwiseError::Pipeline { position: 3, .. }
        );
        assert_matches!(
            assert_err!("range 1 9 by 0".parse::<Pipeline>()),
            StepwiseError::Pipeline { position: 1, .. }
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(text("Paras").to_string(), "'Paras'");
        assert_eq!(Value::Entry(2, Box::new(Value::Int(5))).to_string(), "[2, 5]");
    }
}
