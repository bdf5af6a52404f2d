//! Reading transition tables from line-oriented text.
//!
//! Both formats consist of whitespace separated integers, blank lines are skipped.
//!
//! A Mealy table has one line per state. Each line holds `2m` integers that are read as `m`
//! pairs `next output`, one pair per input symbol in ascending order:
//! ```text
//! 2 0 2 1
//! 3 0 0 1
//! 1 1 3 1
//! 3 0 1 1
//! ```
//!
//! A Moore table starts with a line holding the outputs of all `n` states, followed by `n`
//! lines holding the `m` successors of the respective state:
//! ```text
//! 0 1 1
//! 1 2
//! 2 0
//! 0 1
//! ```
//!
//! Every line of a table has to have the same number of values as the first one.

use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;
use tracing::trace;

use crate::automaton::{InvariantViolation, MealyTable, MooreTable, Output};

/// Classifies a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text does not have the shape of a table.
    Format,
    /// The text has the shape of a table, but the table is not well-formed, for example
    /// because a transition leads to a state that does not exist.
    InvariantViolation,
}

/// Reasons why a text can not be read as a transition table. The [`std::fmt::Display`]
/// output of each variant is meant to be shown to whoever supplied the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text contains nothing but whitespace.
    #[error("input contains no table rows")]
    Empty,
    /// Some token is not an integer.
    #[error("line {line}: `{token}` is not an integer")]
    InvalidToken {
        /// Line of the token, counted from 1.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A line of a Mealy table does not consist of `(next, output)` pairs.
    #[error("line {line}: expected pairs of next state and output, but found {count} values")]
    OddValueCount {
        /// Line number, counted from 1.
        line: usize,
        /// Number of values on the line.
        count: usize,
    },
    /// A line has a different number of values than the first line of the table.
    #[error("line {line}: expected {expected} values like the first row, but found {found}")]
    WidthMismatch {
        /// Line number, counted from 1.
        line: usize,
        /// Number of values on the first row.
        expected: usize,
        /// Number of values on this line.
        found: usize,
    },
    /// The outputs line of a Moore table names a different number of states than there are
    /// transition rows.
    #[error("expected {outputs} transition rows, one per output, but found {rows}")]
    RowCountMismatch {
        /// Number of values on the outputs line.
        outputs: usize,
        /// Number of transition rows.
        rows: usize,
    },
    /// The table could be read, but is not well-formed.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl ParseError {
    /// Returns whether `self` is a formatting problem or an ill-formed table.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Invariant(_) => ErrorKind::InvariantViolation,
            _ => ErrorKind::Format,
        }
    }
}

/// Returns the non-blank lines of `raw`, trimmed and paired with their line number.
fn data_lines(raw: &str) -> impl Iterator<Item = (usize, &str)> {
    raw.lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty())
}

fn integers(line: usize, text: &str) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidToken {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Remembers the width of the first row and checks all further rows against it.
#[derive(Debug, Default)]
struct Width(Option<usize>);

impl Width {
    fn check(&mut self, line: usize, found: usize) -> Result<(), ParseError> {
        match self.0 {
            None => {
                self.0 = Some(found);
                Ok(())
            }
            Some(expected) if expected != found => Err(ParseError::WidthMismatch {
                line,
                expected,
                found,
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Reads a [`MealyTable`] from `raw`, see the [module documentation](crate::parse) for the format.
///
/// ```
/// use mealy_moore::prelude::*;
///
/// let mealy = parse_mealy("1 0 0 1\n1 1 0 0").unwrap();
/// assert_eq!(mealy.transition(1, 0), Some(MealyEdge::new(1, 1)));
///
/// assert!(matches!(
///     parse_mealy("1 0 0"),
///     Err(ParseError::OddValueCount { line: 1, count: 3 })
/// ));
/// ```
pub fn parse_mealy(raw: &str) -> Result<MealyTable, ParseError> {
    let mut width = Width::default();
    let mut rows: Vec<Vec<(i64, Output)>> = Vec::new();

    for (line, text) in data_lines(raw) {
        let values = integers(line, text)?;
        if values.len() % 2 != 0 {
            return Err(ParseError::OddValueCount {
                line,
                count: values.len(),
            });
        }
        width.check(line, values.len())?;
        rows.push(values.into_iter().tuples().collect_vec());
    }

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }
    trace!(
        "read mealy table with {} states and {} inputs",
        rows.len(),
        rows[0].len()
    );
    Ok(MealyTable::new(rows)?)
}

/// Reads a [`MooreTable`] from `raw`, see the [module documentation](crate::parse) for the format.
///
/// ```
/// use mealy_moore::prelude::*;
///
/// let moore = parse_moore("0 1\n1 0\n1 1").unwrap();
/// assert_eq!(moore.outputs(), &[0, 1]);
/// assert_eq!(moore.row(0), Some(&[1, 0][..]));
///
/// assert!(matches!(
///     parse_moore("0 1\n1 0"),
///     Err(ParseError::RowCountMismatch { outputs: 2, rows: 1 })
/// ));
/// ```
pub fn parse_moore(raw: &str) -> Result<MooreTable, ParseError> {
    let mut lines = data_lines(raw);
    let (line, text) = lines.next().ok_or(ParseError::Empty)?;
    let outputs = integers(line, text)?;

    let mut width = Width::default();
    let mut rows = Vec::new();
    for (line, text) in lines {
        let values = integers(line, text)?;
        width.check(line, values.len())?;
        rows.push(values);
    }

    if rows.len() != outputs.len() {
        return Err(ParseError::RowCountMismatch {
            outputs: outputs.len(),
            rows: rows.len(),
        });
    }
    trace!(
        "read moore table with {} states and {} inputs",
        rows.len(),
        rows.first().map(Vec::len).unwrap_or(0)
    );
    Ok(MooreTable::new(outputs, rows)?)
}

impl FromStr for MealyTable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mealy(s)
    }
}

impl FromStr for MooreTable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_moore(s)
    }
}
