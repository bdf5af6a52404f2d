use std::ops::Range;

use super::{checked_target, state_name, uniform_width, Input, InvariantViolation, Output, State};
use crate::automaton::MooreTable;

/// A single transition of a [`MealyTable`], consisting of the state it leads to and the
/// output that is emitted when it is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MealyEdge {
    /// The state the transition leads to.
    pub target: State,
    /// The output emitted on the transition.
    pub output: Output,
}

impl MealyEdge {
    /// Creates a new edge.
    pub fn new(target: State, output: Output) -> Self {
        Self { target, output }
    }
}

/// A Mealy machine is a transition system where each transition has an output. Here it is
/// given as a complete table: `n` states, each with exactly one outgoing transition for every
/// one of the `m` input symbols.
///
/// Tables are immutable once constructed. Conversions produce new tables and never touch
/// their input.
///
/// # Example
/// ```
/// use mealy_moore::prelude::*;
///
/// let mealy = MealyTable::new(vec![
///     vec![(1, 0), (0, 1)],
///     vec![(0, 1), (1, 0)],
/// ])
/// .unwrap();
/// assert_eq!(mealy.size(), 2);
/// assert_eq!(mealy.inputs(), 2);
/// assert_eq!(mealy.transition(1, 0), Some(MealyEdge::new(0, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MealyTable {
    inputs: usize,
    rows: Vec<Vec<MealyEdge>>,
}

impl MealyTable {
    /// Builds a table from raw `(target, output)` pairs, one row per state and one pair per
    /// input symbol. Fails if the rows have different widths or if some target does not
    /// name one of the `rows.len()` states.
    pub fn new(rows: Vec<Vec<(i64, Output)>>) -> Result<Self, InvariantViolation> {
        let inputs = uniform_width(&rows)?;
        let states = rows.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(state, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(input, (target, output))| {
                        checked_target(state, input, target, states)
                            .map(|target| MealyEdge::new(target, output))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { inputs, rows })
    }

    /// Builds a table from edges that are already known to be well-formed.
    pub(crate) fn from_edges(inputs: usize, rows: Vec<Vec<MealyEdge>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == inputs));
        debug_assert!(rows
            .iter()
            .flatten()
            .all(|edge| edge.target < rows.len()));
        Self { inputs, rows }
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of input symbols.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Returns true if the table has no states.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the indices of all states in ascending order.
    pub fn state_indices(&self) -> Range<State> {
        0..self.size()
    }

    /// Returns the name of `state` in the exchange format, e.g. `q3`.
    pub fn name(&self, state: State) -> String {
        state_name(state)
    }

    /// Returns the transition that leaves `state` on `input`, if both exist.
    pub fn transition(&self, state: State, input: Input) -> Option<MealyEdge> {
        self.rows.get(state)?.get(input).copied()
    }

    /// Returns the outgoing transitions of `state` ordered by input symbol.
    pub fn row(&self, state: State) -> Option<&[MealyEdge]> {
        self.rows.get(state).map(Vec::as_slice)
    }

    /// Iterates over the rows of the table in state order.
    pub fn rows(&self) -> impl Iterator<Item = &[MealyEdge]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over all transitions as `(state, input, edge)` triples in row-major order,
    /// i.e. by ascending state and then by ascending input.
    pub fn edges(&self) -> impl Iterator<Item = (State, Input, MealyEdge)> + '_ {
        self.rows.iter().enumerate().flat_map(|(state, row)| {
            row.iter()
                .enumerate()
                .map(move |(input, edge)| (state, input, *edge))
        })
    }

    /// Splits the states of `self` into one Moore state per distinct `(destination, output)`
    /// pair, see [`crate::conversion::split_states`].
    pub fn to_moore(&self) -> MooreTable {
        crate::conversion::split_states(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mealy_table_construction() {
        let mealy = MealyTable::new(vec![vec![(1, 5), (0, -1)], vec![(1, 0), (1, 0)]]).unwrap();
        assert_eq!(mealy.size(), 2);
        assert_eq!(mealy.inputs(), 2);
        assert_eq!(mealy.transition(0, 1), Some(MealyEdge::new(0, -1)));
        assert_eq!(mealy.transition(2, 0), None);
        assert_eq!(mealy.transition(0, 2), None);
        assert_eq!(
            mealy.edges().collect::<Vec<_>>(),
            vec![
                (0, 0, MealyEdge::new(1, 5)),
                (0, 1, MealyEdge::new(0, -1)),
                (1, 0, MealyEdge::new(1, 0)),
                (1, 1, MealyEdge::new(1, 0)),
            ]
        );
    }

    #[test]
    fn mealy_table_rejects_malformed_rows() {
        assert_eq!(
            MealyTable::new(vec![vec![(0, 0), (0, 0)], vec![(0, 0)]]),
            Err(InvariantViolation::RaggedRow {
                state: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            MealyTable::new(vec![vec![(0, 0)], vec![(2, 1)]]),
            Err(InvariantViolation::TargetOutOfRange {
                state: 1,
                input: 0,
                target: 2,
                states: 2
            })
        );
        assert!(MealyTable::new(vec![vec![(-1, 0)]]).is_err());
    }

    #[test]
    fn empty_mealy_table() {
        let mealy = MealyTable::new(vec![]).unwrap();
        assert!(mealy.is_empty());
        assert_eq!(mealy.inputs(), 0);
        assert_eq!(mealy.edges().count(), 0);
    }
}
