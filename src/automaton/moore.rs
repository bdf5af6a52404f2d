use std::ops::Range;

use super::{
    checked_target, state_name, uniform_width, Input, InvariantViolation, MooreStateLabel, Output,
    State,
};
use crate::automaton::MealyTable;

/// A Moore machine is a transition system where each state has an output. Here it is given
/// as a complete table of `n` states over `m` input symbols together with one output per
/// state.
///
/// Tables that result from splitting a [`MealyTable`] carry a [`MooreStateLabel`] for
/// each of their states, which is used as the name of the state. All other tables name
/// their states `q0`, `q1` and so on.
///
/// # Example
/// ```
/// use mealy_moore::prelude::*;
///
/// let moore = MooreTable::new(vec![0, 1], vec![vec![1, 0], vec![1, 1]]).unwrap();
/// assert_eq!(moore.output(1), Some(1));
/// assert_eq!(moore.transition(0, 0), Some(1));
/// assert_eq!(moore.name(1), "q1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MooreTable {
    inputs: usize,
    outputs: Vec<Output>,
    rows: Vec<Vec<State>>,
    labels: Option<Vec<MooreStateLabel>>,
}

impl MooreTable {
    /// Builds a table from the outputs of all states and the raw transition rows. There must
    /// be exactly one row per output, all rows must have the same width and each target must
    /// name an existing state.
    pub fn new(outputs: Vec<Output>, rows: Vec<Vec<i64>>) -> Result<Self, InvariantViolation> {
        if outputs.len() != rows.len() {
            return Err(InvariantViolation::OutputCountMismatch {
                outputs: outputs.len(),
                states: rows.len(),
            });
        }
        let inputs = uniform_width(&rows)?;
        let states = rows.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(state, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(input, target)| checked_target(state, input, target, states))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            inputs,
            outputs,
            rows,
            labels: None,
        })
    }

    /// Builds a labeled table from parts that are already known to be well-formed. The
    /// output of every state is the output of its label. Labeled tables are only built by
    /// [`crate::conversion::split_states`], which guarantees that labels are distinct.
    pub(crate) fn from_labeled_rows(
        inputs: usize,
        labels: Vec<MooreStateLabel>,
        rows: Vec<Vec<State>>,
    ) -> Self {
        debug_assert_eq!(labels.len(), rows.len());
        debug_assert!(rows.iter().all(|row| row.len() == inputs));
        debug_assert!(rows.iter().flatten().all(|target| *target < rows.len()));
        Self {
            inputs,
            outputs: labels.iter().map(MooreStateLabel::output).collect(),
            rows,
            labels: Some(labels),
        }
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

    /// Returns the output of `state`.
    pub fn output(&self, state: State) -> Option<Output> {
        self.outputs.get(state).copied()
    }

    /// Returns the outputs of all states, indexed by state.
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Returns the state that is reached from `state` on `input`, if both exist.
    pub fn transition(&self, state: State, input: Input) -> Option<State> {
        self.rows.get(state)?.get(input).copied()
    }

    /// Returns the successors of `state` ordered by input symbol.
    pub fn row(&self, state: State) -> Option<&[State]> {
        self.rows.get(state).map(Vec::as_slice)
    }

    /// Iterates over the rows of the table in state order, each row holding the successors
    /// of its state ordered by input symbol.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over all transitions as `(state, input, target)` triples in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (State, Input, State)> + '_ {
        self.rows.iter().enumerate().flat_map(|(state, row)| {
            row.iter()
                .enumerate()
                .map(move |(input, target)| (state, input, *target))
        })
    }

    /// Returns the label of `state` if `self` carries labels.
    pub fn label(&self, state: State) -> Option<&MooreStateLabel> {
        self.labels.as_ref()?.get(state)
    }

    /// Returns the labels of all states if `self` carries labels.
    pub fn labels(&self) -> Option<&[MooreStateLabel]> {
        self.labels.as_deref()
    }

    /// Returns the name of `state` in the exchange format. For labeled tables this is the
    /// displayed label, e.g. `q1'/0`, otherwise it is `q<state>`.
    pub fn name(&self, state: State) -> String {
        match self.label(state) {
            Some(label) => label.to_string(),
            None => state_name(state),
        }
    }

    /// Moves the output of each state onto all of its incoming transitions, see
    /// [`crate::conversion::fold_outputs`].
    pub fn to_mealy(&self) -> MealyTable {
        crate::conversion::fold_outputs(self)
    }
}
