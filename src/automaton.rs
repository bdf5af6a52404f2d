use thiserror::Error;

mod label;
pub use label::{MooreKey, MooreStateLabel};

mod mealy;
pub use mealy::{MealyEdge, MealyTable};

mod moore;
pub use moore::MooreTable;

/// Index of a state in a transition table. States of a table with `n` states are
/// numbered `0..n`.
pub type State = usize;

/// Index of an input symbol. A table over `m` input symbols uses the symbols `0..m`.
pub type Input = usize;

/// The value a machine emits, either on a transition (Mealy) or in a state (Moore).
pub type Output = i64;

/// Returns the plain name of the state with index `state`, that is `q0`, `q1` and so on.
pub fn state_name(state: State) -> String {
    format!("q{state}")
}

/// Describes in which way a transition table fails to be well-formed. A table that
/// violates one of these is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A row has a different number of transitions than the first row of the table.
    #[error("state q{state} has {found} transitions, but the table has {expected} inputs")]
    RaggedRow {
        /// The offending state.
        state: State,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A transition points to a state that does not exist.
    #[error("transition from q{state} on input {input} targets {target}, but the table has {states} states")]
    TargetOutOfRange {
        /// Origin of the transition.
        state: State,
        /// Input symbol of the transition.
        input: Input,
        /// The raw target value.
        target: i64,
        /// Number of states in the table.
        states: usize,
    },
    /// A Moore table was given a different number of outputs than it has rows.
    #[error("{outputs} state outputs were given for {states} states")]
    OutputCountMismatch {
        /// Number of outputs.
        outputs: usize,
        /// Number of transition rows.
        states: usize,
    },
}

/// Checks that `rows` all have the width of the first row and returns that width.
/// An empty table has width `0`.
pub(crate) fn uniform_width<T>(rows: &[Vec<T>]) -> Result<usize, InvariantViolation> {
    let expected = rows.first().map(|row| row.len()).unwrap_or(0);
    for (state, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(InvariantViolation::RaggedRow {
                state,
                expected,
                found: row.len(),
            });
        }
    }
    Ok(expected)
}

/// Converts a raw target value into a [`State`], checking that it lies in `[0, states)`.
pub(crate) fn checked_target(
    state: State,
    input: Input,
    target: i64,
    states: usize,
) -> Result<State, InvariantViolation> {
    usize::try_from(target)
        .ok()
        .filter(|t| *t < states)
        .ok_or(InvariantViolation::TargetOutOfRange {
            state,
            input,
            target,
            states,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_range_is_checked() {
        assert_eq!(checked_target(0, 0, 2, 3), Ok(2));
        assert!(matches!(
            checked_target(1, 1, 3, 3),
            Err(InvariantViolation::TargetOutOfRange { target: 3, .. })
        ));
        assert!(checked_target(0, 0, -1, 3).is_err());
        assert!(checked_target(0, 0, 0, 0).is_err());
    }

    #[test]
    fn ragged_rows_are_reported() {
        assert_eq!(uniform_width::<u8>(&[]), Ok(0));
        assert_eq!(uniform_width(&[vec![1, 2], vec![3, 4]]), Ok(2));
        assert_eq!(
            uniform_width(&[vec![1, 2], vec![3]]),
            Err(InvariantViolation::RaggedRow {
                state: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn diagnostics_name_the_offending_transition() {
        let err = InvariantViolation::TargetOutOfRange {
            state: 2,
            input: 1,
            target: 7,
            states: 4,
        };
        assert_eq!(
            err.to_string(),
            "transition from q2 on input 1 targets 7, but the table has 4 states"
        );
    }
}
