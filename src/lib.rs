//! Library for converting between Mealy and Moore machines.
//!
//! A Mealy machine attaches its output to transitions, whereas a Moore machine attaches its output to states. Both are given as complete transition tables over integer states `0..n` and integer input symbols `0..m` (see [`automaton::MealyTable`] and [`automaton::MooreTable`]). Tables are immutable values, every conversion produces a new table.
//!
//! A Mealy table is turned into a Moore table by _state-splitting_ ([`conversion::split_states`]): each distinct pair of destination and output that occurs on a transition becomes one Moore state, labeled by the destination, the output and a disambiguation mark that distinguishes several copies of the same destination (see [`automaton::MooreStateLabel`]). The states of the result are ordered by destination, which makes the output a pure function of the input table. The other direction is _output-folding_ ([`conversion::fold_outputs`]), which moves the output of each Moore state onto all of its incoming transitions.
//!
//! Raw text is read with the functions in [`parse`] and results are handed to callers through [`present`], either as serializable documents or as human readable tables via [`Show`]. The functions [`mealy_to_moore`] and [`moore_to_mealy`] chain all of this together.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use mealy_moore::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        automaton::{
            InvariantViolation, MealyEdge, MealyTable, MooreKey, MooreStateLabel, MooreTable,
            Output, State,
        },
        conversion::{fold_outputs, split_states},
        mealy_to_moore, moore_to_mealy,
        parse::{parse_mealy, parse_moore, ErrorKind, ParseError},
        present::{ConversionDocument, MealyDocument, MooreDocument, MooreSourceDocument},
        Show,
    };
}

/// Type aliases for the collections used throughout the crate.
pub mod math;

/// Defines Mealy and Moore transition tables together with the invariants they uphold.
pub mod automaton;

pub mod conversion;

pub mod parse;

pub mod present;

/// Implements the generation of random transition tables. This is feature gated behind the `random` feature.
#[cfg(feature = "random")]
pub mod random;

use automaton::{MealyTable, MooreTable};
use parse::ParseError;
use present::{ConversionDocument, MealyDocument, MooreDocument, MooreSourceDocument};
use tracing::debug;

/// Helper trait which can be used to display transition tables in the terminal.
pub trait Show {
    /// Returns a human readable representation of `self`. For a table, this should list every
    /// state by its name together with its outgoing transitions.
    fn show(&self) -> String;

    /// Works like [`Show::show`], but may use terminal colors to make the output easier to
    /// read. By default this simply calls [`Show::show`].
    fn show_highlighted(&self) -> String {
        self.show()
    }
}

/// Reads a Mealy table from `raw`, splits it into a Moore table and presents both. If `raw`
/// is not a well-formed Mealy table, the error describes what is wrong with it and nothing
/// is converted.
///
/// ```
/// use mealy_moore::prelude::*;
///
/// let document = mealy_to_moore("1 0 1 1\n0 0 1 1").unwrap();
/// assert_eq!(document.original.states, ["q0", "q1"]);
/// assert_eq!(document.converted.moore_states.len(), 3);
/// assert_eq!(document.converted.moore_states[1].name, "q1/0");
/// ```
pub fn mealy_to_moore(
    raw: &str,
) -> Result<ConversionDocument<MealyDocument, MooreDocument>, ParseError> {
    let mealy: MealyTable = raw.parse()?;
    let moore = mealy.to_moore();
    debug!(
        "converted mealy table ({} states, {} inputs) into moore table ({} states)",
        mealy.size(),
        mealy.inputs(),
        moore.size()
    );
    Ok(ConversionDocument::mealy_to_moore(&mealy, &moore))
}

/// Reads a Moore table from `raw`, folds its outputs into a Mealy table and presents both.
/// If `raw` is not a well-formed Moore table, the error describes what is wrong with it and
/// nothing is converted.
///
/// ```
/// use mealy_moore::prelude::*;
///
/// let document = moore_to_mealy("0 1\n1 0\n1 1").unwrap();
/// assert_eq!(document.original.states[1].name, "q1");
/// assert_eq!(document.converted.transitions[0].to, "q1");
/// assert_eq!(document.converted.transitions[0].output, "1");
/// ```
pub fn moore_to_mealy(
    raw: &str,
) -> Result<ConversionDocument<MooreSourceDocument, MealyDocument>, ParseError> {
    let moore: MooreTable = raw.parse()?;
    let mealy = moore.to_mealy();
    debug!(
        "converted moore table ({} states, {} inputs) into mealy table",
        moore.size(),
        moore.inputs()
    );
    Ok(ConversionDocument::moore_to_mealy(&moore, &mealy))
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use serde_json::json;

    const REFERENCE_MEALY: &str = "2 0 2 1\n3 0 0 1\n1 1 3 1\n3 0 1 1";

    #[test_log::test]
    fn reference_mealy_to_moore() {
        let document = mealy_to_moore(REFERENCE_MEALY).unwrap();
        assert_eq!(document.original.states, ["q0", "q1", "q2", "q3"]);
        assert_eq!(document.original.transitions.len(), 8);

        let value = serde_json::to_value(&document.converted).unwrap();
        assert_eq!(
            value,
            json!({
                "moore_states": [
                    {"name": "q0/1", "output": 1},
                    {"name": "q1/1", "output": 1},
                    {"name": "q2/0", "output": 0},
                    {"name": "q2'/1", "output": 1},
                    {"name": "q3/0", "output": 0},
                    {"name": "q3'/1", "output": 1},
                ],
                "transitions": {
                    "q0/1": ["q2/0", "q2'/1"],
                    "q1/1": ["q3/0", "q0/1"],
                    "q2/0": ["q1/1", "q3'/1"],
                    "q2'/1": ["q1/1", "q3'/1"],
                    "q3/0": ["q3/0", "q1/1"],
                    "q3'/1": ["q3/0", "q1/1"],
                },
                "inputs_per_state": 2,
            })
        );
    }

    #[test]
    fn reference_round_trip() {
        let mealy: MealyTable = REFERENCE_MEALY.parse().unwrap();
        let moore = mealy.to_moore();
        let back = moore.to_mealy();
        // every copy of a mealy state answers like the original state
        for (state, input, edge) in back.edges() {
            let origin = moore.label(state).unwrap().origin();
            let original = mealy.transition(origin, input).unwrap();
            assert_eq!(edge.output, original.output);
            assert_eq!(moore.label(edge.target).unwrap().origin(), original.target);
        }
    }

    #[test]
    fn moore_to_mealy_document() {
        let document = moore_to_mealy("0 1 1\n1 2\n2 0\n0 1").unwrap();
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value["original"],
            json!({
                "states": [
                    {"name": "q0", "output": 0},
                    {"name": "q1", "output": 1},
                    {"name": "q2", "output": 1},
                ],
                "transitions": {
                    "q0": ["q1", "q2"],
                    "q1": ["q2", "q0"],
                    "q2": ["q0", "q1"],
                },
                "inputs_per_state": 2,
            })
        );
        assert!(value["original"].get("moore_states").is_none());
        assert_eq!(value["converted"]["states"], json!(["q0", "q1", "q2"]));
        assert_eq!(
            value["converted"]["transitions"][3],
            json!({"from": "q1", "input": "1", "to": "q0", "output": "0"})
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(
            mealy_to_moore("0 1 0"),
            Err(ParseError::OddValueCount { line: 1, count: 3 })
        ));
        assert!(matches!(
            moore_to_mealy("0 1 1\n1 2\n2 0"),
            Err(ParseError::RowCountMismatch { outputs: 3, rows: 2 })
        ));
        let err = mealy_to_moore("0 0\n5 0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    }

    #[test]
    fn conversions_are_deterministic() {
        let first = mealy_to_moore(REFERENCE_MEALY).unwrap().to_json().unwrap();
        let second = mealy_to_moore(REFERENCE_MEALY).unwrap().to_json().unwrap();
        assert_eq!(first, second);
    }
}
