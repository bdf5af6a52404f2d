use serde::{Serialize, Serializer};

use crate::automaton::{MealyTable, MooreTable, Output};

/// A single transition of a Mealy machine in the exchange format. Inputs and outputs are
/// given as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    /// Name of the state the transition leaves.
    pub from: String,
    /// The input symbol.
    pub input: String,
    /// Name of the state the transition leads to.
    pub to: String,
    /// The emitted output.
    pub output: String,
}

/// A Mealy machine in the exchange format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealyDocument {
    /// Names of all states in state order.
    pub states: Vec<String>,
    /// All transitions in row-major order.
    pub transitions: Vec<TransitionRecord>,
}

impl From<&MealyTable> for MealyDocument {
    fn from(mealy: &MealyTable) -> Self {
        Self {
            states: mealy.state_indices().map(|q| mealy.name(q)).collect(),
            transitions: mealy
                .edges()
                .map(|(state, input, edge)| TransitionRecord {
                    from: mealy.name(state),
                    input: input.to_string(),
                    to: mealy.name(edge.target),
                    output: edge.output.to_string(),
                })
                .collect(),
        }
    }
}

/// A state of a Moore machine together with its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateRecord {
    /// Name of the state.
    pub name: String,
    /// Output of the state.
    pub output: Output,
}

/// Maps the name of each state to the names of its successors, ordered by input symbol.
/// Serializes as a map whose entries appear in state order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Successors(Vec<(String, Vec<String>)>);

impl Successors {
    /// Returns the successors of the state called `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(state, _)| state == name)
            .map(|(_, successors)| successors.as_slice())
    }

    /// Iterates over all entries in state order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.0
            .iter()
            .map(|(state, successors)| (state.as_str(), successors.as_slice()))
    }
}

impl Serialize for Successors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(state, successors)| (state, successors)))
    }
}

/// The states of `moore` with their outputs, and the successors of each state.
fn moore_parts(moore: &MooreTable) -> (Vec<StateRecord>, Successors) {
    let states = moore
        .state_indices()
        .zip(moore.outputs())
        .map(|(q, &output)| StateRecord {
            name: moore.name(q),
            output,
        })
        .collect();
    let transitions = Successors(
        moore
            .rows()
            .enumerate()
            .map(|(q, row)| {
                (
                    moore.name(q),
                    row.iter().map(|&target| moore.name(target)).collect(),
                )
            })
            .collect(),
    );
    (states, transitions)
}

/// A Moore machine that was produced by splitting a Mealy machine, in the exchange format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MooreDocument {
    /// All states in state order.
    pub moore_states: Vec<StateRecord>,
    /// The successors of each state.
    pub transitions: Successors,
    /// Number of input symbols.
    pub inputs_per_state: usize,
}

impl From<&MooreTable> for MooreDocument {
    fn from(moore: &MooreTable) -> Self {
        let (moore_states, transitions) = moore_parts(moore);
        Self {
            moore_states,
            transitions,
            inputs_per_state: moore.inputs(),
        }
    }
}

/// A Moore machine as it was handed to a conversion. Apart from listing its states under
/// `states`, it is written like a [`MooreDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MooreSourceDocument {
    /// All states in state order.
    pub states: Vec<StateRecord>,
    /// The successors of each state.
    pub transitions: Successors,
    /// Number of input symbols.
    pub inputs_per_state: usize,
}

impl From<&MooreTable> for MooreSourceDocument {
    fn from(moore: &MooreTable) -> Self {
        let (states, transitions) = moore_parts(moore);
        Self {
            states,
            transitions,
            inputs_per_state: moore.inputs(),
        }
    }
}

/// The result of a conversion: the machine that was given and the machine it was converted
/// into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionDocument<O, C> {
    /// The machine before the conversion.
    pub original: O,
    /// The machine after the conversion.
    pub converted: C,
}

impl<O: Serialize, C: Serialize> ConversionDocument<O, C> {
    /// Serializes `self` into a single line of JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes `self` into indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ConversionDocument<MealyDocument, MooreDocument> {
    /// Presents `mealy` together with the Moore table it was split into.
    pub fn mealy_to_moore(mealy: &MealyTable, moore: &MooreTable) -> Self {
        Self {
            original: mealy.into(),
            converted: moore.into(),
        }
    }
}

impl ConversionDocument<MooreSourceDocument, MealyDocument> {
    /// Presents `moore` together with the Mealy table its outputs were folded into.
    pub fn moore_to_mealy(moore: &MooreTable, mealy: &MealyTable) -> Self {
        Self {
            original: moore.into(),
            converted: mealy.into(),
        }
    }
}
