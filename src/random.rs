use tracing::trace;

use crate::automaton::{MealyEdge, MealyTable, MooreTable, Output};

/// Generates a random [`MealyTable`] with `size` states over `inputs` input symbols. For each
/// state and symbol, the target is drawn uniformly from all states and the output uniformly
/// from `0..outputs`. Depending on which state one starts in, some states may be unreachable.
///
/// # Panics
/// If `outputs` is not positive while the table has at least one transition.
pub fn generate_random_mealy(size: usize, inputs: usize, outputs: Output) -> MealyTable {
    let rows = (0..size)
        .map(|_| {
            (0..inputs)
                .map(|_| MealyEdge::new(fastrand::usize(..size), fastrand::i64(0..outputs)))
                .collect()
        })
        .collect();
    trace!("generated random mealy table with {size} states and {inputs} inputs");
    MealyTable::from_edges(inputs, rows)
}

/// Generates a random [`MooreTable`] with `size` states over `inputs` input symbols, where
/// targets are drawn uniformly from all states and state outputs uniformly from `0..outputs`.
///
/// # Panics
/// If `outputs` is not positive while `size` is not zero.
pub fn generate_random_moore(size: usize, inputs: usize, outputs: Output) -> MooreTable {
    let state_outputs = (0..size).map(|_| fastrand::i64(0..outputs)).collect();
    let rows = (0..size)
        .map(|_| {
            (0..inputs)
                .map(|_| fastrand::usize(..size) as i64)
                .collect()
        })
        .collect();
    trace!("generated random moore table with {size} states and {inputs} inputs");
    MooreTable::new(state_outputs, rows).expect("all targets are drawn from the existing states")
}
