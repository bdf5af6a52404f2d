use tracing::debug;

use crate::automaton::{MealyEdge, MealyTable, MooreTable};

/// Converts a [`MooreTable`] into a [`MealyTable`] by output-folding: every transition keeps
/// its target and emits the output of that target. The output is thus produced on arrival
/// in a state, not when leaving it.
///
/// ```
/// use mealy_moore::prelude::*;
///
/// let moore = MooreTable::new(vec![7, 8], vec![vec![1, 0], vec![1, 1]]).unwrap();
/// let mealy = moore.to_mealy();
/// assert_eq!(mealy.transition(0, 0), Some(MealyEdge::new(1, 8)));
/// assert_eq!(mealy.transition(0, 1), Some(MealyEdge::new(0, 7)));
/// ```
pub fn fold_outputs(moore: &MooreTable) -> MealyTable {
    let outputs = moore.outputs();
    let rows = moore
        .rows()
        .map(|row| {
            row.iter()
                .map(|&target| MealyEdge::new(target, outputs[target]))
                .collect()
        })
        .collect();

    let mealy = MealyTable::from_edges(moore.inputs(), rows);
    debug!(
        "folded outputs of moore table with {} states onto {} transitions",
        moore.size(),
        mealy.size() * mealy.inputs()
    );
    mealy
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn outputs_are_read_from_the_destination() {
        let moore = MooreTable::new(
            vec![0, 1, 0],
            vec![vec![1, 2], vec![2, 0], vec![2, 1]],
        )
        .unwrap();
        let mealy = moore.to_mealy();
        assert_eq!(mealy.size(), 3);
        assert_eq!(mealy.inputs(), 2);
        for (state, input, edge) in mealy.edges() {
            let target = moore.transition(state, input).unwrap();
            assert_eq!(edge.target, target);
            assert_eq!(edge.output, moore.outputs()[target]);
        }
        // state 1 emits 1, but leaving it never does
        assert!(mealy.row(1).unwrap().iter().all(|edge| edge.output == 0));
    }

    #[test]
    fn folding_empty_table() {
        let moore = MooreTable::new(vec![], vec![]).unwrap();
        let mealy = moore.to_mealy();
        assert!(mealy.is_empty());
        assert_eq!(mealy.inputs(), 0);
    }

    #[cfg(feature = "random")]
    #[test]
    fn random_moore_tables_fold() {
        for size in 1..10 {
            let moore = crate::random::generate_random_moore(size, 3, 4);
            let mealy = moore.to_mealy();
            assert_eq!(mealy.size(), moore.size());
            assert!(mealy
                .edges()
                .all(|(_, _, edge)| moore.output(edge.target) == Some(edge.output)));
        }
    }
}
