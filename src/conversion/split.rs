use tracing::{debug, trace};

use crate::automaton::{MealyTable, MooreKey, MooreStateLabel, MooreTable, State};
use crate::math::{Bijection, Map, Set};

/// Converts a [`MealyTable`] into an equivalent [`MooreTable`] by state-splitting.
///
/// The transitions of `mealy` are scanned in row-major order. Every `(destination, output)`
/// pair that has not been seen before becomes a new Moore state, labeled with the
/// destination and the output. The first Moore state created for some destination carries
/// no disambiguation mark, every further one carries one more mark than the previous
/// copy of the same destination. Afterwards, the Moore states are ordered by their
/// destination, where copies of the same destination stay in the order they were found in.
///
/// The Moore state `(q, o)` moves on input `a` to the Moore state identified by the target
/// and output of the transition that leaves `q` on `a` in `mealy`.
///
/// Note that the set of Moore states is determined by which pairs occur anywhere in the
/// table, not by what is reachable from some initial state.
///
/// # Example
/// ```
/// use mealy_moore::prelude::*;
///
/// let mealy = MealyTable::new(vec![
///     vec![(1, 0), (1, 1)],
///     vec![(0, 0), (1, 1)],
/// ])
/// .unwrap();
/// let moore = mealy.to_moore();
///
/// let names: Vec<_> = moore.state_indices().map(|q| moore.name(q)).collect();
/// assert_eq!(names, ["q0/0", "q1/0", "q1'/1"]);
/// assert_eq!(moore.row(1), Some(&[0, 2][..]));
/// ```
pub fn split_states(mealy: &MealyTable) -> MooreTable {
    let mut seen: Set<MooreKey> = Set::default();
    let mut copies: Map<State, usize> = Map::default();
    let mut labels = Vec::new();

    for (_, _, edge) in mealy.edges() {
        let key = MooreKey::new(edge.target, edge.output);
        if !seen.insert(key) {
            continue;
        }
        let count = copies.entry(edge.target).or_default();
        let label = MooreStateLabel::new(edge.target, edge.output, *count);
        *count += 1;
        trace!("found new moore state {label}");
        labels.push(label);
    }

    // stable, so copies of the same origin keep their discovery order
    labels.sort_by_key(MooreStateLabel::origin);

    let index: Bijection<MooreKey, State> = labels
        .iter()
        .enumerate()
        .map(|(state, label)| (label.key(), state))
        .collect();

    let rows = labels
        .iter()
        .map(|label| {
            mealy
                .row(label.origin())
                .expect("origin exists")
                .iter()
                .map(|edge| {
                    *index
                        .get_by_left(&MooreKey::new(edge.target, edge.output))
                        .expect("key was recorded")
                })
                .collect()
        })
        .collect();

    let moore = MooreTable::from_labeled_rows(mealy.inputs(), labels, rows);
    debug!(
        "split mealy table with {} states into moore table with {} states",
        mealy.size(),
        moore.size()
    );
    moore
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn reference_mealy() -> MealyTable {
        "2 0 2 1\n3 0 0 1\n1 1 3 1\n3 0 1 1".parse().unwrap()
    }

    fn names(moore: &MooreTable) -> Vec<String> {
        moore.state_indices().map(|q| moore.name(q)).collect()
    }

    #[test_log::test]
    fn reference_machine_is_split() {
        let moore = reference_mealy().to_moore();
        // scan order finds (2,0) (2,1) (3,0) (0,1) (1,1) (3,1)
        assert_eq!(
            names(&moore),
            ["q0/1", "q1/1", "q2/0", "q2'/1", "q3/0", "q3'/1"]
        );
        assert_eq!(moore.outputs(), &[1, 1, 0, 1, 0, 1]);

        let successors = |state: usize| -> Vec<String> {
            moore
                .row(state)
                .unwrap()
                .iter()
                .map(|q| moore.name(*q))
                .collect()
        };
        assert_eq!(successors(0), ["q2/0", "q2'/1"]);
        assert_eq!(successors(1), ["q3/0", "q0/1"]);
        // both copies of q2 behave like q2
        assert_eq!(successors(2), ["q1/1", "q3'/1"]);
        assert_eq!(successors(3), ["q1/1", "q3'/1"]);
        assert_eq!(successors(4), ["q3/0", "q1/1"]);
        assert_eq!(successors(5), ["q3/0", "q1/1"]);
    }

    #[test]
    fn same_destination_is_split_by_output() {
        let moore = reference_mealy().to_moore();
        let copies: Vec<_> = moore
            .labels()
            .unwrap()
            .iter()
            .filter(|label| label.origin() == 2)
            .map(|label| (label.output(), label.disambiguator()))
            .collect();
        assert_eq!(copies, [(0, 0), (1, 1)]);
    }

    #[test]
    fn disambiguation_is_counted_per_destination() {
        let mealy = MealyTable::new(vec![
            vec![(1, 0), (0, 0), (1, 1)],
            vec![(0, 1), (1, 2), (0, 2)],
        ])
        .unwrap();
        let moore = mealy.to_moore();
        assert_eq!(
            names(&moore),
            ["q0/0", "q0'/1", "q0''/2", "q1/0", "q1'/1", "q1''/2"]
        );
    }

    #[test]
    fn unreachable_destinations_are_kept() {
        // state 2 can not be reached from state 0, but still targets state 1
        let mealy = MealyTable::new(vec![vec![(0, 0)], vec![(1, 0)], vec![(1, 5)]]).unwrap();
        let moore = mealy.to_moore();
        assert_eq!(names(&moore), ["q0/0", "q1/0", "q1'/5"]);
        // states that are never targeted do not show up at all
        assert!(moore.labels().unwrap().iter().all(|l| l.origin() != 2));
    }

    #[test]
    fn empty_tables_produce_empty_moore_tables() {
        let moore = MealyTable::new(vec![]).unwrap().to_moore();
        assert!(moore.is_empty());

        let no_inputs = MealyTable::new(vec![vec![], vec![]]).unwrap().to_moore();
        assert!(no_inputs.is_empty());
        assert_eq!(no_inputs.inputs(), 0);
    }

    #[test]
    fn splitting_is_deterministic() {
        let mealy = reference_mealy();
        let first = mealy.to_moore();
        let second = mealy.to_moore();
        assert_eq!(first, second);
        assert_eq!(names(&first), names(&second));
    }
}
