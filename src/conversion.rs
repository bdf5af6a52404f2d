//! Conversions between [`MealyTable`](crate::automaton::MealyTable)s and [`MooreTable`](crate::automaton::MooreTable)s.
//!
//! A Mealy table is turned into a Moore table by state-splitting, see [`split_states`]. Every
//! distinct pair of destination and output that occurs on some transition becomes a Moore
//! state emitting that output. A Moore table is turned into a Mealy table by output-folding,
//! see [`fold_outputs`], which moves the output of each state onto its incoming transitions.
//!
//! Both conversions are pure, they run in time `O(n * m)` and never fail on well-formed
//! tables.

mod split;
pub use split::split_states;

mod fold;
pub use fold::fold_outputs;
