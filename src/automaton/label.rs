use std::fmt::{Display, Formatter};

use super::{Output, State};

/// Identifies a state created by state-splitting: the Mealy state a transition leads to,
/// together with the output emitted on that transition. Two transitions with the same
/// key end up in the same Moore state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MooreKey {
    /// Destination of the Mealy transition.
    pub destination: State,
    /// Output emitted on the Mealy transition.
    pub output: Output,
}

impl MooreKey {
    /// Creates a new key for the given destination and output.
    pub fn new(destination: State, output: Output) -> Self {
        Self {
            destination,
            output,
        }
    }
}

/// The label of a Moore state that was obtained by splitting a Mealy state.
///
/// `origin` is the index of the Mealy state the Moore state was split off from, `output`
/// is the output the Moore state emits. As the same origin can be split into several
/// Moore states (one per output), `disambiguator` counts how many copies of `origin` were
/// created before this one. It is `0` for the first copy.
///
/// Labels are displayed as `q<origin>` followed by one prime per disambiguation step and
/// the output, so the third copy of state `1` emitting `0` reads `q1''/0`.
///
/// ```
/// use mealy_moore::prelude::*;
///
/// assert_eq!(MooreStateLabel::new(1, 0, 0).to_string(), "q1/0");
/// assert_eq!(MooreStateLabel::new(1, 0, 2).to_string(), "q1''/0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MooreStateLabel {
    origin: State,
    output: Output,
    disambiguator: usize,
}

impl MooreStateLabel {
    /// Creates a new label.
    pub fn new(origin: State, output: Output, disambiguator: usize) -> Self {
        Self {
            origin,
            output,
            disambiguator,
        }
    }

    /// The Mealy state this Moore state was split off from.
    pub fn origin(&self) -> State {
        self.origin
    }

    /// The output of the labeled Moore state.
    pub fn output(&self) -> Output {
        self.output
    }

    /// Number of copies of [`Self::origin`] that were created before this one.
    pub fn disambiguator(&self) -> usize {
        self.disambiguator
    }

    /// The key under which the labeled state is looked up.
    pub fn key(&self) -> MooreKey {
        MooreKey::new(self.origin, self.output)
    }
}

impl Display for MooreStateLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "q{}", self.origin)?;
        for _ in 0..self.disambiguator {
            write!(f, "'")?;
        }
        write!(f, "/{}", self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display() {
        assert_eq!(MooreStateLabel::new(0, 1, 0).to_string(), "q0/1");
        assert_eq!(MooreStateLabel::new(3, -2, 1).to_string(), "q3'/-2");
        assert_eq!(MooreStateLabel::new(12, 0, 3).to_string(), "q12'''/0");
    }

    #[test]
    fn key_ignores_disambiguator() {
        let first = MooreStateLabel::new(1, 1, 0);
        let second = MooreStateLabel::new(1, 1, 4);
        assert_ne!(first, second);
        assert_eq!(first.key(), second.key());
        assert_eq!(first.key(), MooreKey::new(1, 1));
    }
}
