use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt::{Display, Formatter, Result as FmtResult};

use ahash::RandomState;
use itertools::Itertools;

use crate::automaton::NfaBuilder;

/// Identifier of a single NFA state.
pub type StateId = u32;

/// A member of the input alphabet. Epsilon is not a symbol, see [`Input`].
pub type SymbolId = u32;

/// What an NFA transition consumes: either one alphabet symbol or nothing.
///
/// Keeping epsilon out of [`SymbolId`] makes it impossible for the epsilon
/// marker to end up in the alphabet that the DFA inherits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Input {
    /// A regular alphabet symbol.
    Symbol(SymbolId),
    /// The no-input marker.
    Epsilon,
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Input::Symbol(symbol) => write!(f, "{}", symbol),
            Input::Epsilon => write!(f, "epsilon"),
        }
    }
}

pub(crate) type TransitionMap = HashMap<(StateId, Input), BTreeSet<StateId>, RandomState>;

/// A nondeterministic finite automaton with epsilon transitions.
///
/// An `Nfa` is immutable once built. Use [`Nfa::builder`] to assemble one from
/// a text file or programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<SymbolId>,
    transitions: TransitionMap,
    initial: Option<StateId>,
    accepting: BTreeSet<StateId>,
}

impl Nfa {
    pub(crate) fn new(
        states: BTreeSet<StateId>,
        alphabet: BTreeSet<SymbolId>,
        transitions: TransitionMap,
        initial: Option<StateId>,
        accepting: BTreeSet<StateId>,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            initial,
            accepting,
        }
    }

    /// Create an [`NfaBuilder`] to assemble an NFA.
    pub fn builder() -> NfaBuilder {
        NfaBuilder::new()
    }

    /// The set of declared states.
    pub fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    /// The input alphabet. Never contains an epsilon marker.
    pub fn alphabet(&self) -> &BTreeSet<SymbolId> {
        &self.alphabet
    }

    /// The initial state, absent only for the automaton with no states.
    pub fn initial(&self) -> Option<StateId> {
        self.initial
    }

    /// The set of accepting states.
    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Whether `state` is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// The targets of the transition `(state, input)`.
    ///
    /// An absent entry means the transition goes nowhere: `None` and an empty
    /// set are equivalent for the automaton's semantics, the distinction is
    /// kept visible here instead of being papered over by a defaulting map.
    pub fn targets(&self, state: StateId, input: Input) -> Option<&BTreeSet<StateId>> {
        self.transitions.get(&(state, input))
    }

    /// All states reachable from `state` through epsilon transitions alone,
    /// including `state` itself.
    ///
    /// Breadth-first over the epsilon subgraph with a visited set, so epsilon
    /// cycles terminate.
    pub fn epsilon_closure(&self, state: StateId) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        let mut worklist = VecDeque::new();

        closure.insert(state);
        worklist.push_back(state);

        while let Some(current) = worklist.pop_front() {
            if let Some(targets) = self.targets(current, Input::Epsilon) {
                for &target in targets {
                    if closure.insert(target) {
                        worklist.push_back(target);
                    }
                }
            }
        }

        closure
    }

    /// Number of declared states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of individual transition edges, counting every target of every
    /// `(state, input)` entry.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(|targets| targets.len()).sum()
    }

    /// Number of transition edges consumed without input.
    pub fn epsilon_transition_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|((_, input), _)| *input == Input::Epsilon)
            .map(|(_, targets)| targets.len())
            .sum()
    }

    /// Fraction of transition edges that are epsilon edges, in `[0, 1]`.
    pub fn epsilon_density(&self) -> f64 {
        let total = self.transition_count();

        if total == 0 {
            0.0
        } else {
            self.epsilon_transition_count() as f64 / total as f64
        }
    }

    /// The theoretical upper bound `2^n` on the number of subset states the
    /// equivalent DFA can have, as a float since it overflows quickly.
    pub fn subset_bound(&self) -> f64 {
        (self.states.len() as f64).exp2()
    }

    /// Render this automaton in the text format understood by
    /// [`NfaBuilder::text_automaton`](crate::automaton::NfaBuilder::text_automaton).
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("states: {}", self.states.iter().join(",")));
        lines.push(format!("alphabet: {}", self.alphabet.iter().join(",")));

        if let Some(initial) = self.initial {
            lines.push(format!("initial: {}", initial));
        }

        if !self.accepting.is_empty() {
            lines.push(format!("accepting: {}", self.accepting.iter().join(",")));
        }

        for ((state, input), targets) in self.transitions.iter().sorted_by_key(|(key, _)| *key) {
            if targets.is_empty() {
                continue;
            }

            lines.push(format!(
                "transition: {},{} -> {}",
                state,
                input,
                targets.iter().join(",")
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epsilon_chain() -> Nfa {
        Nfa::builder()
            .states([1, 2, 3, 4])
            .symbols([0])
            .initial(1)
            .accepting([4])
            .transition(1, Input::Epsilon, 2)
            .transition(2, Input::Epsilon, 3)
            .transition(3, Input::Symbol(0), 4)
            .build()
            .unwrap()
    }

    #[test]
    fn test_closure_follows_chain() {
        let nfa = epsilon_chain();
        let closure = nfa.epsilon_closure(1);
        assert_eq!(closure, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn test_closure_contains_self() {
        let nfa = epsilon_chain();
        assert_eq!(nfa.epsilon_closure(4), BTreeSet::from([4]));
    }

    #[test]
    fn test_closure_terminates_on_cycle() {
        let nfa = Nfa::builder()
            .states([1, 2])
            .symbols([0])
            .initial(1)
            .transition(1, Input::Epsilon, 2)
            .transition(2, Input::Epsilon, 1)
            .build()
            .unwrap();
        assert_eq!(nfa.epsilon_closure(1), BTreeSet::from([1, 2]));
        assert_eq!(nfa.epsilon_closure(2), BTreeSet::from([1, 2]));
    }

    #[test]
    fn test_density() {
        let nfa = epsilon_chain();
        assert_eq!(nfa.transition_count(), 3);
        assert_eq!(nfa.epsilon_transition_count(), 2);
        assert!((nfa.epsilon_density() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_of_empty() {
        let nfa = Nfa::builder().build().unwrap();
        assert_eq!(nfa.epsilon_density(), 0.0);
        assert_eq!(nfa.subset_bound(), 1.0);
    }

    #[test]
    fn test_text_round_trip() {
        let nfa = Nfa::builder()
            .states([1, 2, 3])
            .symbols([0, 1])
            .initial(1)
            .accepting([3])
            .transition(1, Input::Symbol(0), 2)
            .transition(1, Input::Symbol(0), 3)
            .transition(2, Input::Epsilon, 3)
            .build()
            .unwrap();

        let path = std::env::temp_dir().join("powerset-roundtrip.txt");
        std::fs::write(&path, nfa.to_text()).unwrap();

        let reparsed = Nfa::builder()
            .text_automaton(&path)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(nfa, reparsed);
    }

    #[test]
    fn test_missing_transition_is_none() {
        let nfa = epsilon_chain();
        assert!(nfa.targets(4, Input::Symbol(0)).is_none());
        assert!(nfa.targets(3, Input::Symbol(0)).is_some());
    }
}
