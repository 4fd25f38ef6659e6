use std::collections::{BTreeSet, HashMap};
use std::fmt::{Display, Formatter, Result as FmtResult};

use ahash::RandomState;
use itertools::Itertools;

use crate::automaton::{subset, Nfa, StateId, SymbolId};

/// A state of the constructed DFA.
///
/// The dead state is a distinct variant so that it can never collide with a
/// genuine subset label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DfaState {
    /// A canonical subset of NFA states: non-empty, duplicate-free and
    /// strictly ascending. Two subset states are equal iff their sequences
    /// are equal.
    Subset(Vec<StateId>),
    /// The sink state added during totalization. Self-loops on every symbol
    /// and is never accepting.
    Dead,
}

impl Display for DfaState {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            DfaState::Subset(members) => write!(f, "({})", members.iter().join(",")),
            DfaState::Dead => write!(f, "null"),
        }
    }
}

pub(crate) type DfaTransitionMap = HashMap<(DfaState, SymbolId), DfaState, RandomState>;

/// A deterministic finite automaton produced by subset construction.
///
/// Whenever the state set is non-empty, the transition function is total: every
/// `(state, symbol)` pair maps to exactly one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    pub(crate) states: BTreeSet<DfaState>,
    pub(crate) alphabet: BTreeSet<SymbolId>,
    pub(crate) transitions: DfaTransitionMap,
    pub(crate) initial: Option<DfaState>,
    pub(crate) accepting: BTreeSet<DfaState>,
}

impl Dfa {
    /// Run the subset construction on `nfa` and return the equivalent DFA.
    ///
    /// The NFA with no states yields the DFA with no states, no initial state
    /// and an empty transition function. The worst case is exponential: up to
    /// `2^n` subset states are reachable from an NFA with `n` states, and the
    /// adversarial families in [`generators`](crate::generators) do reach it.
    pub fn from_nfa(nfa: &Nfa) -> Self {
        subset::construct(nfa)
    }

    /// The set of discovered states, including the dead state if one was
    /// needed.
    pub fn states(&self) -> &BTreeSet<DfaState> {
        &self.states
    }

    /// The alphabet, copied from the source NFA.
    pub fn alphabet(&self) -> &BTreeSet<SymbolId> {
        &self.alphabet
    }

    /// The initial state, absent only for the empty DFA.
    pub fn initial(&self) -> Option<&DfaState> {
        self.initial.as_ref()
    }

    /// The accepting states. Never contains [`DfaState::Dead`].
    pub fn accepting(&self) -> &BTreeSet<DfaState> {
        &self.accepting
    }

    /// Whether `state` is accepting.
    pub fn is_accepting(&self, state: &DfaState) -> bool {
        self.accepting.contains(state)
    }

    /// The successor of `state` on `symbol`. `None` only if `state` is not a
    /// state of this DFA.
    pub fn target(&self, state: &DfaState, symbol: SymbolId) -> Option<&DfaState> {
        self.transitions.get(&(state.clone(), symbol))
    }

    /// Number of DFA states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of entries in the transition function. Equals
    /// `state_count() * alphabet.len()` whenever the DFA has states.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match &self.initial {
            Some(initial) => writeln!(f, "Initial: {}", initial)?,
            None => writeln!(f, "Initial: -")?,
        }

        writeln!(f, "Accepting: {}", self.accepting.iter().join(" "))?;
        writeln!(f, "Transitions:")?;

        for ((state, symbol), target) in self.transitions.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
            writeln!(f, "  {} --{}--> {}", state, symbol, target)?;
        }

        Ok(())
    }
}
