use std::collections::BTreeSet;
use std::path::Path;

use crate::{
    automaton::{Input, Nfa, StateId, SymbolId, TransitionMap},
    error::{AutomatonError, ParsingError},
    parser::text,
};

/// The NfaBuilder assembles an [`Nfa`] from text files or from explicit parts
/// and validates it.
///
/// Use it like so:
/// ```no_run
/// use powerset::automaton::Nfa;
///
/// let nfa = Nfa::builder()
///     // Load an automaton in the text format
///     .text_automaton("my-automaton.txt").unwrap()
///     .build().unwrap();
/// ```
pub struct NfaBuilder {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<SymbolId>,
    transitions: TransitionMap,
    initial: Option<StateId>,
    accepting: BTreeSet<StateId>,
}

impl NfaBuilder {
    pub(crate) fn new() -> Self {
        Self {
            states: BTreeSet::new(),
            alphabet: BTreeSet::new(),
            transitions: TransitionMap::default(),
            initial: None,
            accepting: BTreeSet::new(),
        }
    }

    fn check_states(&self) -> Option<StateId> {
        for ((state, _), targets) in &self.transitions {
            if !self.states.contains(state) {
                return Some(*state);
            }

            for target in targets {
                if !self.states.contains(target) {
                    return Some(*target);
                }
            }
        }

        for state in &self.accepting {
            if !self.states.contains(state) {
                return Some(*state);
            }
        }

        if let Some(initial) = self.initial {
            if !self.states.contains(&initial) {
                return Some(initial);
            }
        }

        None
    }

    fn check_symbols(&self) -> Option<SymbolId> {
        for (_, input) in self.transitions.keys() {
            if let Input::Symbol(symbol) = input {
                if !self.alphabet.contains(symbol) {
                    return Some(*symbol);
                }
            }
        }

        None
    }
}

impl NfaBuilder {
    /// Load an automaton from disk in the text format. The format is line
    /// oriented with `states:`, `alphabet:`, `initial:`, `accepting:` and
    /// `transition:` lines; repeated `transition:` lines for the same
    /// state/symbol pair accumulate their targets.
    pub fn text_automaton<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ParsingError> {
        let parts = text::parse_file(path.as_ref())?;

        self.states.extend(parts.states);
        self.alphabet.extend(parts.alphabet);
        self.accepting.extend(parts.accepting);

        if parts.initial.is_some() {
            self.initial = parts.initial;
        }

        for ((state, input), targets) in parts.transitions {
            self.transitions.entry((state, input)).or_default().extend(targets);
        }

        Ok(self)
    }

    /// Declare states.
    pub fn states<I: IntoIterator<Item = StateId>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare alphabet symbols.
    pub fn symbols<I: IntoIterator<Item = SymbolId>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state.
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare accepting states.
    pub fn accepting<I: IntoIterator<Item = StateId>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Add one transition edge from `from` to `to` on `input`.
    pub fn transition(mut self, from: StateId, input: Input, to: StateId) -> Self {
        self.transitions.entry((from, input)).or_default().insert(to);
        self
    }

    /// Validate the parts and create an [`Nfa`].
    pub fn build(self) -> Result<Nfa, AutomatonError> {
        if let Some(state) = self.check_states() {
            return Err(AutomatonError::UndeclaredState(state));
        }

        if let Some(symbol) = self.check_symbols() {
            return Err(AutomatonError::UndeclaredSymbol(symbol));
        }

        if self.initial.is_none() && !self.states.is_empty() {
            return Err(AutomatonError::MissingInitial);
        }

        Ok(Nfa::new(
            self.states,
            self.alphabet,
            self.transitions,
            self.initial,
            self.accepting,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn test_undeclared_target() {
        Nfa::builder()
            .text_automaton("test-data/automata/undeclared-state.txt").unwrap()
            .build()
            .unwrap();
    }

    #[test]
    fn test_sample_automaton() {
        let nfa = Nfa::builder()
            .text_automaton("test-data/automata/sample.txt").unwrap()
            .build()
            .unwrap();

        assert_eq!(nfa.state_count(), 4);
        assert_eq!(nfa.alphabet(), &BTreeSet::from([0, 1]));
        assert_eq!(nfa.initial(), Some(1));
        assert_eq!(nfa.accepting(), &BTreeSet::from([3, 4]));
        assert_eq!(
            nfa.targets(2, Input::Symbol(1)),
            Some(&BTreeSet::from([2, 4]))
        );
    }

    #[test]
    fn test_missing_initial() {
        let result = Nfa::builder().states([1]).symbols([0]).build();
        assert!(matches!(result, Err(AutomatonError::MissingInitial)));
    }

    #[test]
    fn test_undeclared_accepting() {
        let result = Nfa::builder()
            .states([1])
            .symbols([0])
            .initial(1)
            .accepting([7])
            .build();
        assert!(matches!(result, Err(AutomatonError::UndeclaredState(7))));
    }

    #[test]
    fn test_undeclared_symbol() {
        let result = Nfa::builder()
            .states([1, 2])
            .symbols([0])
            .initial(1)
            .transition(1, Input::Symbol(5), 2)
            .build();
        assert!(matches!(result, Err(AutomatonError::UndeclaredSymbol(5))));
    }

    #[test]
    fn test_empty_automaton() {
        let nfa = Nfa::builder().build().unwrap();
        assert_eq!(nfa.state_count(), 0);
        assert_eq!(nfa.initial(), None);
    }
}
