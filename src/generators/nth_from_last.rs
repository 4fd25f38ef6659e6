use crate::automaton::{Input, Nfa};

/// Generates the classic "some symbol from the end is a 1" family.
///
/// The automaton guesses nondeterministically that the current `1` is followed
/// by exactly `n` more symbols. Any DFA for this language has to remember the
/// last `n + 1` symbols, so subset construction produces exactly `2^(n + 1)`
/// states.
pub struct NthFromLastGenerator {
    n: u32,
}

impl NthFromLastGenerator {
    /// Create a generator for the family member with parameter `n >= 1`.
    pub fn new(n: u32) -> Self {
        assert!(n >= 1);

        Self { n }
    }

    /// Generate the NFA: states `0..=n+1`, a self-loop on state 0 consuming
    /// anything, a guessed jump `0 -> 1` on symbol 1, and a counting chain
    /// from 1 to the accepting state `n + 1`.
    pub fn generate(&self) -> Nfa {
        let n = self.n;
        let mut builder = Nfa::builder()
            .states(0..=n + 1)
            .symbols([0, 1])
            .initial(0)
            .accepting([n + 1])
            .transition(0, Input::Symbol(0), 0)
            .transition(0, Input::Symbol(1), 0)
            .transition(0, Input::Symbol(1), 1);

        for i in 1..=n {
            builder = builder
                .transition(i, Input::Symbol(0), i + 1)
                .transition(i, Input::Symbol(1), i + 1);
        }

        builder.build().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Dfa, DfaState};

    #[test]
    fn test_shape() {
        let nfa = NthFromLastGenerator::new(3).generate();

        assert_eq!(nfa.state_count(), 5);
        assert_eq!(nfa.initial(), Some(0));
        assert_eq!(nfa.accepting().iter().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_exponential_blowup() {
        for n in 2..=4 {
            let nfa = NthFromLastGenerator::new(n).generate();
            let dfa = Dfa::from_nfa(&nfa);

            assert_eq!(dfa.state_count(), 1 << (n + 1));
        }
    }

    #[test]
    fn test_no_dead_state() {
        // Every reachable subset contains the self-looping state 0, so no
        // transition is ever missing.
        let nfa = NthFromLastGenerator::new(3).generate();
        let dfa = Dfa::from_nfa(&nfa);

        assert!(!dfa.states().contains(&DfaState::Dead));
        assert_eq!(
            dfa.transition_count(),
            dfa.state_count() * dfa.alphabet().len()
        );
    }
}
