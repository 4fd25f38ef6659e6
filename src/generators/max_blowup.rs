use crate::automaton::{Input, Nfa};

/// Generates the maximal-blowup family: `n` NFA states whose determinization
/// reaches every one of the `2^n - 1` non-empty subsets, plus the dead state.
///
/// Symbol 0 shifts all states around a cycle, symbol 1 both keeps a state and
/// resets it to 0, which together make every subset reachable. State 0 has no
/// transition on symbol 1, so the dead state always appears and the DFA ends
/// up with exactly `2^n` states.
pub struct MaxBlowupGenerator {
    n: u32,
}

impl MaxBlowupGenerator {
    /// Create a generator for the family member with `n >= 1` states.
    pub fn new(n: u32) -> Self {
        assert!(n >= 1);

        Self { n }
    }

    /// Generate the NFA.
    pub fn generate(&self) -> Nfa {
        let n = self.n;
        let mut builder = Nfa::builder()
            .states(0..n)
            .symbols([0, 1])
            .initial(0)
            .accepting([0]);

        for i in 0..n - 1 {
            builder = builder.transition(i, Input::Symbol(0), i + 1);
        }

        builder = builder.transition(n - 1, Input::Symbol(0), 0);

        for i in 1..n {
            builder = builder
                .transition(i, Input::Symbol(1), i)
                .transition(i, Input::Symbol(1), 0);
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
        let nfa = MaxBlowupGenerator::new(5).generate();

        assert_eq!(nfa.state_count(), 5);
        assert_eq!(nfa.initial(), Some(0));
        assert!(nfa.is_accepting(0));
    }

    #[test]
    fn test_reaches_theoretical_maximum() {
        for n in 1..=8 {
            let nfa = MaxBlowupGenerator::new(n).generate();
            let dfa = Dfa::from_nfa(&nfa);

            assert_eq!(dfa.state_count(), 1 << n);
            assert_eq!(dfa.state_count() as f64, nfa.subset_bound());
        }
    }

    #[test]
    fn test_dead_state_present() {
        let nfa = MaxBlowupGenerator::new(4).generate();
        let dfa = Dfa::from_nfa(&nfa);

        assert!(dfa.states().contains(&DfaState::Dead));
        assert!(!dfa.is_accepting(&DfaState::Dead));
    }
}
