//! Size and timing measurements harvested from one NFA-to-DFA conversion.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::automaton::{Dfa, Nfa};

/// One measurement row for the benchmarking tooling. All size figures are pure
/// functions of the already-built automata, nothing is re-traversed.
#[derive(Debug, Clone, Serialize)]
pub struct ConstructionRecord {
    /// Number of NFA states.
    pub nfa_states: usize,
    /// Number of NFA transition edges, epsilon edges included.
    pub nfa_transitions: usize,
    /// Fraction of NFA transition edges that are epsilon edges.
    pub epsilon_density: f64,
    /// Number of DFA states, dead state included.
    pub dfa_states: usize,
    /// Number of entries in the total DFA transition function.
    pub dfa_transitions: usize,
    /// The theoretical worst case `2^nfa_states`.
    pub subset_bound: f64,
    /// Wall-clock time of the subset construction in seconds.
    pub construction_time_sec: f64,
}

impl ConstructionRecord {
    /// Assemble a record from an already-performed conversion.
    pub fn new(nfa: &Nfa, dfa: &Dfa, elapsed: Duration) -> Self {
        Self {
            nfa_states: nfa.state_count(),
            nfa_transitions: nfa.transition_count(),
            epsilon_density: nfa.epsilon_density(),
            dfa_states: dfa.state_count(),
            dfa_transitions: dfa.transition_count(),
            subset_bound: nfa.subset_bound(),
            construction_time_sec: elapsed.as_secs_f64(),
        }
    }

    /// Run the subset construction on `nfa`, timing it, and return the DFA
    /// together with its record.
    pub fn measure(nfa: &Nfa) -> (Dfa, Self) {
        let start = Instant::now();
        let dfa = Dfa::from_nfa(nfa);
        let elapsed = start.elapsed();
        let record = Self::new(nfa, &dfa, elapsed);

        (dfa, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_record() {
        let nfa = Nfa::builder()
            .text_automaton("test-data/automata/sample.txt")
            .unwrap()
            .build()
            .unwrap();
        let (dfa, record) = ConstructionRecord::measure(&nfa);

        assert_eq!(record.nfa_states, 4);
        assert_eq!(record.nfa_transitions, 7);
        assert_eq!(record.dfa_states, 5);
        assert_eq!(record.dfa_transitions, 10);
        assert_eq!(record.subset_bound, 16.0);
        assert_eq!(record.dfa_states, dfa.state_count());
    }

    #[test]
    fn test_serializes() {
        let nfa = Nfa::builder().build().unwrap();
        let (_, record) = ConstructionRecord::measure(&nfa);
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"dfa_states\":0"));
    }
}
