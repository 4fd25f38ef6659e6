use std::cmp;

use crate::automaton::{Input, Nfa, StateId, SymbolId};

const ALPHABET: [SymbolId; 2] = [0, 1];

/// Generates random NFAs whose DFA blowup grows with the state count.
///
/// Three structural ingredients make the generated automata interesting:
/// a spanning tree from the initial state so every state is reachable, extra
/// nondeterministic transitions whose number scales with the state count, and
/// a handful of cycles. The share of epsilon edges is tunable.
pub struct RandomNfaGenerator {
    states: usize,
    epsilon_density: f64,
    seed: usize,
}

impl RandomNfaGenerator {
    /// Create a generator for NFAs with `states` states. `states` must be at
    /// least 1.
    pub fn new(states: usize) -> Self {
        assert!(states > 0);

        Self {
            states,
            epsilon_density: 0.3,
            seed: 0xDEADBEEF,
        }
    }

    /// Seed the RNG of the generator.
    pub fn seed(&mut self, seed: usize) {
        if seed == 0 {
            self.seed = 0xDEADBEEF;
        } else {
            self.seed = seed;
        }
    }

    /// Set the fraction of generated edges that are epsilon edges.
    pub fn epsilon_density(&mut self, density: f64) {
        self.epsilon_density = density.clamp(0.0, 1.0);
    }

    fn rand(&mut self) -> usize {
        let mut x = self.seed;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.seed = x;
        x
    }

    fn rand_below(&mut self, bound: usize) -> usize {
        self.rand() % bound
    }

    fn coin(&mut self) -> bool {
        let roll = self.rand_below(1_000_000) as f64 / 1_000_000.0;
        roll < self.epsilon_density
    }

    fn random_input(&mut self) -> Input {
        if self.coin() {
            Input::Epsilon
        } else {
            Input::Symbol(ALPHABET[self.rand_below(ALPHABET.len())])
        }
    }

    /// Pick up to `k` distinct elements from `pool`.
    fn sample(&mut self, pool: &[StateId], k: usize) -> Vec<StateId> {
        let mut pool = pool.to_vec();
        let mut picked = Vec::new();

        for _ in 0..cmp::min(k, pool.len()) {
            let idx = self.rand_below(pool.len());
            picked.push(pool.swap_remove(idx));
        }

        picked
    }

    /// Generate the next NFA. Repeated calls advance the RNG and produce
    /// different automata.
    pub fn generate(&mut self) -> Nfa {
        let n = self.states;
        let states = (1..=n as StateId).collect::<Vec<StateId>>();
        let accepting = self.sample(&states, cmp::max(1, n / 3));

        let mut builder = Nfa::builder()
            .states(states.iter().copied())
            .symbols(ALPHABET)
            .initial(1)
            .accepting(accepting);

        // Spanning tree from the initial state, so the whole automaton is
        // reachable.
        let mut reachable = vec![1 as StateId];
        let mut unreached = states[1..].to_vec();

        while !unreached.is_empty() {
            let from = reachable[self.rand_below(reachable.len())];
            let idx = self.rand_below(unreached.len());
            let to = unreached.swap_remove(idx);
            let input = self.random_input();

            builder = builder.transition(from, input, to);
            reachable.push(to);
        }

        // Extra nondeterministic edges, scaling with the state count.
        let extra = n + n / 2 + self.rand_below(n - n / 2 + 1);

        for _ in 0..extra {
            let from = states[self.rand_below(n)];
            let fanout = 1 + self.rand_below(cmp::min(3, cmp::max(1, n / 5)));
            let input = self.random_input();

            for to in self.sample(&states, fanout) {
                builder = builder.transition(from, input, to);
            }
        }

        // Cycles drive the DFA state count up the most.
        if n >= 2 {
            let cycles = 1 + self.rand_below(cmp::max(1, n / 3));

            for _ in 0..cycles {
                let len = 2 + self.rand_below(cmp::min(5, n) - 1);
                let cycle = self.sample(&states, len);

                for i in 0..cycle.len() {
                    let from = cycle[i];
                    let to = cycle[(i + 1) % cycle.len()];
                    let input = self.random_input();

                    builder = builder.transition(from, input, to);
                }
            }
        }

        // All ids were drawn from the declared state set, validation cannot
        // fail.
        builder.build().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Dfa;

    #[test]
    fn test_reproducible() {
        let mut a = RandomNfaGenerator::new(10);
        let mut b = RandomNfaGenerator::new(10);
        a.seed(42);
        b.seed(42);

        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_shape() {
        let mut generator = RandomNfaGenerator::new(12);
        generator.seed(7);
        let nfa = generator.generate();

        assert_eq!(nfa.state_count(), 12);
        assert_eq!(nfa.initial(), Some(1));
        assert!(!nfa.accepting().is_empty());
        assert!(nfa.transition_count() >= 12);
    }

    #[test]
    fn test_constructs_total_dfa() {
        let mut generator = RandomNfaGenerator::new(8);
        generator.seed(99);

        for _ in 0..4 {
            let nfa = generator.generate();
            let dfa = Dfa::from_nfa(&nfa);

            assert!(dfa.state_count() >= 1);
            assert_eq!(
                dfa.transition_count(),
                dfa.state_count() * dfa.alphabet().len()
            );
        }
    }

    #[test]
    fn test_single_state() {
        let mut generator = RandomNfaGenerator::new(1);
        let nfa = generator.generate();

        assert_eq!(nfa.state_count(), 1);
        assert_eq!(nfa.accepting().len(), 1);
    }
}
