//! Generators for families of NFAs used to study DFA-size growth.
//!
//! Use them like so:
//! ```
//! use powerset::automaton::Dfa;
//! use powerset::generators::{MaxBlowupGenerator, NthFromLastGenerator, RandomNfaGenerator};
//!
//! // A random NFA with 8 states, reproducible through the seed:
//! let mut generator = RandomNfaGenerator::new(8);
//! generator.seed(1234);
//! let nfa = generator.generate();
//! assert_eq!(nfa.state_count(), 8);
//!
//! // An adversarial family that forces 2^(n+1) DFA states:
//! let nfa = NthFromLastGenerator::new(4).generate();
//! assert_eq!(Dfa::from_nfa(&nfa).state_count(), 32);
//! ```

mod max_blowup;
mod nth_from_last;
mod random;

pub use max_blowup::*;
pub use nth_from_last::*;
pub use random::*;
