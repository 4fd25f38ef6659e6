//! The automaton model and the subset-construction engine.
//!
//! Use it like so:
//! ```
//! use powerset::automaton::{Dfa, DfaState, Input, Nfa};
//!
//! // Build an NFA programmatically (or load one with `text_automaton`):
//! let nfa = Nfa::builder()
//!     .states([1, 2])
//!     .symbols([0])
//!     .initial(1)
//!     .accepting([2])
//!     .transition(1, Input::Symbol(0), 2)
//!     .build().unwrap();
//!
//! // Convert it into an equivalent DFA:
//! let dfa = Dfa::from_nfa(&nfa);
//!
//! // A DFA state is either a canonical subset of NFA states or the dead state.
//! for state in dfa.states() {
//!     match state {
//!         DfaState::Subset(members) => println!("subset: {:?}", members),
//!         DfaState::Dead => println!("dead state"),
//!     }
//! }
//! ```

mod builder;
mod dfa;
mod nfa;
mod subset;

pub use builder::*;
pub use dfa::*;
pub use nfa::*;
