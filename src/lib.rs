//! This library contains everything you need to turn a nondeterministic finite
//! automaton (NFA) with epsilon transitions into an equivalent deterministic
//! finite automaton (DFA).
//!
//! It consists of
//! - __frontend__: Load automata from disk in a simple line-oriented text format
//!   or build them programmatically.
//! - __engine__: The subset construction that discovers every reachable
//!   composite state and totalizes the transition function with a dead state.
//! - __generators__: Families of NFAs (random, nth-from-last, maximal blowup)
//!   used to study how DFA size grows with NFA size.
//!
//! ## Getting Started
//! The first step always is to obtain an [`Nfa`](automaton::Nfa). To do this use
//! the [`Nfa::builder()`](automaton::Nfa::builder) method that will give you
//! access to an [`NfaBuilder`](automaton::NfaBuilder) like this:
//! ```no_run
//! use powerset::automaton::Nfa;
//!
//! let nfa = Nfa::builder()
//!     // Load an automaton from a text file
//!     .text_automaton("my-automaton.txt").unwrap()
//!     .build().unwrap();
//! ```
//! Then, run the subset construction and inspect the result:
//! ```no_run
//! # use powerset::automaton::Nfa;
//! use powerset::automaton::Dfa;
//!
//! # let nfa = Nfa::builder().text_automaton("my-automaton.txt").unwrap().build().unwrap();
//! let dfa = Dfa::from_nfa(&nfa);
//! println!("{} NFA states -> {} DFA states", nfa.state_count(), dfa.state_count());
//! ```
//! And that's it.

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod automaton;
pub mod error;
pub mod generators;
pub mod stats;
