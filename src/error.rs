//! Error types of this crate.

use std::path::PathBuf;
use thiserror::Error;

/// An automaton file could not be parsed.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// The assembled automaton violates a structural invariant.
#[derive(Debug, Error)]
pub enum AutomatonError {
    /// A state is referenced in a transition, as the initial state or as an
    /// accepting state, but never declared in the state set.
    #[error("The state '{0}' is referenced but never declared")]
    UndeclaredState(u32),

    /// A transition reads a symbol that is not part of the alphabet.
    #[error("The symbol '{0}' is used in a transition but is not in the alphabet")]
    UndeclaredSymbol(u32),

    /// The automaton has states but no initial state.
    #[error("The automaton declares states but no initial state")]
    MissingInitial,
}
