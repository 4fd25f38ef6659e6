//! The subset construction.
//!
//! Discovery runs over an explicit worklist instead of recursing, so the depth
//! of the reachable-subset space never touches the call stack. Every subset of
//! NFA states is canonicalized into a strictly ascending sequence before it is
//! used as an identity, which makes set equality and map lookups structural.

use std::collections::{BTreeSet, HashSet, VecDeque};

use ahash::RandomState;

use crate::automaton::{Dfa, DfaState, DfaTransitionMap, Input, Nfa, StateId};

/// Canonical form of a set of NFA states: ascending and duplicate-free. The
/// resulting sequence is the identity of a [`DfaState::Subset`].
fn canonicalize(states: BTreeSet<StateId>) -> Vec<StateId> {
    states.into_iter().collect()
}

pub(crate) fn construct(nfa: &Nfa) -> Dfa {
    let mut dfa = Dfa {
        states: BTreeSet::new(),
        alphabet: nfa.alphabet().clone(),
        transitions: DfaTransitionMap::default(),
        initial: None,
        accepting: BTreeSet::new(),
    };

    let Some(initial) = nfa.initial() else {
        // The automaton without states converts to the DFA without states.
        return dfa;
    };

    let initial = canonicalize(nfa.epsilon_closure(initial));
    dfa.initial = Some(DfaState::Subset(initial.clone()));

    let mut discovered = HashSet::<Vec<StateId>, RandomState>::default();
    let mut worklist = VecDeque::new();

    discovered.insert(initial.clone());
    worklist.push_back(initial);

    // Each subset enters the worklist exactly once, and at most 2^n distinct
    // subsets exist, so discovery terminates.
    while let Some(subset) = worklist.pop_front() {
        let state = DfaState::Subset(subset.clone());

        if subset.iter().any(|&member| nfa.is_accepting(member)) {
            dfa.accepting.insert(state.clone());
        }

        dfa.states.insert(state.clone());

        for &symbol in nfa.alphabet() {
            let mut successor = BTreeSet::new();

            for &member in &subset {
                if let Some(targets) = nfa.targets(member, Input::Symbol(symbol)) {
                    for &target in targets {
                        successor.extend(nfa.epsilon_closure(target));
                    }
                }
            }

            // No member escapes on this symbol; totalization will route the
            // pair to the dead state.
            if successor.is_empty() {
                continue;
            }

            let successor = canonicalize(successor);

            dfa.transitions
                .insert((state.clone(), symbol), DfaState::Subset(successor.clone()));

            if discovered.insert(successor.clone()) {
                worklist.push_back(successor);
            }
        }
    }

    totalize(&mut dfa);

    dfa
}

/// Complete the transition function. The dead state is created only when some
/// `(state, symbol)` pair has no NFA-derived successor.
fn totalize(dfa: &mut Dfa) {
    let mut missing = Vec::new();

    for state in &dfa.states {
        for &symbol in &dfa.alphabet {
            if !dfa.transitions.contains_key(&(state.clone(), symbol)) {
                missing.push((state.clone(), symbol));
            }
        }
    }

    if missing.is_empty() {
        return;
    }

    dfa.states.insert(DfaState::Dead);

    for &symbol in &dfa.alphabet {
        dfa.transitions.insert((DfaState::Dead, symbol), DfaState::Dead);
    }

    for pair in missing {
        dfa.transitions.insert(pair, DfaState::Dead);
    }
}
