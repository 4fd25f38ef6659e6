use std::fs;
use std::path::Path;

use crate::{
    automaton::{Input, StateId, SymbolId},
    error::ParsingError,
};

/// The raw parts of one automaton file, before any validation.
pub(crate) struct RawAutomaton {
    pub(crate) states: Vec<StateId>,
    pub(crate) alphabet: Vec<SymbolId>,
    pub(crate) initial: Option<StateId>,
    pub(crate) accepting: Vec<StateId>,
    pub(crate) transitions: Vec<((StateId, Input), Vec<StateId>)>,
}

fn parse_id(token: &str) -> Result<u32, String> {
    let token = token.trim();
    token
        .parse::<u32>()
        .map_err(|_| format!("'{}' is not a valid identifier", token))
}

fn parse_id_list(tokens: &str) -> Result<Vec<u32>, String> {
    tokens.split(',').map(parse_id).collect()
}

fn parse_input(token: &str) -> Result<Input, String> {
    let token = token.trim();

    if token == "epsilon" {
        Ok(Input::Epsilon)
    } else {
        Ok(Input::Symbol(parse_id(token)?))
    }
}

/// A `transition:` line reads `<state>,<symbol> -> <target>,<target>,...`
/// where `<symbol>` is an alphabet member or the literal `epsilon`.
fn parse_transition(line: &str) -> Result<((StateId, Input), Vec<StateId>), String> {
    let (lhs, rhs) = match line.split_once("->") {
        Some(parts) => parts,
        None => return Err("transition line has no '->'".to_string()),
    };

    let mut fields = lhs.split(',');

    let state = match fields.next() {
        Some(state) => parse_id(state)?,
        None => return Err("transition line has no source state".to_string()),
    };
    let input = match fields.next() {
        Some(input) => parse_input(input)?,
        None => return Err("transition line has no symbol".to_string()),
    };

    if fields.next().is_some() {
        return Err("transition line has more than one state,symbol pair".to_string());
    }

    let targets = parse_id_list(rhs)?;

    Ok(((state, input), targets))
}

fn parse_lines(content: &str) -> Result<RawAutomaton, String> {
    let mut raw = RawAutomaton {
        states: Vec::new(),
        alphabet: Vec::new(),
        initial: None,
        accepting: Vec::new(),
        transitions: Vec::new(),
    };

    for line in content.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("states:") {
            raw.states.extend(parse_id_list(rest)?);
        } else if let Some(rest) = line.strip_prefix("alphabet:") {
            raw.alphabet.extend(parse_id_list(rest)?);
        } else if let Some(rest) = line.strip_prefix("initial:") {
            raw.initial = Some(parse_id(rest)?);
        } else if let Some(rest) = line.strip_prefix("accepting:") {
            raw.accepting.extend(parse_id_list(rest)?);
        } else if let Some(rest) = line.strip_prefix("transition:") {
            raw.transitions.push(parse_transition(rest)?);
        }
        // Anything else (blank lines, comments) is skipped.
    }

    Ok(raw)
}

pub(crate) fn parse_file(path: &Path) -> Result<RawAutomaton, ParsingError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            return Err(ParsingError::new(path, format!("{}", e)));
        }
    };

    parse_lines(&content).map_err(|e| ParsingError::new(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let raw = parse_file(Path::new("test-data/automata/sample.txt")).unwrap();

        assert_eq!(raw.states, vec![1, 2, 3, 4]);
        assert_eq!(raw.alphabet, vec![0, 1]);
        assert_eq!(raw.initial, Some(1));
        assert_eq!(raw.accepting, vec![3, 4]);
        assert_eq!(raw.transitions.len(), 6);
        assert!(raw
            .transitions
            .contains(&((1, Input::Epsilon), vec![3])));
        assert!(raw
            .transitions
            .contains(&((2, Input::Symbol(1)), vec![2, 4])));
    }

    #[test]
    fn test_junk_lines_are_skipped() {
        let raw = parse_lines("# a comment\nstates: 1\n\nnot a directive\ninitial: 1").unwrap();

        assert_eq!(raw.states, vec![1]);
        assert_eq!(raw.initial, Some(1));
        assert!(raw.transitions.is_empty());
    }

    #[test]
    fn test_duplicate_transition_lines_are_kept() {
        // The builder unions these into one target set.
        let raw = parse_lines(
            "states: 1,2,3\nalphabet: 0\ninitial: 1\ntransition: 1,0 -> 2\ntransition: 1,0 -> 3",
        )
        .unwrap();

        assert_eq!(
            raw.transitions,
            vec![((1, Input::Symbol(0)), vec![2]), ((1, Input::Symbol(0)), vec![3])]
        );
    }

    #[test]
    fn test_non_integer_state() {
        assert!(parse_lines("states: 1,x,3").is_err());
    }

    #[test]
    fn test_truncated_transition() {
        assert!(parse_lines("transition: 1,0").is_err());
        assert!(parse_lines("transition: 1 -> 2").is_err());
        assert!(parse_lines("transition: 1,0 -> ").is_err());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let raw = parse_lines("  states:  1 , 2 \n  transition:  1 , 0  ->  2 , 1  ").unwrap();

        assert_eq!(raw.states, vec![1, 2]);
        assert_eq!(raw.transitions, vec![((1, Input::Symbol(0)), vec![2, 1])]);
    }
}
