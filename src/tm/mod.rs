//! Deterministic Turing machines: validation and bounded step execution.
//!
//! A [`Dtm`] query runs to one of three outcomes: **accept** (a final state
//! is reached), **reject** (a non-final state has no entry for the current
//! `(state, symbol)` pair — undefined transitions are an implicit reject,
//! not an error), or **resource-exceeded** when the step budget runs out.
//! The budget is a deliberate approximation of nontermination and is
//! surfaced as its own verdict, never collapsed into reject.

mod tape;

use crate::alphabet::{check_word, symbol_token, Alphabet, StateId, StateSet};
use crate::error::{QueryResult, ValidationResult};
use crate::graph::{GraphEdge, GraphNode, TransitionGraph};
use crate::verdict::Verdict;
use crate::ValidationError;
use rustc_hash::FxHashMap;
use tape::Tape;

/// Head movement of one tape step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Direction {
    /// Move the head one cell left.
    #[cfg_attr(feature = "serialization", serde(rename = "L"))]
    Left,
    /// Move the head one cell right.
    #[cfg_attr(feature = "serialization", serde(rename = "R"))]
    Right,
    /// Leave the head where it is.
    #[cfg_attr(feature = "serialization", serde(rename = "N"))]
    Stay,
}

impl Direction {
    /// Get a human-readable name for this direction
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::Stay => "N",
        }
    }
}

/// A single tape-step entry: in `from` reading `read`, write `write`, move
/// `direction`, and enter `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DtmTransition {
    /// Source state.
    pub from: String,
    /// Tape symbol under the head (single-character token).
    pub read: String,
    /// Destination state.
    pub to: String,
    /// Symbol written in place of `read` (may be the same symbol).
    pub write: String,
    /// Head movement after writing.
    pub direction: Direction,
}

/// Raw, unvalidated DTM definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DtmDefinition {
    /// Distinct state identifiers, non-empty.
    pub states: Vec<String>,
    /// Single-character input symbol tokens, a subset of `tape_symbols`
    /// that excludes the blank symbol.
    pub input_symbols: Vec<String>,
    /// Single-character tape symbol tokens.
    pub tape_symbols: Vec<String>,
    /// Step entries, exactly one per `(state, read)` key present.
    pub transitions: Vec<DtmTransition>,
    /// Starting state, a member of `states`.
    pub initial_state: String,
    /// Fill symbol for unwritten tape cells, a member of `tape_symbols`.
    pub blank_symbol: String,
    /// Accepting (halting) states, a subset of `states`; may be empty.
    pub final_states: Vec<String>,
}

/// A validated deterministic Turing machine.
///
/// # Example
///
/// ```rust
/// use libautomata::prelude::*;
///
/// // Walk right over the 1s of a unary counter and append one more.
/// let dtm = Dtm::validate(DtmDefinition {
///     states: vec!["scan".into(), "done".into()],
///     input_symbols: vec!["1".into()],
///     tape_symbols: vec!["1".into(), ".".into()],
///     transitions: vec![
///         DtmTransition {
///             from: "scan".into(), read: "1".into(),
///             to: "scan".into(), write: "1".into(), direction: Direction::Right,
///         },
///         DtmTransition {
///             from: "scan".into(), read: ".".into(),
///             to: "done".into(), write: "1".into(), direction: Direction::Stay,
///         },
///     ],
///     initial_state: "scan".into(),
///     blank_symbol: ".".into(),
///     final_states: vec!["done".into()],
/// })?;
///
/// assert_eq!(dtm.accepts("111")?, Verdict::Accepted);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dtm {
    definition: DtmDefinition,
    states: StateSet,
    input_alphabet: Alphabet,
    tape_alphabet: Alphabet,
    table: FxHashMap<(StateId, char), DtmStep>,
    initial: StateId,
    blank: char,
    accepting: Vec<bool>,
}

/// One compiled step outcome.
#[derive(Debug, Clone, Copy)]
struct DtmStep {
    to: StateId,
    write: char,
    direction: Direction,
}

impl Dtm {
    /// Default ceiling on executed steps per query.
    pub const DEFAULT_STEP_LIMIT: usize = 100_000;

    /// Validate a raw definition into an immutable machine.
    ///
    /// # Errors
    ///
    /// - `MalformedTransitionShape` for multi-character symbol tokens or a
    ///   duplicate `(state, read)` key
    /// - `UnknownState` / `UnknownSymbol` for undeclared references
    ///   (`input_symbols` must be a subset of `tape_symbols`; `read` and
    ///   `write` are checked against `tape_symbols`)
    /// - `InvalidInitialSymbol` if the blank symbol is outside
    ///   `tape_symbols` or declared as an input symbol
    pub fn validate(definition: DtmDefinition) -> ValidationResult<Self> {
        let states = StateSet::from_declared(&definition.states);
        let input_alphabet =
            Alphabet::from_tokens(&definition.input_symbols, "input_symbols")?;
        let tape_alphabet =
            Alphabet::from_tokens(&definition.tape_symbols, "tape_symbols")?;

        let initial = states.require(&definition.initial_state, "initial_state")?;

        let mut accepting = vec![false; states.len()];
        for name in &definition.final_states {
            let id = states.require(name, "final_states")?;
            accepting[id as usize] = true;
        }

        let blank = symbol_token(&definition.blank_symbol, "blank_symbol")?;
        if !tape_alphabet.contains(blank) {
            return Err(ValidationError::InvalidInitialSymbol {
                symbol: definition.blank_symbol.clone(),
                detail: "blank symbol must be a member of tape_symbols".to_string(),
            });
        }
        if input_alphabet.contains(blank) {
            return Err(ValidationError::InvalidInitialSymbol {
                symbol: definition.blank_symbol.clone(),
                detail: "blank symbol must not be an input symbol".to_string(),
            });
        }
        if let Some(missing) = tape_alphabet.first_missing_from(&input_alphabet) {
            return Err(ValidationError::UnknownSymbol {
                symbol: missing.to_string(),
                context: "input_symbols (not a member of tape_symbols)".to_string(),
            });
        }

        let mut table = FxHashMap::default();
        for (index, entry) in definition.transitions.iter().enumerate() {
            let context = format!("transition {index}");
            let from = states.require(&entry.from, &context)?;
            let to = states.require(&entry.to, &context)?;
            let read = symbol_token(&entry.read, &context)?;
            tape_alphabet.require(read, &context)?;
            let write = symbol_token(&entry.write, &context)?;
            tape_alphabet.require(write, &context)?;

            let step = DtmStep {
                to,
                write,
                direction: entry.direction,
            };
            if table.insert((from, read), step).is_some() {
                return Err(ValidationError::MalformedTransitionShape {
                    detail: format!(
                        "duplicate transition for state {:?} reading {:?}",
                        entry.from, entry.read
                    ),
                });
            }
        }

        Ok(Self {
            definition,
            states,
            input_alphabet,
            tape_alphabet,
            table,
            initial,
            blank,
            accepting,
        })
    }

    /// Decide acceptance with the default step budget.
    pub fn accepts(&self, word: &str) -> QueryResult<Verdict> {
        self.accepts_with_limit(word, Self::DEFAULT_STEP_LIMIT)
    }

    /// Decide acceptance, executing at most `limit` steps.
    ///
    /// The word is checked against `input_symbols` before the tape is
    /// loaded. Entering a final state accepts; a missing `(state, symbol)`
    /// entry rejects; running out of budget yields
    /// [`Verdict::ResourceExceeded`] — possible nontermination, reported as
    /// its own outcome rather than a silent reject.
    pub fn accepts_with_limit(&self, word: &str, limit: usize) -> QueryResult<Verdict> {
        let symbols = check_word(word, &self.input_alphabet)?;
        let mut tape = Tape::new(&symbols, self.blank);
        let mut state = self.initial;

        for _ in 0..limit {
            if self.accepting[state as usize] {
                return Ok(Verdict::Accepted);
            }
            let symbol = tape.read();
            match self.table.get(&(state, symbol)) {
                // Undefined pairs halt and reject (tolerated table gaps).
                None => return Ok(Verdict::Rejected),
                Some(step) => {
                    tape.write(step.write);
                    tape.step(step.direction);
                    state = step.to;
                }
            }
        }

        Ok(if self.accepting[state as usize] {
            // The budget ran out exactly on entry into a final state.
            Verdict::Accepted
        } else {
            Verdict::ResourceExceeded
        })
    }

    /// The definition this machine was validated from.
    pub fn definition(&self) -> &DtmDefinition {
        &self.definition
    }

    /// Declared state identifiers.
    pub fn states(&self) -> &[String] {
        &self.definition.states
    }

    /// Declared input symbol tokens.
    pub fn input_symbols(&self) -> &[String] {
        &self.definition.input_symbols
    }

    /// Declared tape symbol tokens.
    pub fn tape_symbols(&self) -> &[String] {
        &self.definition.tape_symbols
    }

    /// Step entries in definition order.
    pub fn transitions(&self) -> &[DtmTransition] {
        &self.definition.transitions
    }

    /// The starting state.
    pub fn initial_state(&self) -> &str {
        &self.definition.initial_state
    }

    /// The blank symbol token.
    pub fn blank_symbol(&self) -> &str {
        &self.definition.blank_symbol
    }

    /// Accepting states.
    pub fn final_states(&self) -> &[String] {
        &self.definition.final_states
    }

    /// Node/edge description of this machine for a rendering collaborator.
    ///
    /// Edge labels use the conventional `read/write,direction` notation.
    pub fn transition_graph(&self) -> TransitionGraph {
        let nodes = (0..self.states.len() as StateId)
            .map(|id| GraphNode {
                id: self.states.name(id).to_string(),
                initial: id == self.initial,
                accepting: self.accepting[id as usize],
            })
            .collect();
        let edges = self
            .definition
            .transitions
            .iter()
            .map(|entry| GraphEdge {
                from: entry.from.clone(),
                to: entry.to.clone(),
                label: format!(
                    "{}/{},{}",
                    entry.read,
                    entry.write,
                    entry.direction.name()
                ),
            })
            .collect();
        TransitionGraph { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;

    fn step(from: &str, read: &str, to: &str, write: &str, direction: Direction) -> DtmTransition {
        DtmTransition {
            from: from.to_string(),
            read: read.to_string(),
            to: to.to_string(),
            write: write.to_string(),
            direction,
        }
    }

    /// Unary incrementer: scan right over 1s, write one more at the blank.
    fn unary_increment() -> DtmDefinition {
        DtmDefinition {
            states: vec!["scan".to_string(), "done".to_string()],
            input_symbols: vec!["1".to_string()],
            tape_symbols: vec!["1".to_string(), ".".to_string()],
            transitions: vec![
                step("scan", "1", "scan", "1", Direction::Right),
                step("scan", ".", "done", "1", Direction::Stay),
            ],
            initial_state: "scan".to_string(),
            blank_symbol: ".".to_string(),
            final_states: vec!["done".to_string()],
        }
    }

    #[test]
    fn test_unary_increment_accepts_every_input() {
        let dtm = Dtm::validate(unary_increment()).unwrap();
        for word in ["", "1", "11", "1111111"] {
            assert_eq!(dtm.accepts(word).unwrap(), Verdict::Accepted, "word {word:?}");
        }
    }

    #[test]
    fn test_undefined_transition_rejects() {
        let mut definition = unary_increment();
        definition.transitions.pop(); // no entry for (scan, blank)
        let dtm = Dtm::validate(definition).unwrap();
        assert_eq!(dtm.accepts("11").unwrap(), Verdict::Rejected);
    }

    #[test]
    fn test_runaway_machine_exceeds_budget() {
        // Marches right over blanks forever; only the step budget stops it.
        let dtm = Dtm::validate(DtmDefinition {
            states: vec!["run".to_string()],
            input_symbols: vec!["1".to_string()],
            tape_symbols: vec!["1".to_string(), ".".to_string()],
            transitions: vec![
                step("run", "1", "run", "1", Direction::Right),
                step("run", ".", "run", ".", Direction::Right),
            ],
            initial_state: "run".to_string(),
            blank_symbol: ".".to_string(),
            final_states: vec![],
        })
        .unwrap();
        assert_eq!(
            dtm.accepts_with_limit("1", 1_000).unwrap(),
            Verdict::ResourceExceeded
        );
    }

    #[test]
    fn test_initial_state_accepting_halts_immediately() {
        let mut definition = unary_increment();
        definition.final_states.push("scan".to_string());
        let dtm = Dtm::validate(definition).unwrap();
        assert_eq!(dtm.accepts_with_limit("1", 0).unwrap(), Verdict::Accepted);
    }

    #[test]
    fn test_word_outside_input_symbols_is_error() {
        let dtm = Dtm::validate(unary_increment()).unwrap();
        // '.' is a tape symbol but not an input symbol.
        let err = dtm.accepts("1.1").unwrap_err();
        assert_eq!(
            err,
            QueryError::SymbolNotInAlphabet {
                symbol: '.',
                position: 1,
            }
        );
    }

    #[test]
    fn test_blank_outside_tape_symbols() {
        let mut definition = unary_increment();
        definition.blank_symbol = "#".to_string();
        let err = Dtm::validate(definition).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidInitialSymbol { ref symbol, .. } if symbol == "#"
        ));
    }

    #[test]
    fn test_blank_declared_as_input_symbol() {
        let mut definition = unary_increment();
        definition.input_symbols.push(".".to_string());
        assert!(matches!(
            Dtm::validate(definition).unwrap_err(),
            ValidationError::InvalidInitialSymbol { .. }
        ));
    }

    #[test]
    fn test_input_symbols_must_be_tape_symbols() {
        let mut definition = unary_increment();
        definition.input_symbols.push("0".to_string());
        let err = Dtm::validate(definition).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnknownSymbol { ref symbol, .. } if symbol == "0"
        ));
    }

    #[test]
    fn test_duplicate_step_key_is_malformed() {
        let mut definition = unary_increment();
        definition
            .transitions
            .push(step("scan", "1", "done", "1", Direction::Left));
        assert!(matches!(
            Dtm::validate(definition).unwrap_err(),
            ValidationError::MalformedTransitionShape { .. }
        ));
    }

    #[test]
    fn test_left_growth_and_stay() {
        // Write a marker left of the origin, then return and accept.
        let dtm = Dtm::validate(DtmDefinition {
            states: vec!["start".to_string(), "mark".to_string(), "done".to_string()],
            input_symbols: vec!["1".to_string()],
            tape_symbols: vec!["1".to_string(), "X".to_string(), ".".to_string()],
            transitions: vec![
                step("start", "1", "mark", "1", Direction::Left),
                step("mark", ".", "done", "X", Direction::Stay),
            ],
            initial_state: "start".to_string(),
            blank_symbol: ".".to_string(),
            final_states: vec!["done".to_string()],
        })
        .unwrap();
        assert_eq!(dtm.accepts("1").unwrap(), Verdict::Accepted);
    }

    #[test]
    fn test_transition_graph_labels() {
        let dtm = Dtm::validate(unary_increment()).unwrap();
        let graph = dtm.transition_graph();
        assert_eq!(graph.edges[0].label, "1/1,R");
        assert_eq!(graph.edges[1].label, "./1,N");
        assert!(graph.nodes[0].initial);
        assert!(graph.nodes[1].accepting);
    }
}
