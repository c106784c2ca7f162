//! Deterministic finite automata: validation and acceptance.
//!
//! A [`Dfa`] is produced only by [`Dfa::validate`] and is immutable from
//! then on. Acceptance is a single linear walk over the word: totality of
//! the transition table is not required — a missing entry rejects the word
//! immediately — but determinism is, and a duplicate `(state, symbol)` key
//! with a different destination fails validation rather than silently
//! picking one entry.

use crate::alphabet::{check_word, symbol_token, Alphabet, StateId, StateSet};
use crate::error::{QueryResult, ValidationResult};
use crate::graph::{GraphEdge, GraphNode, TransitionGraph};
use crate::verdict::Verdict;
use crate::ValidationError;
use rustc_hash::FxHashMap;

/// A single DFA transition entry: `from --symbol--> to`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DfaTransition {
    /// Source state.
    pub from: String,
    /// Consumed input symbol (single-character token).
    pub symbol: String,
    /// Destination state.
    pub to: String,
}

/// Raw, unvalidated DFA definition.
///
/// Declared sequences have set semantics: duplicates collapse silently.
/// The transition list may be partial; undefined `(state, symbol)` pairs
/// reject at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DfaDefinition {
    /// Distinct state identifiers, non-empty.
    pub states: Vec<String>,
    /// Single-character input symbol tokens.
    pub input_symbols: Vec<String>,
    /// Transition entries, at most one destination per `(state, symbol)`.
    pub transitions: Vec<DfaTransition>,
    /// Starting state, a member of `states`.
    pub initial_state: String,
    /// Accepting states, a subset of `states`.
    pub final_states: Vec<String>,
}

/// A validated deterministic finite automaton.
///
/// # Example
///
/// ```rust
/// use libautomata::prelude::*;
///
/// // Accepts binary strings with an odd number of 1s.
/// let dfa = Dfa::validate(DfaDefinition {
///     states: vec!["q0".into(), "q1".into()],
///     input_symbols: vec!["0".into(), "1".into()],
///     transitions: vec![
///         DfaTransition { from: "q0".into(), symbol: "0".into(), to: "q0".into() },
///         DfaTransition { from: "q0".into(), symbol: "1".into(), to: "q1".into() },
///         DfaTransition { from: "q1".into(), symbol: "0".into(), to: "q1".into() },
///         DfaTransition { from: "q1".into(), symbol: "1".into(), to: "q0".into() },
///     ],
///     initial_state: "q0".into(),
///     final_states: vec!["q1".into()],
/// })?;
///
/// assert_eq!(dfa.accepts("1")?, Verdict::Accepted);
/// assert_eq!(dfa.accepts("11")?, Verdict::Rejected);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dfa {
    definition: DfaDefinition,
    states: StateSet,
    alphabet: Alphabet,
    table: FxHashMap<(StateId, char), StateId>,
    initial: StateId,
    accepting: Vec<bool>,
}

impl Dfa {
    /// Validate a raw definition into an immutable automaton.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// symbol-set shape, initial state, final states, then each transition
    /// entry in definition order (source state, destination state, symbol,
    /// determinism).
    ///
    /// # Errors
    ///
    /// - `MalformedTransitionShape` for non-single-character symbol tokens
    /// - `UnknownState` / `UnknownSymbol` for undeclared references
    /// - `NonDeterministicDfaTransition` for conflicting duplicate keys
    pub fn validate(definition: DfaDefinition) -> ValidationResult<Self> {
        let states = StateSet::from_declared(&definition.states);
        let alphabet = Alphabet::from_tokens(&definition.input_symbols, "input_symbols")?;

        let initial = states.require(&definition.initial_state, "initial_state")?;

        let mut accepting = vec![false; states.len()];
        for name in &definition.final_states {
            let id = states.require(name, "final_states")?;
            accepting[id as usize] = true;
        }

        let mut table = FxHashMap::default();
        for (index, entry) in definition.transitions.iter().enumerate() {
            let context = format!("transition {index}");
            let from = states.require(&entry.from, &context)?;
            let to = states.require(&entry.to, &context)?;
            let symbol = symbol_token(&entry.symbol, &context)?;
            alphabet.require(symbol, &context)?;

            if let Some(&existing) = table.get(&(from, symbol)) {
                if existing != to {
                    return Err(ValidationError::NonDeterministicDfaTransition {
                        state: entry.from.clone(),
                        symbol,
                        first: states.name(existing).to_string(),
                        second: entry.to.clone(),
                    });
                }
            } else {
                table.insert((from, symbol), to);
            }
        }

        Ok(Self {
            definition,
            states,
            alphabet,
            table,
            initial,
            accepting,
        })
    }

    /// Decide whether this automaton accepts `word`.
    ///
    /// The whole word is checked against the input alphabet before the walk
    /// starts; an unrecognized symbol is a query-time error, not a
    /// rejection. A missing transition entry rejects immediately. A DFA walk
    /// never returns [`Verdict::ResourceExceeded`].
    pub fn accepts(&self, word: &str) -> QueryResult<Verdict> {
        let symbols = check_word(word, &self.alphabet)?;

        let mut current = self.initial;
        for symbol in symbols {
            match self.table.get(&(current, symbol)) {
                Some(&next) => current = next,
                // Incomplete tables are legal; the walk just fails.
                None => return Ok(Verdict::Rejected),
            }
        }

        Ok(if self.accepting[current as usize] {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        })
    }

    /// The definition this automaton was validated from.
    ///
    /// Re-validating it succeeds and produces an automaton with identical
    /// observable fields.
    pub fn definition(&self) -> &DfaDefinition {
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

    /// Transition entries in definition order.
    pub fn transitions(&self) -> &[DfaTransition] {
        &self.definition.transitions
    }

    /// The starting state.
    pub fn initial_state(&self) -> &str {
        &self.definition.initial_state
    }

    /// Accepting states.
    pub fn final_states(&self) -> &[String] {
        &self.definition.final_states
    }

    /// Node/edge description of this automaton for a rendering collaborator.
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
                label: entry.symbol.clone(),
            })
            .collect();
        TransitionGraph { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;

    fn odd_ones() -> DfaDefinition {
        DfaDefinition {
            states: vec!["q0".to_string(), "q1".to_string()],
            input_symbols: vec!["0".to_string(), "1".to_string()],
            transitions: vec![
                DfaTransition {
                    from: "q0".to_string(),
                    symbol: "0".to_string(),
                    to: "q0".to_string(),
                },
                DfaTransition {
                    from: "q0".to_string(),
                    symbol: "1".to_string(),
                    to: "q1".to_string(),
                },
                DfaTransition {
                    from: "q1".to_string(),
                    symbol: "0".to_string(),
                    to: "q1".to_string(),
                },
                DfaTransition {
                    from: "q1".to_string(),
                    symbol: "1".to_string(),
                    to: "q0".to_string(),
                },
            ],
            initial_state: "q0".to_string(),
            final_states: vec!["q1".to_string()],
        }
    }

    #[test]
    fn test_odd_ones_examples() {
        let dfa = Dfa::validate(odd_ones()).unwrap();
        assert_eq!(dfa.accepts("1").unwrap(), Verdict::Accepted);
        assert_eq!(dfa.accepts("11").unwrap(), Verdict::Rejected);
        assert_eq!(dfa.accepts("").unwrap(), Verdict::Rejected);
        assert_eq!(dfa.accepts("0101").unwrap(), Verdict::Rejected);
        assert_eq!(dfa.accepts("0100").unwrap(), Verdict::Accepted);
    }

    #[test]
    fn test_missing_transition_rejects() {
        let mut definition = odd_ones();
        definition.transitions.truncate(2); // q1 has no outgoing entries
        let dfa = Dfa::validate(definition).unwrap();
        assert_eq!(dfa.accepts("10").unwrap(), Verdict::Rejected);
        assert_eq!(dfa.accepts("1").unwrap(), Verdict::Accepted);
    }

    #[test]
    fn test_word_outside_alphabet_is_error_not_reject() {
        let dfa = Dfa::validate(odd_ones()).unwrap();
        let err = dfa.accepts("012").unwrap_err();
        assert_eq!(
            err,
            QueryError::SymbolNotInAlphabet {
                symbol: '2',
                position: 2,
            }
        );
    }

    #[test]
    fn test_conflicting_duplicate_key_fails_validation() {
        let mut definition = odd_ones();
        definition.transitions.push(DfaTransition {
            from: "q0".to_string(),
            symbol: "1".to_string(),
            to: "q0".to_string(),
        });
        let err = Dfa::validate(definition).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonDeterministicDfaTransition {
                state: "q0".to_string(),
                symbol: '1',
                first: "q1".to_string(),
                second: "q0".to_string(),
            }
        );
    }

    #[test]
    fn test_identical_duplicate_key_is_tolerated() {
        let mut definition = odd_ones();
        definition.transitions.push(definition.transitions[0].clone());
        assert!(Dfa::validate(definition).is_ok());
    }

    #[test]
    fn test_unknown_initial_state() {
        let mut definition = odd_ones();
        definition.initial_state = "q9".to_string();
        let err = Dfa::validate(definition).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownState {
                state: "q9".to_string(),
                context: "initial_state".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_transition_symbol() {
        let mut definition = odd_ones();
        definition.transitions[1].symbol = "2".to_string();
        let err = Dfa::validate(definition).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownSymbol {
                symbol: "2".to_string(),
                context: "transition 1".to_string(),
            }
        );
    }

    #[test]
    fn test_multichar_symbol_is_malformed() {
        let mut definition = odd_ones();
        definition.transitions[0].symbol = "01".to_string();
        assert!(matches!(
            Dfa::validate(definition).unwrap_err(),
            ValidationError::MalformedTransitionShape { .. }
        ));
    }

    #[test]
    fn test_introspection_matches_definition() {
        let definition = odd_ones();
        let dfa = Dfa::validate(definition.clone()).unwrap();
        assert_eq!(dfa.states(), definition.states.as_slice());
        assert_eq!(dfa.initial_state(), "q0");
        assert_eq!(dfa.final_states(), definition.final_states.as_slice());
        assert_eq!(dfa.transitions().len(), 4);
        assert_eq!(dfa.definition(), &definition);
    }

    #[test]
    fn test_transition_graph_shape() {
        let dfa = Dfa::validate(odd_ones()).unwrap();
        let graph = dfa.transition_graph();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 4);
        assert!(graph.nodes[0].initial && !graph.nodes[0].accepting);
        assert!(!graph.nodes[1].initial && graph.nodes[1].accepting);
        assert_eq!(graph.edges[1].label, "1");
    }
}
