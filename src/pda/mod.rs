//! Nondeterministic pushdown automata: validation and acceptance search.
//!
//! An [`Npda`] transition is keyed by `(state, input symbol or ε, stack-top
//! symbol or ε)` and maps to a *set* of `(destination, push string)`
//! outcomes — nondeterminism is intrinsic. Acceptance asks whether *any*
//! transition sequence, epsilon moves included, consumes the whole word and
//! lands in a final state (final-state acceptance: the stack is not
//! required to be empty).

mod config;
mod search;

use crate::alphabet::{
    check_word, optional_symbol_token, Alphabet, StateId, StateSet, EPSILON,
};
use crate::error::{QueryResult, ValidationResult};
use crate::graph::{GraphEdge, GraphNode, TransitionGraph};
use crate::verdict::Verdict;
use crate::ValidationError;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A single pushdown transition entry.
///
/// `input` and `stack_top` may be the empty string, the reserved epsilon
/// sentinel: an epsilon `input` consumes nothing, an epsilon `stack_top`
/// pops nothing. `push` is a (possibly empty) string of stack symbols whose
/// first character becomes the new stack top; the empty string pushes
/// nothing, which together with a non-epsilon `stack_top` is a pop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct NpdaTransition {
    /// Source state.
    pub from: String,
    /// Consumed input symbol, or `""` for an epsilon move.
    pub input: String,
    /// Required stack-top symbol, or `""` to leave the stack top unread.
    pub stack_top: String,
    /// Destination state.
    pub to: String,
    /// Stack symbols pushed in place of the popped top, first symbol on top.
    pub push: String,
}

/// Raw, unvalidated NPDA definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct NpdaDefinition {
    /// Distinct state identifiers, non-empty.
    pub states: Vec<String>,
    /// Single-character input symbol tokens.
    pub input_symbols: Vec<String>,
    /// Single-character stack symbol tokens.
    pub stack_symbols: Vec<String>,
    /// Transition entries; outcomes for one key keep definition order.
    pub transitions: Vec<NpdaTransition>,
    /// Starting state, a member of `states`.
    pub initial_state: String,
    /// Initial stack contents (one symbol), a member of `stack_symbols`.
    pub initial_stack_symbol: String,
    /// Accepting states, a subset of `states`.
    pub final_states: Vec<String>,
}

/// One compiled transition outcome: destination plus pushed symbols.
#[derive(Debug, Clone)]
pub(crate) struct PdaOutcome {
    pub to: StateId,
    pub push: SmallVec<[char; 4]>,
}

type PdaKey = (StateId, Option<char>, Option<char>);

/// A validated nondeterministic pushdown automaton.
///
/// # Example
///
/// ```rust
/// use libautomata::prelude::*;
///
/// // Balanced parentheses, final-state acceptance.
/// let npda = Npda::validate(NpdaDefinition {
///     states: vec!["q0".into()],
///     input_symbols: vec!["(".into(), ")".into()],
///     stack_symbols: vec!["Z".into(), "(".into()],
///     transitions: vec![
///         NpdaTransition {
///             from: "q0".into(), input: "(".into(), stack_top: "Z".into(),
///             to: "q0".into(), push: "(Z".into(),
///         },
///         NpdaTransition {
///             from: "q0".into(), input: "(".into(), stack_top: "(".into(),
///             to: "q0".into(), push: "((".into(),
///         },
///         NpdaTransition {
///             from: "q0".into(), input: ")".into(), stack_top: "(".into(),
///             to: "q0".into(), push: "".into(),
///         },
///     ],
///     initial_state: "q0".into(),
///     initial_stack_symbol: "Z".into(),
///     final_states: vec!["q0".into()],
/// })?;
///
/// assert_eq!(npda.accepts("(())")?, Verdict::Accepted);
/// assert_eq!(npda.accepts("(()")?, Verdict::Rejected);
/// assert_eq!(npda.accepts("")?, Verdict::Accepted);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Npda {
    definition: NpdaDefinition,
    states: StateSet,
    input_alphabet: Alphabet,
    stack_alphabet: Alphabet,
    table: FxHashMap<PdaKey, SmallVec<[PdaOutcome; 2]>>,
    initial: StateId,
    initial_stack: char,
    accepting: Vec<bool>,
}

impl Npda {
    /// Default ceiling on generated configurations per query.
    pub const DEFAULT_CONFIGURATION_LIMIT: usize = 100_000;

    /// Validate a raw definition into an immutable automaton.
    ///
    /// # Errors
    ///
    /// - `MalformedTransitionShape` for multi-character symbol tokens
    /// - `UnknownState` / `UnknownSymbol` for undeclared references
    ///   (every pushed symbol is checked against `stack_symbols`)
    /// - `InvalidInitialSymbol` if `initial_stack_symbol` is not a member
    ///   of `stack_symbols`
    pub fn validate(definition: NpdaDefinition) -> ValidationResult<Self> {
        let states = StateSet::from_declared(&definition.states);
        let input_alphabet =
            Alphabet::from_tokens(&definition.input_symbols, "input_symbols")?;
        let stack_alphabet =
            Alphabet::from_tokens(&definition.stack_symbols, "stack_symbols")?;

        let initial = states.require(&definition.initial_state, "initial_state")?;

        let mut accepting = vec![false; states.len()];
        for name in &definition.final_states {
            let id = states.require(name, "final_states")?;
            accepting[id as usize] = true;
        }

        let initial_stack = crate::alphabet::symbol_token(
            &definition.initial_stack_symbol,
            "initial_stack_symbol",
        )?;
        if !stack_alphabet.contains(initial_stack) {
            return Err(ValidationError::InvalidInitialSymbol {
                symbol: definition.initial_stack_symbol.clone(),
                detail: "initial stack symbol must be a member of stack_symbols"
                    .to_string(),
            });
        }

        let mut table: FxHashMap<PdaKey, SmallVec<[PdaOutcome; 2]>> =
            FxHashMap::default();
        for (index, entry) in definition.transitions.iter().enumerate() {
            let context = format!("transition {index}");
            let from = states.require(&entry.from, &context)?;
            let to = states.require(&entry.to, &context)?;

            let input = optional_symbol_token(&entry.input, &context)?;
            if let Some(symbol) = input {
                input_alphabet.require(symbol, &context)?;
            }
            let stack_top = optional_symbol_token(&entry.stack_top, &context)?;
            if let Some(symbol) = stack_top {
                stack_alphabet.require(symbol, &context)?;
            }

            let mut push = SmallVec::new();
            for symbol in entry.push.chars() {
                stack_alphabet.require(symbol, &context)?;
                push.push(symbol);
            }

            table
                .entry((from, input, stack_top))
                .or_default()
                .push(PdaOutcome { to, push });
        }

        Ok(Self {
            definition,
            states,
            input_alphabet,
            stack_alphabet,
            table,
            initial,
            initial_stack,
            accepting,
        })
    }

    /// Decide acceptance with the default configuration ceiling.
    pub fn accepts(&self, word: &str) -> QueryResult<Verdict> {
        self.accepts_with_limit(word, Self::DEFAULT_CONFIGURATION_LIMIT)
    }

    /// Decide acceptance, generating at most `limit` configurations.
    ///
    /// Exceeding the ceiling yields [`Verdict::ResourceExceeded`] — an
    /// undetermined outcome, deliberately distinct from `Rejected`.
    pub fn accepts_with_limit(&self, word: &str, limit: usize) -> QueryResult<Verdict> {
        let symbols = check_word(word, &self.input_alphabet)?;
        Ok(search::search(self, &symbols, limit))
    }

    /// Decide acceptance with a rayon-parallel frontier expansion.
    ///
    /// Same verdict as [`accepts_with_limit`](Self::accepts_with_limit);
    /// the parallelism is purely a throughput optimization.
    #[cfg(feature = "parallel")]
    pub fn accepts_parallel(&self, word: &str, limit: usize) -> QueryResult<Verdict> {
        let symbols = check_word(word, &self.input_alphabet)?;
        Ok(search::search_parallel(self, &symbols, limit))
    }

    /// The definition this automaton was validated from.
    pub fn definition(&self) -> &NpdaDefinition {
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

    /// Declared stack symbol tokens.
    pub fn stack_symbols(&self) -> &[String] {
        &self.definition.stack_symbols
    }

    /// Transition entries in definition order.
    pub fn transitions(&self) -> &[NpdaTransition] {
        &self.definition.transitions
    }

    /// The starting state.
    pub fn initial_state(&self) -> &str {
        &self.definition.initial_state
    }

    /// The initial stack symbol token.
    pub fn initial_stack_symbol(&self) -> &str {
        &self.definition.initial_stack_symbol
    }

    /// Accepting states.
    pub fn final_states(&self) -> &[String] {
        &self.definition.final_states
    }

    /// Node/edge description of this automaton for a rendering collaborator.
    ///
    /// Edge labels use the conventional `input,top/push` notation with `ε`
    /// standing in for epsilon tokens and the empty push string.
    pub fn transition_graph(&self) -> TransitionGraph {
        fn or_epsilon(token: &str) -> &str {
            if token == EPSILON {
                "ε"
            } else {
                token
            }
        }

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
                    "{},{}/{}",
                    or_epsilon(&entry.input),
                    or_epsilon(&entry.stack_top),
                    or_epsilon(&entry.push),
                ),
            })
            .collect();
        TransitionGraph { nodes, edges }
    }

    pub(crate) fn initial_id(&self) -> StateId {
        self.initial
    }

    pub(crate) fn initial_stack_symbol_char(&self) -> char {
        self.initial_stack
    }

    pub(crate) fn accepting_mask(&self) -> &[bool] {
        &self.accepting
    }

    /// Compiled outcomes for one `(state, input, stack-top)` key, in
    /// definition order; empty when the key has no entries.
    pub(crate) fn outcomes(
        &self,
        state: StateId,
        input: Option<char>,
        stack_top: Option<char>,
    ) -> &[PdaOutcome] {
        self.table
            .get(&(state, input, stack_top))
            .map(|outcomes| outcomes.as_slice())
            .unwrap_or(&[])
    }
}
