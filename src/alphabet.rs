//! Shared symbol and state-set plumbing for the three validators.
//!
//! Definitions carry symbols as string tokens (the natural wire shape);
//! validation narrows each token to a single `char` and membership-checks it
//! against its declared set. The empty string is the reserved epsilon
//! sentinel, accepted only where the model permits it.

use crate::error::{QueryError, QueryResult, ValidationError, ValidationResult};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// The reserved epsilon / "push nothing" sentinel in definition tokens.
pub const EPSILON: &str = "";

/// Index of a state in a machine's interned state list.
pub(crate) type StateId = u32;

/// Narrow a symbol token to a single character.
///
/// Empty or multi-character tokens are a shape violation, not an unknown
/// symbol: the token cannot be interpreted at all.
pub(crate) fn symbol_token(token: &str, context: &str) -> ValidationResult<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ValidationError::MalformedTransitionShape {
            detail: format!(
                "{context} expects a single-character symbol, got {token:?}"
            ),
        }),
    }
}

/// Narrow a symbol token that may be the epsilon sentinel.
///
/// Returns `None` for epsilon (the empty string), `Some(char)` otherwise.
pub(crate) fn optional_symbol_token(
    token: &str,
    context: &str,
) -> ValidationResult<Option<char>> {
    if token == EPSILON {
        Ok(None)
    } else {
        symbol_token(token, context).map(Some)
    }
}

/// An immutable set of single-character symbols.
///
/// Backed by a `BTreeSet` so iteration order (and therefore every error
/// message and introspection listing derived from it) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alphabet {
    symbols: BTreeSet<char>,
}

impl Alphabet {
    /// Build an alphabet from declared string tokens.
    ///
    /// Duplicate tokens collapse silently (declared sequences have set
    /// semantics); a non-single-character token fails with
    /// `MalformedTransitionShape`.
    pub fn from_tokens(tokens: &[String], set_name: &str) -> ValidationResult<Self> {
        let mut symbols = BTreeSet::new();
        for token in tokens {
            symbols.insert(symbol_token(token, set_name)?);
        }
        Ok(Self { symbols })
    }

    /// Check membership of a symbol.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Membership check producing an `UnknownSymbol` error on failure.
    pub fn require(&self, symbol: char, context: &str) -> ValidationResult<()> {
        if self.contains(symbol) {
            Ok(())
        } else {
            Err(ValidationError::UnknownSymbol {
                symbol: symbol.to_string(),
                context: context.to_string(),
            })
        }
    }

    /// Iterate symbols in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// First symbol of `other` missing from `self`, if any.
    pub fn first_missing_from(&self, other: &Alphabet) -> Option<char> {
        other.iter().find(|&s| !self.contains(s))
    }
}

/// Interned state identifiers for a single machine.
///
/// States keep their first-occurrence declaration order; duplicates in the
/// declared sequence collapse silently.
#[derive(Debug, Clone)]
pub(crate) struct StateSet {
    names: Vec<String>,
    ids: FxHashMap<String, StateId>,
}

impl StateSet {
    /// Intern the declared state sequence.
    pub fn from_declared(states: &[String]) -> Self {
        let mut names = Vec::with_capacity(states.len());
        let mut ids = FxHashMap::default();
        for state in states {
            if !ids.contains_key(state) {
                ids.insert(state.clone(), names.len() as StateId);
                names.push(state.clone());
            }
        }
        Self { names, ids }
    }

    /// Resolve a referenced state, producing `UnknownState` if undeclared.
    pub fn require(&self, state: &str, context: &str) -> ValidationResult<StateId> {
        self.ids.get(state).copied().ok_or_else(|| {
            ValidationError::UnknownState {
                state: state.to_string(),
                context: context.to_string(),
            }
        })
    }

    /// Name of an interned state.
    pub fn name(&self, id: StateId) -> &str {
        &self.names[id as usize]
    }

    /// Number of distinct states.
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Check every symbol of a query word against the input alphabet.
///
/// Performed before any execution so that a word the automaton cannot read
/// is reported as a query-time error, never as a rejection.
pub(crate) fn check_word(word: &str, alphabet: &Alphabet) -> QueryResult<Vec<char>> {
    let mut symbols = Vec::with_capacity(word.len());
    for (position, symbol) in word.chars().enumerate() {
        if !alphabet.contains(symbol) {
            return Err(QueryError::SymbolNotInAlphabet { symbol, position });
        }
        symbols.push(symbol);
    }
    Ok(symbols)
}
