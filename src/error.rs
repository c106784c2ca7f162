//! Error types for automaton construction and acceptance queries.
//!
//! Errors come in two tiers that are never conflated:
//!
//! - [`ValidationError`]: a definition is structurally unsound and no
//!   automaton is produced. These are permanent — the same malformed
//!   definition always fails the same way.
//! - [`QueryError`]: a well-formed automaton was asked about a word it
//!   cannot read (a symbol outside its input alphabet).
//!
//! Execution verdicts ([`crate::Verdict`]) are *not* errors: `Rejected` is a
//! normal outcome of a well-formed query, and `ResourceExceeded` means the
//! verdict is undetermined within the configured budget.

use thiserror::Error;

/// Errors reported when a raw definition fails structural validation.
///
/// Validation is all-or-nothing: on any of these, no automaton value is
/// produced. Each variant carries the offending state/symbol and where it
/// was referenced so the definition can be corrected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A state was referenced that is not a member of the declared state set.
    #[error("unknown state {state:?} referenced by {context}")]
    UnknownState {
        /// The undeclared state identifier.
        state: String,
        /// Where the reference occurred (e.g. "initial_state", "transition 3").
        context: String,
    },

    /// A symbol was referenced that is not a member of its declared symbol set.
    #[error("unknown symbol {symbol:?} referenced by {context}")]
    UnknownSymbol {
        /// The undeclared symbol token.
        symbol: String,
        /// Where the reference occurred.
        context: String,
    },

    /// A DFA definition contains two transitions for the same
    /// `(state, symbol)` key with different destinations.
    ///
    /// Determinism violations are always an error, never silently resolved
    /// by keeping one of the entries.
    #[error(
        "nondeterministic DFA transition from {state:?} on {symbol:?}: \
         both {first:?} and {second:?}"
    )]
    NonDeterministicDfaTransition {
        /// Source state of the conflicting entries.
        state: String,
        /// Input symbol of the conflicting entries.
        symbol: char,
        /// Destination of the entry seen first.
        first: String,
        /// Destination of the conflicting later entry.
        second: String,
    },

    /// A model-specific distinguished symbol is invalid: a PDA's initial
    /// stack symbol outside `stack_symbols`, a TM's blank symbol outside
    /// `tape_symbols`, or a TM blank symbol declared as an input symbol.
    #[error("invalid initial symbol {symbol:?}: {detail}")]
    InvalidInitialSymbol {
        /// The offending symbol token.
        symbol: String,
        /// What membership constraint was violated.
        detail: String,
    },

    /// A transition or symbol token does not have the shape the model
    /// requires (multi-character symbol token, empty token where epsilon is
    /// not permitted, duplicate TM step key, ...).
    #[error("malformed transition shape: {detail}")]
    MalformedTransitionShape {
        /// Description of the shape violation.
        detail: String,
    },
}

/// Errors reported for a structurally valid query against a valid automaton.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The input word contains a symbol outside the automaton's declared
    /// input alphabet. This is reported to the caller, not treated as a
    /// rejection.
    #[error("input symbol {symbol:?} at position {position} is not in the input alphabet")]
    SymbolNotInAlphabet {
        /// The unrecognized symbol.
        symbol: char,
        /// Zero-based position of the symbol within the word.
        position: usize,
    },
}

/// A specialized `Result` for automaton construction.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// A specialized `Result` for acceptance queries.
pub type QueryResult<T> = std::result::Result<T, QueryError>;
