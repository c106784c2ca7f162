//! # libautomata
//!
//! Validation and execution engines for three computational models:
//! deterministic finite automata (DFA), nondeterministic pushdown automata
//! (NPDA), and deterministic Turing machines (DTM).
//!
//! A raw definition is validated all-or-nothing into an immutable automaton
//! value; acceptance queries are pure, synchronous computations over that
//! value and one complete input word, so any number of queries against the
//! same automaton may run in parallel without coordination. Nondeterminism
//! (NPDA) is resolved by exhaustive breadth-first search, unbounded tapes
//! (DTM) by a lazily-extended buffer; both carry a resource ceiling that
//! surfaces as a distinct [`Verdict::ResourceExceeded`] outcome instead of
//! looping or masquerading as a rejection.
//!
//! ## Example
//!
//! ```rust
//! use libautomata::prelude::*;
//!
//! let dfa = Dfa::validate(DfaDefinition {
//!     states: vec!["even".into(), "odd".into()],
//!     input_symbols: vec!["0".into(), "1".into()],
//!     transitions: vec![
//!         DfaTransition { from: "even".into(), symbol: "1".into(), to: "odd".into() },
//!         DfaTransition { from: "odd".into(), symbol: "1".into(), to: "even".into() },
//!         DfaTransition { from: "even".into(), symbol: "0".into(), to: "even".into() },
//!         DfaTransition { from: "odd".into(), symbol: "0".into(), to: "odd".into() },
//!     ],
//!     initial_state: "even".into(),
//!     final_states: vec!["odd".into()],
//! })?;
//!
//! assert_eq!(dfa.accepts("0110")?, Verdict::Rejected);
//! assert_eq!(dfa.accepts("0111")?, Verdict::Accepted);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod dfa;
pub mod error;
pub mod graph;
pub mod pda;
pub mod tm;
pub mod verdict;

pub use error::{QueryError, ValidationError};
pub use verdict::Verdict;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dfa::{Dfa, DfaDefinition, DfaTransition};
    pub use crate::error::{QueryError, ValidationError};
    pub use crate::graph::{GraphEdge, GraphNode, TransitionGraph};
    pub use crate::pda::{Npda, NpdaDefinition, NpdaTransition};
    pub use crate::tm::{Direction, Dtm, DtmDefinition, DtmTransition};
    pub use crate::verdict::Verdict;
}
