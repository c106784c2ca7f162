//! Three-valued outcome of an acceptance query.

/// Outcome of asking an automaton whether it accepts a word.
///
/// `Rejected` and `ResourceExceeded` are deliberately distinct: the former
/// means the automaton provably does not accept the word, the latter means
/// the answer is undetermined within the configured step/configuration
/// budget. Collapsing the two would be unsound for machines whose
/// nontermination matters to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Verdict {
    /// The automaton accepts the word.
    Accepted,

    /// The automaton provably does not accept the word.
    Rejected,

    /// The query exhausted its resource budget before a verdict was reached.
    ///
    /// Only pushdown and Turing machine queries can produce this; a DFA walk
    /// always terminates within the length of its input.
    ResourceExceeded,
}

impl Verdict {
    /// Check whether this verdict is `Accepted`.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Check whether this verdict is `Rejected`.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Rejected)
    }

    /// Check whether the query ran out of budget before deciding.
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(self, Verdict::ResourceExceeded)
    }

    /// Get a human-readable name for this verdict
    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Accepted => "accepted",
            Verdict::Rejected => "rejected",
            Verdict::ResourceExceeded => "resource-exceeded",
        }
    }
}
