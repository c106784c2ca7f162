//! Configuration snapshots for the pushdown search.

use crate::alphabet::StateId;
use smallvec::SmallVec;

/// Stack contents, top at the end.
///
/// Inlined up to 16 symbols; typical searches never spill to the heap.
pub(crate) type Stack = SmallVec<[char; 16]>;

/// One snapshot of a pushdown computation: current state, how much input
/// has been consumed, and the full stack.
///
/// Configurations are created by applying one transition to a predecessor
/// and are owned by the search that created them — never shared or mutated
/// afterwards. Equality/hashing over all three fields is exactly the
/// visited-set key that bounds epsilon-loop revisits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Configuration {
    /// Current state.
    pub state: StateId,
    /// Number of input symbols consumed so far.
    pub consumed: usize,
    /// Stack contents, top at the end.
    pub stack: Stack,
}

impl Configuration {
    /// The root configuration: initial state, nothing consumed, the initial
    /// stack symbol as the sole stack entry.
    pub fn initial(state: StateId, initial_stack_symbol: char) -> Self {
        let mut stack = Stack::new();
        stack.push(initial_stack_symbol);
        Self {
            state,
            consumed: 0,
            stack,
        }
    }

    /// Goal test: input exhausted and the current state accepting.
    ///
    /// Stack contents are deliberately ignored (final-state acceptance).
    pub fn is_goal(&self, word_len: usize, accepting: &[bool]) -> bool {
        self.consumed == word_len && accepting[self.state as usize]
    }
}
