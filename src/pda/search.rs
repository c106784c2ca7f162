//! Breadth-first search over pushdown configurations.
//!
//! Acceptance is existential: the search succeeds the moment any goal
//! configuration is dequeued. Two mechanisms bound the traversal:
//!
//! - the visited set closes off epsilon push/pop cycles that revisit an
//!   identical `(state, consumed, stack)` snapshot;
//! - the configuration-count ceiling cuts off pathological stack growth
//!   that produces unboundedly many *distinct* configurations, surfacing
//!   [`Verdict::ResourceExceeded`] instead of looping.

use super::config::Configuration;
use super::{Npda, PdaOutcome};
use crate::verdict::Verdict;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Exhaustive breadth-first acceptance search.
///
/// `limit` caps the number of configurations ever generated (the root
/// included); exceeding it yields `ResourceExceeded`.
pub(crate) fn search(npda: &Npda, word: &[char], limit: usize) -> Verdict {
    let root = Configuration::initial(npda.initial_id(), npda.initial_stack_symbol_char());

    let mut generated = 1usize;
    if generated > limit {
        return Verdict::ResourceExceeded;
    }

    let mut visited: FxHashSet<Configuration> = FxHashSet::default();
    let mut pending: VecDeque<Configuration> = VecDeque::new();
    visited.insert(root.clone());
    pending.push_back(root);

    while let Some(config) = pending.pop_front() {
        if config.is_goal(word.len(), npda.accepting_mask()) {
            return Verdict::Accepted;
        }

        for successor in successors(npda, word, &config) {
            if visited.contains(&successor) {
                continue;
            }
            generated += 1;
            if generated > limit {
                return Verdict::ResourceExceeded;
            }
            visited.insert(successor.clone());
            pending.push_back(successor);
        }
    }

    Verdict::Rejected
}

/// Level-synchronous parallel variant of [`search`].
///
/// Each frontier level fans out across the rayon pool with a concurrent
/// visited set. The verdict matches the sequential search except that the
/// ceiling is checked per level, so a query right at the ceiling may expand
/// up to one extra level before reporting `ResourceExceeded`.
#[cfg(feature = "parallel")]
pub(crate) fn search_parallel(npda: &Npda, word: &[char], limit: usize) -> Verdict {
    use rayon::prelude::*;

    let root = Configuration::initial(npda.initial_id(), npda.initial_stack_symbol_char());

    let mut generated = 1usize;
    if generated > limit {
        return Verdict::ResourceExceeded;
    }

    let visited: dashmap::DashSet<Configuration> = dashmap::DashSet::new();
    visited.insert(root.clone());
    let mut frontier = vec![root];

    while !frontier.is_empty() {
        if frontier
            .iter()
            .any(|config| config.is_goal(word.len(), npda.accepting_mask()))
        {
            return Verdict::Accepted;
        }

        let next: Vec<Configuration> = frontier
            .par_iter()
            .flat_map_iter(|config| successors(npda, word, config))
            .filter(|successor| visited.insert(successor.clone()))
            .collect();

        generated += next.len();
        if generated > limit {
            return Verdict::ResourceExceeded;
        }
        frontier = next;
    }

    Verdict::Rejected
}

/// Enumerate every successor of one configuration.
///
/// The four key groups are tried in a fixed order — (input, stack-top),
/// (input, ε), (ε, stack-top), (ε, ε) — and outcomes within a key keep
/// definition order, so traversal traces are reproducible.
fn successors(
    npda: &Npda,
    word: &[char],
    config: &Configuration,
) -> SmallVec<[Configuration; 4]> {
    let mut out = SmallVec::new();
    let input = (config.consumed < word.len()).then(|| word[config.consumed]);
    let top = config.stack.last().copied();

    if let Some(symbol) = input {
        if let Some(top) = top {
            extend(npda, config, &mut out, (Some(symbol), Some(top)), true, true);
        }
        extend(npda, config, &mut out, (Some(symbol), None), true, false);
    }
    if let Some(top) = top {
        extend(npda, config, &mut out, (None, Some(top)), false, true);
    }
    extend(npda, config, &mut out, (None, None), false, false);

    out
}

/// Append the configurations produced by every outcome of one key.
fn extend(
    npda: &Npda,
    config: &Configuration,
    out: &mut SmallVec<[Configuration; 4]>,
    key: (Option<char>, Option<char>),
    consumes_input: bool,
    pops_top: bool,
) {
    for outcome in npda.outcomes(config.state, key.0, key.1) {
        out.push(apply(config, outcome, consumes_input, pops_top));
    }
}

/// Apply one outcome to a configuration (copy-on-transition).
fn apply(
    config: &Configuration,
    outcome: &PdaOutcome,
    consumes_input: bool,
    pops_top: bool,
) -> Configuration {
    let mut stack = config.stack.clone();
    if pops_top {
        stack.pop();
    }
    // Reversed push keeps the first symbol of the pushed string on top.
    for &symbol in outcome.push.iter().rev() {
        stack.push(symbol);
    }
    Configuration {
        state: outcome.to,
        consumed: config.consumed + usize::from(consumes_input),
        stack,
    }
}
