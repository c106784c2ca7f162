//! Node/edge descriptions of an automaton's transition structure.
//!
//! This is the read-only contract consumed by a rendering collaborator:
//! nodes carry the final/initial distinction, edges carry a label in the
//! conventional notation for the machine model (`a` for a DFA step,
//! `a,Z/AZ` for a pushdown move, `a/b,R` for a tape step). Image encoding
//! itself lives outside this crate; [`TransitionGraph::to_dot`] emits the
//! textual DOT form for anything downstream that speaks graphviz.

use std::fmt::Write as _;

/// A single state node in a transition diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct GraphNode {
    /// State identifier.
    pub id: String,
    /// Whether this is the initial state (rendered with a synthetic
    /// unlabeled entry edge).
    pub initial: bool,
    /// Whether this is an accepting state (rendered as a double circle).
    pub accepting: bool,
}

/// A single labeled transition edge in a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct GraphEdge {
    /// Source state.
    pub from: String,
    /// Destination state.
    pub to: String,
    /// Model-specific edge annotation.
    pub label: String,
}

/// Complete node/edge description of one automaton's transition graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TransitionGraph {
    /// All states, in the automaton's declaration order.
    pub nodes: Vec<GraphNode>,
    /// All transitions, in definition order.
    pub edges: Vec<GraphEdge>,
}

impl TransitionGraph {
    /// Render this graph as DOT source.
    ///
    /// Left-to-right rank direction, `doublecircle` shapes for accepting
    /// states, and a synthetic point-shaped start node with an unlabeled
    /// edge marking the initial state.
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph {\n");
        dot.push_str("    rankdir=LR;\n");
        for node in &self.nodes {
            let shape = if node.accepting {
                "doublecircle"
            } else {
                "circle"
            };
            let _ = writeln!(dot, "    {:?} [shape={}];", node.id, shape);
        }
        for node in &self.nodes {
            if node.initial {
                dot.push_str("    __start [shape=point, label=\"\"];\n");
                let _ = writeln!(dot, "    __start -> {:?};", node.id);
            }
        }
        for edge in &self.edges {
            let _ = writeln!(
                dot,
                "    {:?} -> {:?} [label={:?}];",
                edge.from, edge.to, edge.label
            );
        }
        dot.push_str("}\n");
        dot
    }
}
