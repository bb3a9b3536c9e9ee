//! Rendering of the employment projection.
//!
//! DOT output is meant for Graphviz force-directed engines
//! (`fdp -Tpng employment.dot -o employment.png`); the text summary is
//! printed straight to the console.

use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;

use crate::projection::{EmploymentGraph, NodeKind};

/// Render the projection as Graphviz DOT with labeled nodes and edges.
///
/// Persons and Companies get distinct shapes and fill colors so the two
/// labels are readable without a legend.
pub fn render_dot(graph: &EmploymentGraph) -> String {
    let dot = Dot::with_attr_getters(
        &graph.graph,
        &[Config::NodeNoLabel, Config::EdgeNoLabel],
        &|_, edge| format!("label=\"{}\"", escape(edge.weight())),
        &|_, (_, node)| {
            let (shape, color) = match node.kind {
                NodeKind::Person => ("ellipse", "lightblue"),
                NodeKind::Company => ("box", "lightgoldenrod"),
            };
            format!(
                "label=\"{}\" shape={shape} style=filled fillcolor={color}",
                escape(&node.name)
            )
        },
    );
    format!("{dot:?}")
}

/// Render a one-line-per-employment text summary for the terminal.
pub fn render_summary(graph: &EmploymentGraph) -> String {
    if graph.is_empty() {
        return "No employment relationships in the store.".to_string();
    }

    let mut out = format!(
        "{} persons, {} companies, {} employment edges:\n",
        graph.count_kind(NodeKind::Person),
        graph.count_kind(NodeKind::Company),
        graph.edge_count()
    );
    for edge in graph.graph.edge_references() {
        let person = &graph.graph[edge.source()];
        let company = &graph.graph[edge.target()];
        out.push_str(&format!(
            "  {} -[{}]-> {}\n",
            person.name,
            edge.weight(),
            company.name
        ));
    }
    out
}

/// Escape a string for use inside a double-quoted DOT attribute.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
