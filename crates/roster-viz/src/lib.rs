//! roster-viz: Visualization projection for the Roster employment graph.
//!
//! Builds an in-memory undirected graph from the employment triples fetched
//! by roster-graph and renders it for humans: Graphviz DOT (force-directed
//! layouts via `fdp`/`neato`) and a plain-text summary for the terminal.
//! Strictly read-only; the store is never touched from here.

pub mod projection;
pub mod render;

pub use projection::{EmploymentGraph, NodeKind, VizNode};
pub use render::{render_dot, render_summary};
