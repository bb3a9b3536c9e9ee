//! In-memory projection of the employment subgraph.
//!
//! Converts employment triples into an undirected `petgraph` graph: one
//! node per distinct Person name, one per distinct Company name, one
//! role-labeled edge per employment relationship.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use roster_core::EmploymentRow;

/// Which store label a projected node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Person,
    Company,
}

/// A projected node: a name tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VizNode {
    pub name: String,
    pub kind: NodeKind,
}

/// The in-memory employment graph used for visualization.
pub struct EmploymentGraph {
    /// Undirected graph; edge weights carry the role label.
    pub graph: UnGraph<VizNode, String>,
    /// Map from (kind, name) to its node index, for dedupe and lookups.
    pub node_index: HashMap<(NodeKind, String), NodeIndex>,
}

impl EmploymentGraph {
    /// Build the projection from employment triples.
    ///
    /// Names are deduplicated per kind: two Persons at the same Company
    /// share one Company node. Every row contributes exactly one edge.
    pub fn from_rows(rows: Vec<EmploymentRow>) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut node_index: HashMap<(NodeKind, String), NodeIndex> = HashMap::new();

        for row in &rows {
            let person = intern(&mut graph, &mut node_index, NodeKind::Person, &row.person);
            let company = intern(&mut graph, &mut node_index, NodeKind::Company, &row.company);
            graph.add_edge(person, company, row.role.clone());
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built employment projection"
        );

        Self { graph, node_index }
    }

    /// Number of nodes in the projection.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of employment edges in the projection.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of nodes of a given kind.
    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.graph
            .node_weights()
            .filter(|n| n.kind == kind)
            .count()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

fn intern(
    graph: &mut UnGraph<VizNode, String>,
    node_index: &mut HashMap<(NodeKind, String), NodeIndex>,
    kind: NodeKind,
    name: &str,
) -> NodeIndex {
    *node_index
        .entry((kind, name.to_string()))
        .or_insert_with(|| {
            graph.add_node(VizNode {
                name: name.to_string(),
                kind,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(person: &str, company: &str, role: &str) -> EmploymentRow {
        EmploymentRow {
            person: person.to_string(),
            company: company.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_two_persons_one_company() {
        let graph = EmploymentGraph::from_rows(vec![
            row("Ana", "Acme", "Engineer"),
            row("Bruno", "Acme", "Designer"),
        ]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.count_kind(NodeKind::Person), 2);
        assert_eq!(graph.count_kind(NodeKind::Company), 1);
    }

    #[test]
    fn test_edge_carries_role_label() {
        let graph = EmploymentGraph::from_rows(vec![row("Ana", "Acme", "Engineer")]);

        let roles: Vec<_> = graph.graph.edge_weights().collect();
        assert_eq!(roles, vec!["Engineer"]);
    }

    #[test]
    fn test_person_and_company_with_same_name_stay_distinct() {
        let graph = EmploymentGraph::from_rows(vec![row("Acme", "Acme", "Founder")]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.count_kind(NodeKind::Person), 1);
        assert_eq!(graph.count_kind(NodeKind::Company), 1);
    }

    #[test]
    fn test_empty_rows_give_empty_projection() {
        let graph = EmploymentGraph::from_rows(vec![]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_node_index_lookup() {
        let graph = EmploymentGraph::from_rows(vec![row("Ana", "Acme", "Engineer")]);

        assert!(graph
            .node_index
            .contains_key(&(NodeKind::Person, "Ana".to_string())));
        assert!(graph
            .node_index
            .contains_key(&(NodeKind::Company, "Acme".to_string())));
        assert!(!graph
            .node_index
            .contains_key(&(NodeKind::Company, "Ana".to_string())));
    }
}
