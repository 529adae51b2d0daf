use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt;

use citegraph_proto::{NetworkData, NetworkEdge, NetworkNode};

use super::types::{EdgeKind, GraphData, GraphEdge, GraphNode, NodeGroup};

/// Invalid local actions on the co-authorship view. These surface as
/// informational messages only; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    NoNodeSelected,
    NoAuthorMatch,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoNodeSelected => write!(f, "no node selected"),
            SelectionError::NoAuthorMatch => write!(f, "author/s not found"),
        }
    }
}

impl Error for SelectionError {}

/// The co-authorship view: the full precomputed graph plus the subset of
/// node ids currently shown. The full graph never changes after load; every
/// operation only moves the visible subset around.
#[derive(Debug, Clone, Default)]
pub struct CoauthorNetworkView {
    nodes: BTreeMap<String, NetworkNode>,
    edges: Vec<NetworkEdge>,
    visible: BTreeSet<String>,
}

impl CoauthorNetworkView {
    /// Load the precomputed graph; everything starts visible.
    pub fn new(data: NetworkData) -> Self {
        let mut nodes = BTreeMap::new();
        for node in data.nodes {
            nodes.entry(node.id.clone()).or_insert(node);
        }
        let visible = nodes.keys().cloned().collect();
        Self {
            nodes,
            edges: data.edges,
            visible,
        }
    }

    /// Authors among `names` that exist in the full graph (visible or not).
    /// An empty intersection is the "Author/s not found" case.
    pub fn match_authors(&self, names: &[String]) -> Result<Vec<String>, SelectionError> {
        let matched: Vec<String> = names
            .iter()
            .filter(|name| self.nodes.contains_key(name.as_str()))
            .cloned()
            .collect();
        if matched.is_empty() {
            return Err(SelectionError::NoAuthorMatch);
        }
        Ok(matched)
    }

    /// Restrict the view to the selection and its direct neighbors.
    pub fn show_selection_neighborhood(
        &mut self,
        selection: &[String],
    ) -> Result<(), SelectionError> {
        if selection.is_empty() {
            return Err(SelectionError::NoNodeSelected);
        }
        let mut to_show: BTreeSet<String> = selection.iter().cloned().collect();
        for id in selection {
            to_show.extend(self.neighbors(id));
        }
        self.visible = to_show
            .into_iter()
            .filter(|id| self.nodes.contains_key(id.as_str()))
            .collect();
        Ok(())
    }

    /// Add the first selected node's neighbors to the visible set.
    pub fn expand_selection(&mut self, selection: &[String]) -> Result<(), SelectionError> {
        let Some(first) = selection.first() else {
            return Err(SelectionError::NoNodeSelected);
        };
        for id in self.neighbors(first) {
            if self.nodes.contains_key(id.as_str()) {
                self.visible.insert(id);
            }
        }
        Ok(())
    }

    /// Show only authors tagged with `field`; `None` restores everything.
    pub fn filter_by_field(&mut self, field: Option<&str>) {
        match field {
            None => self.reset(),
            Some(field) => {
                self.visible = self
                    .nodes
                    .values()
                    .filter(|node| node.fields.iter().any(|f| f == field))
                    .map(|node| node.id.clone())
                    .collect();
            }
        }
    }

    pub fn reset(&mut self) {
        self.visible = self.nodes.keys().cloned().collect();
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// The visible slice in renderer form. Edges are kept only when both
    /// endpoints are visible.
    pub fn visible_data(&self) -> GraphData {
        let nodes = self
            .visible
            .iter()
            .filter_map(|id| self.nodes.get(id.as_str()))
            .map(render_node)
            .collect();
        let edges = self
            .edges
            .iter()
            .filter(|edge| {
                self.visible.contains(edge.from.as_str()) && self.visible.contains(edge.to.as_str())
            })
            .map(|edge| GraphEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                arrow: false,
                kind: EdgeKind::Coauthor,
            })
            .collect();
        GraphData { nodes, edges }
    }

    fn neighbors(&self, id: &str) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for edge in &self.edges {
            if edge.from == id {
                out.insert(edge.to.clone());
            } else if edge.to == id {
                out.insert(edge.from.clone());
            }
        }
        out
    }
}

fn render_node(node: &NetworkNode) -> GraphNode {
    let label = node.label.clone().unwrap_or_else(|| node.id.clone());
    GraphNode {
        id: node.id.clone(),
        tooltip: label.clone(),
        label,
        group: NodeGroup::Authors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, fields: &[&str]) -> NetworkNode {
        NetworkNode {
            id: id.to_string(),
            label: None,
            value: None,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            component: None,
        }
    }

    fn edge(from: &str, to: &str) -> NetworkEdge {
        NetworkEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    // a - b - c, with d isolated.
    fn sample_view() -> CoauthorNetworkView {
        CoauthorNetworkView::new(NetworkData {
            nodes: vec![
                node("a", &["cs.LG"]),
                node("b", &["cs.LG", "cs.CV"]),
                node("c", &["cs.CV"]),
                node("d", &[]),
            ],
            edges: vec![edge("a", "b"), edge("b", "c")],
        })
    }

    #[test]
    fn everything_starts_visible() {
        let view = sample_view();
        assert_eq!(view.visible_count(), 4);
        assert_eq!(view.visible_data().edges.len(), 2);
    }

    #[test]
    fn neighborhood_restricts_to_selection_and_neighbors() {
        let mut view = sample_view();
        view.show_selection_neighborhood(&["a".to_string()])
            .expect("selection present");
        assert!(view.is_visible("a"));
        assert!(view.is_visible("b"));
        assert!(!view.is_visible("c"));
        assert!(!view.is_visible("d"));
        // The b-c edge dangles and is dropped from the slice.
        assert_eq!(view.visible_data().edges.len(), 1);
    }

    #[test]
    fn expand_adds_neighbors_without_duplicates() {
        let mut view = sample_view();
        view.show_selection_neighborhood(&["a".to_string()])
            .expect("selection present");
        view.expand_selection(&["b".to_string()])
            .expect("selection present");
        assert!(view.is_visible("c"));
        assert_eq!(view.visible_count(), 3);

        // Expanding again changes nothing.
        view.expand_selection(&["b".to_string()])
            .expect("selection present");
        assert_eq!(view.visible_count(), 3);
    }

    #[test]
    fn empty_selection_is_an_error() {
        let mut view = sample_view();
        assert_eq!(
            view.show_selection_neighborhood(&[]),
            Err(SelectionError::NoNodeSelected)
        );
        assert_eq!(view.expand_selection(&[]), Err(SelectionError::NoNodeSelected));
    }

    #[test]
    fn author_match_checks_the_full_graph_not_the_visible_set() {
        let mut view = sample_view();
        view.show_selection_neighborhood(&["a".to_string()])
            .expect("selection present");
        let matched = view
            .match_authors(&["c".to_string(), "nobody".to_string()])
            .expect("c exists");
        assert_eq!(matched, vec!["c".to_string()]);

        assert_eq!(
            view.match_authors(&["nobody".to_string()]),
            Err(SelectionError::NoAuthorMatch)
        );
    }

    #[test]
    fn field_filter_and_reset() {
        let mut view = sample_view();
        view.filter_by_field(Some("cs.CV"));
        assert!(!view.is_visible("a"));
        assert!(view.is_visible("b"));
        assert!(view.is_visible("c"));

        view.filter_by_field(None);
        assert_eq!(view.visible_count(), 4);

        view.filter_by_field(Some("cs.LG"));
        view.reset();
        assert_eq!(view.visible_count(), 4);
    }
}
