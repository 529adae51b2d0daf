use std::collections::BTreeMap;

use citegraph_proto::{PaperDetail, PaperStub};

use super::types::{stub_label, EdgeKind, GraphData, GraphEdge, GraphNode, GraphRenderer, NodeGroup};

/// Which relation categories of a paper payload get materialized as nodes
/// and edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandSelection {
    pub references: bool,
    pub citations: bool,
    pub authors: bool,
}

impl ExpandSelection {
    pub const ALL: Self = Self {
        references: true,
        citations: true,
        authors: true,
    };

    /// The re-expansion used by focus links inside a detail panel: related
    /// papers stay collapsed, authors are added.
    pub const AUTHORS_ONLY: Self = Self {
        references: false,
        citations: false,
        authors: true,
    };
}

/// Most recent detail fetch, kept so a focus action can re-run its expansion
/// without another network round-trip. At most one is remembered; a later
/// fetch overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedExpansion {
    Paper { payload: PaperDetail },
    Author { name: String, papers: Vec<PaperStub> },
}

/// Displayed state of the citation-network view: the node set keyed by
/// identifier, the edge list in insertion order, and the remembered last
/// expansion.
///
/// Nodes are deduplicated by id on every merge, so an entity fetched twice
/// resolves to one vertex. Edges are appended unconditionally; re-expanding
/// the same payload duplicates its edges.
#[derive(Debug, Clone, Default)]
pub struct CitationGraphView {
    nodes: BTreeMap<String, GraphNode>,
    edges: Vec<GraphEdge>,
    last_expansion: Option<RecordedExpansion>,
}

impl CitationGraphView {
    pub fn new() -> Self {
        Self::default()
    }

    /// First draw for a paper query: the paper's own node plus a full
    /// expansion of its relations.
    pub fn seed_paper(&mut self, payload: &PaperDetail) {
        self.insert_node(GraphNode {
            id: payload.id.clone(),
            label: payload.title.clone(),
            tooltip: payload.title.clone(),
            group: NodeGroup::Papers,
        });
        self.expand_from_paper(payload, ExpandSelection::ALL);
    }

    /// First draw for an author query.
    pub fn seed_author(&mut self, name: &str, papers: &[PaperStub]) {
        self.insert_node(GraphNode {
            id: name.to_string(),
            label: name.to_string(),
            tooltip: name.to_string(),
            group: NodeGroup::Authors,
        });
        self.expand_from_author(name, papers);
    }

    /// Merge the selected relation categories of `payload` into the view.
    /// Absent relation arrays contribute nothing. Does not redraw.
    pub fn expand_from_paper(&mut self, payload: &PaperDetail, selection: ExpandSelection) {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        if selection.references {
            collect_references(payload, &mut nodes, &mut edges);
        }
        if selection.citations {
            collect_citations(payload, &mut nodes, &mut edges);
        }
        if selection.authors {
            collect_authors(payload, &mut nodes, &mut edges);
        }
        self.merge(nodes, edges);
    }

    /// Merge an author's paper listing into the view: one node per paper,
    /// one edge author -> paper.
    pub fn expand_from_author(&mut self, author_id: &str, papers: &[PaperStub]) {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for stub in papers {
            let Some(id) = stub.external_id() else {
                continue;
            };
            nodes.push(GraphNode {
                id: id.to_string(),
                label: stub_label(&stub.title),
                tooltip: stub.title.clone(),
                group: NodeGroup::Papers,
            });
            edges.push(GraphEdge {
                from: author_id.to_string(),
                to: id.to_string(),
                arrow: true,
                kind: EdgeKind::Author,
            });
        }
        self.merge(nodes, edges);
    }

    pub fn record_last_expansion(&mut self, record: RecordedExpansion) {
        self.last_expansion = Some(record);
    }

    pub fn last_expansion(&self) -> Option<&RecordedExpansion> {
        self.last_expansion.as_ref()
    }

    /// Re-run the remembered expansion against the current state. Returns
    /// false when nothing has been recorded yet.
    pub fn replay_last(&mut self) -> bool {
        let Some(record) = self.last_expansion.clone() else {
            return false;
        };
        match record {
            RecordedExpansion::Paper { payload } => {
                self.expand_from_paper(&payload, ExpandSelection::AUTHORS_ONLY);
            }
            RecordedExpansion::Author { name, papers } => {
                self.expand_from_author(&name, &papers);
            }
        }
        true
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Current collections in renderer form, nodes ordered by id.
    pub fn data_set(&self) -> GraphData {
        GraphData {
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.clone(),
        }
    }

    /// Push the current collections to the rendering library. The only
    /// point where a redraw is requested.
    pub fn apply_to(&self, renderer: &mut dyn GraphRenderer) {
        renderer.set_data(self.data_set());
    }

    fn insert_node(&mut self, node: GraphNode) {
        self.nodes.entry(node.id.clone()).or_insert(node);
    }

    fn merge(&mut self, nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) {
        // First occurrence wins, both against the displayed set and within
        // the incoming batch.
        for node in nodes {
            self.insert_node(node);
        }
        self.edges.extend(edges);
    }
}

fn collect_references(payload: &PaperDetail, nodes: &mut Vec<GraphNode>, edges: &mut Vec<GraphEdge>) {
    for stub in payload.references.iter().flatten() {
        let Some(id) = stub.external_id() else {
            continue;
        };
        edges.push(GraphEdge {
            from: payload.id.clone(),
            to: id.to_string(),
            arrow: true,
            kind: EdgeKind::Reference,
        });
        nodes.push(GraphNode {
            id: id.to_string(),
            label: stub_label(&stub.title),
            tooltip: stub.title.clone(),
            group: NodeGroup::References,
        });
    }
}

fn collect_citations(payload: &PaperDetail, nodes: &mut Vec<GraphNode>, edges: &mut Vec<GraphEdge>) {
    for stub in payload.citations.iter().flatten() {
        let Some(id) = stub.external_id() else {
            continue;
        };
        edges.push(GraphEdge {
            from: id.to_string(),
            to: payload.id.clone(),
            arrow: true,
            kind: EdgeKind::Citation,
        });
        nodes.push(GraphNode {
            id: id.to_string(),
            label: stub_label(&stub.title),
            tooltip: stub.title.clone(),
            group: NodeGroup::Citations,
        });
    }
}

fn collect_authors(payload: &PaperDetail, nodes: &mut Vec<GraphNode>, edges: &mut Vec<GraphEdge>) {
    for author in payload.authors.iter().flatten() {
        edges.push(GraphEdge {
            from: author.name.clone(),
            to: payload.id.clone(),
            arrow: true,
            kind: EdgeKind::Author,
        });
        nodes.push(GraphNode {
            id: author.name.clone(),
            label: author.name.clone(),
            tooltip: author.name.clone(),
            group: NodeGroup::Authors,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citegraph_proto::AuthorStub;

    fn stub(arxiv_id: &str, title: &str) -> PaperStub {
        PaperStub {
            arxiv_id: Some(arxiv_id.to_string()),
            id: None,
            paper_id: None,
            title: title.to_string(),
        }
    }

    fn paper(id: &str, title: &str) -> PaperDetail {
        PaperDetail {
            id: id.to_string(),
            title: title.to_string(),
            paper_id: None,
            authors: None,
            references: None,
            citations: None,
        }
    }

    #[test]
    fn empty_relations_leave_view_unchanged() {
        let mut view = CitationGraphView::new();
        let mut payload = paper("p1", "Root");
        payload.references = Some(Vec::new());
        payload.citations = Some(Vec::new());
        payload.authors = Some(Vec::new());
        view.expand_from_paper(&payload, ExpandSelection::ALL);
        assert!(view.is_empty());
    }

    #[test]
    fn selection_excludes_citations() {
        let mut payload = paper("p1", "Root");
        payload.references = Some(vec![stub("r1", "Ref One"), stub("r2", "Ref Two")]);
        payload.citations = Some(vec![stub("c1", "Cite One")]);
        payload.authors = Some(vec![AuthorStub {
            name: "Jane Doe".to_string(),
        }]);

        let mut view = CitationGraphView::new();
        view.insert_node(GraphNode {
            id: "p1".to_string(),
            label: "Root".to_string(),
            tooltip: "Root".to_string(),
            group: NodeGroup::Papers,
        });
        view.expand_from_paper(
            &payload,
            ExpandSelection {
                references: true,
                citations: false,
                authors: true,
            },
        );

        assert_eq!(view.node_count(), 4);
        assert!(view.contains_node("r1"));
        assert!(view.contains_node("r2"));
        assert!(view.contains_node("Jane Doe"));
        assert!(!view.contains_node("c1"));

        let data = view.data_set();
        assert!(data
            .edges
            .iter()
            .any(|e| e.from == "p1" && e.to == "r1" && e.kind == EdgeKind::Reference));
        assert!(data
            .edges
            .iter()
            .any(|e| e.from == "p1" && e.to == "r2" && e.kind == EdgeKind::Reference));
        assert!(data
            .edges
            .iter()
            .any(|e| e.from == "Jane Doe" && e.to == "p1" && e.kind == EdgeKind::Author));
        assert_eq!(data.edges.len(), 3);
    }

    #[test]
    fn citation_edges_point_at_the_paper() {
        let mut payload = paper("p1", "Root");
        payload.citations = Some(vec![stub("c1", "Cite One")]);

        let mut view = CitationGraphView::new();
        view.expand_from_paper(&payload, ExpandSelection::ALL);
        let data = view.data_set();
        assert_eq!(data.edges.len(), 1);
        assert_eq!(data.edges[0].from, "c1");
        assert_eq!(data.edges[0].to, "p1");
        assert_eq!(data.edges[0].kind, EdgeKind::Citation);
    }

    #[test]
    fn repeated_expansion_keeps_nodes_unique_but_doubles_edges() {
        let mut payload = paper("p1", "Root");
        payload.references = Some(vec![stub("r1", "Ref One")]);

        let mut view = CitationGraphView::new();
        view.expand_from_paper(&payload, ExpandSelection::ALL);
        let nodes_once = view.node_count();
        let edges_once = view.edge_count();

        view.expand_from_paper(&payload, ExpandSelection::ALL);
        assert_eq!(view.node_count(), nodes_once);
        assert_eq!(view.edge_count(), edges_once * 2);
    }

    #[test]
    fn shared_reference_across_papers_stays_one_node() {
        let mut first = paper("p1", "First");
        first.references = Some(vec![stub("shared", "Shared Work")]);
        let mut second = paper("p2", "Second");
        second.references = Some(vec![stub("shared", "Shared Work")]);

        let mut view = CitationGraphView::new();
        view.seed_paper(&first);
        view.expand_from_paper(&second, ExpandSelection::ALL);

        assert!(view.contains_node("shared"));
        let data = view.data_set();
        assert_eq!(
            data.nodes.iter().filter(|n| n.id == "shared").count(),
            1,
            "shared reference must resolve to a single node"
        );
        assert_eq!(
            data.edges.iter().filter(|e| e.to == "shared").count(),
            2,
            "both papers keep their edge to it"
        );
    }

    #[test]
    fn existing_node_is_not_overwritten_by_later_fetch() {
        let mut view = CitationGraphView::new();
        let root = paper("p1", "Root");
        view.seed_paper(&root);

        // A later expansion sees p1 as a reference stub; the displayed node
        // must keep its original group and full-title label.
        let mut other = paper("p2", "Other");
        other.references = Some(vec![stub("p1", "Root")]);
        view.expand_from_paper(&other, ExpandSelection::ALL);

        let node = view.node("p1").expect("node present");
        assert_eq!(node.group, NodeGroup::Papers);
        assert_eq!(node.label, "Root");
    }

    #[test]
    fn author_expansion_links_author_to_each_paper() {
        let mut view = CitationGraphView::new();
        view.seed_author(
            "Jane Doe",
            &[stub("x1", "Paper X"), stub("y1", "Paper Y")],
        );

        assert_eq!(view.node_count(), 3);
        let data = view.data_set();
        assert!(data
            .edges
            .iter()
            .any(|e| e.from == "Jane Doe" && e.to == "x1" && e.kind == EdgeKind::Author));
        assert!(data
            .edges
            .iter()
            .any(|e| e.from == "Jane Doe" && e.to == "y1" && e.kind == EdgeKind::Author));
        assert_eq!(data.edges.len(), 2);
    }

    #[test]
    fn author_expansion_alone_adds_only_the_papers() {
        let mut view = CitationGraphView::new();
        view.expand_from_author("Jane Doe", &[stub("x1", "Paper X"), stub("y1", "Paper Y")]);

        // The author node itself comes from seeding, not from expansion.
        assert!(!view.contains_node("Jane Doe"));
        assert_eq!(view.node_count(), 2);
        assert_eq!(view.edge_count(), 2);
    }

    #[test]
    fn stub_without_any_id_is_skipped() {
        let mut payload = paper("p1", "Root");
        payload.references = Some(vec![PaperStub {
            arxiv_id: None,
            id: None,
            paper_id: None,
            title: "Orphan".to_string(),
        }]);

        let mut view = CitationGraphView::new();
        view.expand_from_paper(&payload, ExpandSelection::ALL);
        assert!(view.is_empty());
    }

    #[test]
    fn record_overwrites_previous_expansion() {
        let mut view = CitationGraphView::new();
        view.record_last_expansion(RecordedExpansion::Paper {
            payload: paper("p1", "First"),
        });
        view.record_last_expansion(RecordedExpansion::Author {
            name: "Jane Doe".to_string(),
            papers: vec![stub("x1", "Paper X")],
        });

        match view.last_expansion() {
            Some(RecordedExpansion::Author { name, papers }) => {
                assert_eq!(name, "Jane Doe");
                assert_eq!(papers.len(), 1);
            }
            other => panic!("expected the author record, got {other:?}"),
        }
    }

    #[test]
    fn replay_of_recorded_paper_adds_authors_only() {
        let mut payload = paper("p1", "Root");
        payload.references = Some(vec![stub("r1", "Ref One")]);
        payload.authors = Some(vec![AuthorStub {
            name: "Jane Doe".to_string(),
        }]);

        let mut view = CitationGraphView::new();
        view.record_last_expansion(RecordedExpansion::Paper {
            payload: payload.clone(),
        });
        assert!(view.replay_last());

        assert!(view.contains_node("Jane Doe"));
        assert!(!view.contains_node("r1"));
    }

    #[test]
    fn replay_without_record_is_a_no_op() {
        let mut view = CitationGraphView::new();
        assert!(!view.replay_last());
        assert!(view.is_empty());
    }

    #[test]
    fn data_set_orders_nodes_by_id() {
        let mut view = CitationGraphView::new();
        view.seed_author("Zed", &[stub("b", "B"), stub("a", "A")]);
        let data = view.data_set();
        let ids: Vec<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["Zed", "a", "b"]);
    }
}
