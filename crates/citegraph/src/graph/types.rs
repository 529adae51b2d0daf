use serde::{Deserialize, Serialize};

/// Paper-stub labels are cut to this many characters before the ellipsis.
pub(crate) const STUB_LABEL_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    Papers,
    References,
    Citations,
    Authors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Reference,
    Citation,
    Author,
    Coauthor,
}

/// Displayed vertex. Identity is the id; the renderer maps `group` to the
/// icon and color it draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "title")]
    pub tooltip: String,
    pub group: NodeGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub arrow: bool,
    pub kind: EdgeKind,
}

/// Node and edge collections in the form the rendering library consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Handle onto the external rendering library. Layout and drawing live on
/// the other side of this seam; pushing a data set is the only redraw
/// trigger.
pub trait GraphRenderer {
    fn set_data(&mut self, data: GraphData);
    fn focus_node(&mut self, id: &str);
    fn select_nodes(&mut self, ids: &[String]);
}

/// Label form used for related-paper nodes: the title cut to a fixed prefix
/// with a trailing ellipsis, as the site has always rendered them.
pub(crate) fn stub_label(title: &str) -> String {
    let prefix: String = title.chars().take(STUB_LABEL_CHARS).collect();
    format!("{prefix}...")
}
