//! View state for the citation and co-authorship graph visualizations.

mod citation;
mod coauthor;
mod types;

pub use citation::{CitationGraphView, ExpandSelection, RecordedExpansion};
pub use coauthor::{CoauthorNetworkView, SelectionError};
pub use types::{EdgeKind, GraphData, GraphEdge, GraphNode, GraphRenderer, NodeGroup};
