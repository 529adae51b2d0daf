pub mod client;
pub mod config;
pub mod graph;

pub use client::{ApiError, DiscoveryApi, HttpDiscoveryClient};
pub use config::{
    ConfigError, SiteConfig, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE_NAME, DEFAULT_TIMEOUT_MS,
    ENV_BASE_URL, ENV_TIMEOUT_MS,
};
pub use graph::{
    CitationGraphView, CoauthorNetworkView, EdgeKind, ExpandSelection, GraphData, GraphEdge,
    GraphNode, GraphRenderer, NodeGroup, RecordedExpansion, SelectionError,
};
