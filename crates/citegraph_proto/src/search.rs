//! Rows returned by the search and listing endpoints.

use serde::{Deserialize, Serialize};

use crate::detail::AuthorStub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Paper,
    Author,
}

/// One autocomplete or popular-query row. Paper rows from the co-authorship
/// index also carry the paper's author list so a selection can focus the
/// matching author nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<AuthorStub>,
}

impl SearchEntry {
    /// The value passed to the detail endpoint for this entry.
    pub fn query_value(&self) -> &str {
        self.id.as_deref().unwrap_or(self.name.as_str())
    }
}

/// Category filter option from `/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub value: String,
}

/// Row of the `/author_papers` listing on the co-authorship view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoauthorPaper {
    pub title: String,
    pub url: String,
}
