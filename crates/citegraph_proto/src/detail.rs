//! Detail payloads returned by the paper and author endpoints.

use serde::{Deserialize, Serialize};

/// Full paper record returned by `/get_paper`.
///
/// The relation arrays are optional on the wire: an absent or `null` field
/// means the backend had no relation data of that kind, which is distinct
/// from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDetail {
    pub id: String,
    pub title: String,
    #[serde(default, rename = "paperId", skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<AuthorStub>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<PaperStub>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<PaperStub>>,
}

/// Abbreviated paper reference used inside relation arrays and author
/// listings. Which id field is populated depends on the upstream source:
/// arXiv papers carry `arxivId` (or `_id` in author listings), papers known
/// only to the citation index carry `paperId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperStub {
    #[serde(default, rename = "arxivId", skip_serializing_if = "Option::is_none")]
    pub arxiv_id: Option<String>,
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "paperId", skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,
    pub title: String,
}

impl PaperStub {
    /// The identifier used to key this paper's graph node. Prefers the arXiv
    /// id, then the listing id, then the citation-index id.
    pub fn external_id(&self) -> Option<&str> {
        self.arxiv_id
            .as_deref()
            .or(self.id.as_deref())
            .or(self.paper_id.as_deref())
    }

    /// Outbound link for this paper, if any id is usable.
    pub fn external_url(&self) -> Option<String> {
        paper_url(
            self.arxiv_id.as_deref().or(self.id.as_deref()),
            self.paper_id.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStub {
    pub name: String,
}

pub fn paper_url(arxiv_id: Option<&str>, paper_id: Option<&str>) -> Option<String> {
    if let Some(arxiv_id) = arxiv_id {
        return Some(format!("https://www.arxiv.org/abs/{arxiv_id}"));
    }
    paper_id.map(|paper_id| format!("https://www.semanticscholar.org/paper/{paper_id}"))
}

pub fn author_search_url(name: &str) -> String {
    format!("https://arxiv.org/search/?searchtype=author&query={name}")
}
