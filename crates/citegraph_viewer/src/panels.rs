//! View models for the node-detail side panel.

use citegraph_proto::{author_search_url, paper_url, AuthorStub, PaperDetail, PaperStub};

pub const NO_REFERENCES_TEXT: &str = "No references found";
pub const NO_CITATIONS_TEXT: &str = "No citations found";
pub const NO_AUTHORS_TEXT: &str = "No authors found";

/// One row of a panel section: display text, outbound link, and the graph
/// node a focus click should jump to. Rows without a resolvable id carry no
/// focus target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLink {
    pub label: String,
    pub url: Option<String>,
    pub focus_target: Option<String>,
}

impl PanelLink {
    fn from_stub(stub: &PaperStub) -> Self {
        Self {
            label: stub.title.clone(),
            url: stub.external_url(),
            focus_target: stub.external_id().map(str::to_string),
        }
    }

    fn from_author(author: &AuthorStub) -> Self {
        Self {
            label: author.name.clone(),
            url: Some(author_search_url(&author.name)),
            focus_target: Some(author.name.clone()),
        }
    }
}

/// Detail panel for a selected paper node. A `None` section means the
/// backend had no relation data at all and the panel shows the
/// corresponding fallback text; an empty list renders as an empty section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperPanel {
    pub title: String,
    pub url: Option<String>,
    pub references: Option<Vec<PanelLink>>,
    pub citations: Option<Vec<PanelLink>>,
    pub authors: Option<Vec<PanelLink>>,
}

impl PaperPanel {
    pub fn from_detail(payload: &PaperDetail) -> Self {
        Self {
            title: payload.title.clone(),
            url: paper_url(Some(payload.id.as_str()), payload.paper_id.as_deref()),
            references: payload
                .references
                .as_ref()
                .map(|stubs| stubs.iter().map(PanelLink::from_stub).collect()),
            citations: payload
                .citations
                .as_ref()
                .map(|stubs| stubs.iter().map(PanelLink::from_stub).collect()),
            authors: payload
                .authors
                .as_ref()
                .map(|authors| authors.iter().map(PanelLink::from_author).collect()),
        }
    }
}

/// Detail panel for a selected author node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorPanel {
    pub name: String,
    pub url: String,
    pub papers: Vec<PanelLink>,
}

impl AuthorPanel {
    pub fn new(name: &str, papers: &[PaperStub]) -> Self {
        Self {
            name: name.to_string(),
            url: author_search_url(name),
            papers: papers.iter().map(PanelLink::from_stub).collect(),
        }
    }
}
