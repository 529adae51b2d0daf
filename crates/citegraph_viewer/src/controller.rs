//! Event-driven controller for the citation-network view.

use citegraph::{
    CitationGraphView, DiscoveryApi, ExpandSelection, GraphRenderer, NodeGroup, RecordedExpansion,
};
use citegraph_proto::{SearchEntry, SearchKind};

use crate::panels::{AuthorPanel, PaperPanel};

/// User interactions the view reacts to, in the order the page wires them:
/// search selection draws a fresh graph, double-click expands in place,
/// selection fills the detail panel, a focus link replays the recorded
/// expansion and jumps to the target node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchSelected(SearchEntry),
    NodeDoubleClicked { id: String, group: NodeGroup },
    NodeSelected { id: String, group: NodeGroup },
    FocusLink { target: String },
    Redraw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelUpdate {
    Paper(PaperPanel),
    Author(AuthorPanel),
}

/// Owns the view state, the API client, and the renderer handle. All
/// mutation flows through [`CitationController::handle`]; fetch failures
/// leave both the view and the renderer untouched.
pub struct CitationController<A, R> {
    view: CitationGraphView,
    api: A,
    renderer: R,
}

impl<A: DiscoveryApi, R: GraphRenderer> CitationController<A, R> {
    pub fn new(api: A, renderer: R) -> Self {
        Self {
            view: CitationGraphView::new(),
            api,
            renderer,
        }
    }

    pub fn view(&self) -> &CitationGraphView {
        &self.view
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Autocomplete rows for the search box; a failed fetch shows nothing.
    pub fn suggestions(&self, phrase: &str) -> Vec<SearchEntry> {
        self.api.autocomplete(phrase).unwrap_or_default()
    }

    /// Entries for the popular-queries sidebar.
    pub fn popular_queries(&self) -> Vec<SearchEntry> {
        self.api.popular_queries().unwrap_or_default()
    }

    pub fn handle(&mut self, event: UiEvent) -> Option<PanelUpdate> {
        match event {
            UiEvent::SearchSelected(entry) => {
                self.draw_from_search(&entry);
                None
            }
            UiEvent::NodeDoubleClicked { id, group } => {
                self.expand_node(&id, group);
                None
            }
            UiEvent::NodeSelected { id, group } => self.describe_node(&id, group),
            UiEvent::FocusLink { target } => {
                if self.view.replay_last() {
                    self.view.apply_to(&mut self.renderer);
                    self.renderer.focus_node(&target);
                    self.renderer.select_nodes(std::slice::from_ref(&target));
                }
                None
            }
            UiEvent::Redraw => {
                self.view.apply_to(&mut self.renderer);
                None
            }
        }
    }

    /// A search selection replaces the whole graph with the fetched
    /// entity's star.
    fn draw_from_search(&mut self, entry: &SearchEntry) {
        match entry.kind {
            SearchKind::Paper => {
                let Ok(payload) = self.api.get_paper(entry.query_value()) else {
                    return;
                };
                self.view = CitationGraphView::new();
                self.view.seed_paper(&payload);
            }
            SearchKind::Author => {
                let Ok(papers) = self.api.get_author(&entry.name) else {
                    return;
                };
                self.view = CitationGraphView::new();
                self.view.seed_author(&entry.name, &papers);
            }
        }
        self.view.apply_to(&mut self.renderer);
    }

    fn expand_node(&mut self, id: &str, group: NodeGroup) {
        match group {
            NodeGroup::Authors => {
                let Ok(papers) = self.api.get_author(id) else {
                    return;
                };
                self.view.expand_from_author(id, &papers);
            }
            _ => {
                let Ok(payload) = self.api.get_paper(id) else {
                    return;
                };
                self.view.expand_from_paper(&payload, ExpandSelection::ALL);
            }
        }
        self.view.apply_to(&mut self.renderer);
    }

    /// Fill the detail panel and remember the payload so a later focus link
    /// can re-expand without another fetch.
    fn describe_node(&mut self, id: &str, group: NodeGroup) -> Option<PanelUpdate> {
        match group {
            NodeGroup::Authors => {
                let papers = self.api.get_author(id).ok()?;
                let panel = AuthorPanel::new(id, &papers);
                self.view.record_last_expansion(RecordedExpansion::Author {
                    name: id.to_string(),
                    papers,
                });
                Some(PanelUpdate::Author(panel))
            }
            _ => {
                let payload = self.api.get_paper(id).ok()?;
                let panel = PaperPanel::from_detail(&payload);
                self.view
                    .record_last_expansion(RecordedExpansion::Paper { payload });
                Some(PanelUpdate::Paper(panel))
            }
        }
    }
}
