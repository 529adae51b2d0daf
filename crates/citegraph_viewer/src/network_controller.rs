//! Event-driven controller for the co-authorship network view.

use citegraph::{CoauthorNetworkView, DiscoveryApi, GraphRenderer};
use citegraph_proto::{CoauthorPaper, NetworkData, SearchEntry, SearchKind};

pub const ALERT_NO_AUTHOR_MATCH: &str = "Author/s not found";
pub const ALERT_SELECT_TO_FOCUS: &str = "Please select a node to focus on";
pub const ALERT_SELECT_TO_EXPAND: &str = "Please select a node to expand its neighbors";

// Covered by dedicated views of their own, so the dropdown leaves them out.
const HIDDEN_CATEGORIES: [&str; 2] = ["cs.CV", "cs.CL"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    SearchSelected(SearchEntry),
    NodesSelected(Vec<String>),
    FocusClicked,
    ExpandClicked,
    CategorySelected(Option<String>),
    ResetClicked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkOutcome {
    /// The visible graph changed and was pushed to the renderer.
    Updated,
    /// Paper listing for the selected author(s).
    Listing {
        author: String,
        papers: Vec<CoauthorPaper>,
    },
    /// Informational message for an invalid local action.
    Alert(&'static str),
    /// Nothing to do (empty selection, failed fetch).
    Ignored,
}

/// Owns the preloaded co-authorship view, the API client, the renderer
/// handle, and the current node selection.
pub struct NetworkController<A, R> {
    view: CoauthorNetworkView,
    api: A,
    renderer: R,
    selection: Vec<String>,
}

impl<A: DiscoveryApi, R: GraphRenderer> NetworkController<A, R> {
    pub fn new(data: NetworkData, api: A, renderer: R) -> Self {
        Self {
            view: CoauthorNetworkView::new(data),
            api,
            renderer,
            selection: Vec::new(),
        }
    }

    pub fn view(&self) -> &CoauthorNetworkView {
        &self.view
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Options for the category dropdown; a failed fetch shows an empty
    /// dropdown.
    pub fn category_options(&self) -> Vec<citegraph_proto::Category> {
        let mut options = self.api.categories().unwrap_or_default();
        options.retain(|option| !HIDDEN_CATEGORIES.contains(&option.key.as_str()));
        options
    }

    pub fn handle(&mut self, event: NetworkEvent) -> NetworkOutcome {
        match event {
            NetworkEvent::SearchSelected(entry) => self.focus_search(&entry),
            NetworkEvent::NodesSelected(ids) => self.list_selected(ids),
            NetworkEvent::FocusClicked => {
                match self.view.show_selection_neighborhood(&self.selection) {
                    Ok(()) => self.push_visible(),
                    Err(_) => NetworkOutcome::Alert(ALERT_SELECT_TO_FOCUS),
                }
            }
            NetworkEvent::ExpandClicked => match self.view.expand_selection(&self.selection) {
                Ok(()) => self.push_visible(),
                Err(_) => NetworkOutcome::Alert(ALERT_SELECT_TO_EXPAND),
            },
            NetworkEvent::CategorySelected(key) => {
                self.view.filter_by_field(key.as_deref());
                self.push_visible()
            }
            NetworkEvent::ResetClicked => {
                self.view.reset();
                self.push_visible()
            }
        }
    }

    /// An autocomplete pick focuses the author node; a paper pick focuses
    /// all of the paper's authors that exist in the graph.
    fn focus_search(&mut self, entry: &SearchEntry) -> NetworkOutcome {
        let names: Vec<String> = match entry.kind {
            SearchKind::Author => vec![entry.name.clone()],
            SearchKind::Paper => entry.authors.iter().map(|a| a.name.clone()).collect(),
        };
        match self.view.match_authors(&names) {
            Ok(matched) => {
                self.renderer.focus_node(&matched[0]);
                self.renderer.select_nodes(&matched);
                self.selection = matched;
                NetworkOutcome::Updated
            }
            Err(_) => NetworkOutcome::Alert(ALERT_NO_AUTHOR_MATCH),
        }
    }

    fn list_selected(&mut self, ids: Vec<String>) -> NetworkOutcome {
        let Some(first) = ids.first().cloned() else {
            self.selection.clear();
            return NetworkOutcome::Ignored;
        };
        self.selection = ids;
        match self.api.coauthor_papers(&self.selection) {
            Ok(papers) => NetworkOutcome::Listing {
                author: first,
                papers,
            },
            Err(_) => NetworkOutcome::Ignored,
        }
    }

    fn push_visible(&mut self) -> NetworkOutcome {
        self.renderer.set_data(self.view.visible_data());
        NetworkOutcome::Updated
    }
}
