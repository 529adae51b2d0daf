pub mod controller;
pub mod network_controller;
pub mod panels;
pub mod welcome;

pub use controller::{CitationController, PanelUpdate, UiEvent};
pub use network_controller::{NetworkController, NetworkEvent, NetworkOutcome};
pub use panels::{
    AuthorPanel, PanelLink, PaperPanel, NO_AUTHORS_TEXT, NO_CITATIONS_TEXT, NO_REFERENCES_TEXT,
};
pub use welcome::{
    cookie_value, dismiss_welcome_cookie, welcome_dismissed, WELCOME_COOKIE_MAX_AGE_DAYS,
    WELCOME_COOKIE_NAME, WELCOME_COOKIE_VALUE,
};
