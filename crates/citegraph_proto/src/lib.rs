pub mod detail;
pub mod network;
pub mod search;

pub use detail::{author_search_url, paper_url, AuthorStub, PaperDetail, PaperStub};
pub use network::{NetworkData, NetworkEdge, NetworkNode};
pub use search::{Category, CoauthorPaper, SearchEntry, SearchKind};
