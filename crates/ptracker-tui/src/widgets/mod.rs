//! Dashboard widgets

mod candidate_profile;
mod citation_carousel;
mod labels;
pub mod modal_overlay;
mod navbar;
mod notice;
mod pages;
mod placeholder;
mod politicians;
mod promise_card;
mod promise_popup;
mod promise_table;
mod text;

pub use candidate_profile::{CandidateProfile, NO_CANDIDATES_TEXT};
pub use citation_carousel::CitationCarouselView;
pub use labels::{CategoryLabels, StatusLabel};
pub use navbar::Navbar;
pub use notice::NoticeDialog;
pub use pages::{LoginPage, TextPage, LOGIN_HEADLINE};
pub use placeholder::{Placeholder, LOADING_TEXT, NO_DATA_TEXT};
pub use politicians::PoliticiansPage;
pub use promise_card::PromiseCard;
pub use promise_popup::{hint_line, PromisePopup, NO_ACTIONS_TEXT};
pub use promise_table::PromiseTable;
pub use text::truncate;
