//! UI Components
//!
//! Reusable Leptos components.

mod carousel;
mod delete_confirm_button;
mod filter_bar;
mod profile_modal;
mod recent_list;
mod status_message;
mod subject_cards;
mod tab_bar;

pub use carousel::CourseCarousel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use profile_modal::{ProfileBadge, ProfileModal};
pub use recent_list::RecentList;
pub use status_message::{LoadState, NoticeBanner, StatusMessage};
pub use subject_cards::SubjectCards;
pub use tab_bar::{Tab, TabBar};
