//! Page State
//!
//! Plain state types driving the views. No DOM access in here.

mod carousel;
mod filter;
mod recent;
mod request;

pub use carousel::{AutoAdvance, Carousel, SlidePosition};
pub use filter::{filter_logs, log_class, materials_of_kind, Filterable, SubjectFilter, VisibleWindow, YearFilter};
pub use recent::RecentViews;
pub use request::RequestSeq;
