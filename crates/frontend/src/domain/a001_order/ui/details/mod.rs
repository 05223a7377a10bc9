//! Order Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, status update)
//! - view_model.rs: ViewModel with commands and state management
//! - page.rs: routed page hosting the header
//! - header.rs / status_section.rs: presentational components

mod header;
mod model;
mod page;
mod status_section;
mod view_model;

pub use header::OrderDetailsHeader;
pub use page::OrderDetailsPage;
pub use status_section::OrderStatusSection;
pub use view_model::OrderDetailsViewModel;
