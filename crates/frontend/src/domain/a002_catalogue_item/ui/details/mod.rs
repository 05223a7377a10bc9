//! Catalogue item add/edit form
//!
//! - view_model.rs: form fields, parsing and validation
//! - view.rs: dialog rendering the form

mod view;
mod view_model;

pub use view::CatalogueItemForm;
pub use view_model::{CatalogueItemFormInput, CatalogueItemFormVm};
