//! Tax details UI Module
//!
//! MVVM pattern implementation:
//! - model.rs: catalog loading and the submission sink
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::{ConsoleSubmissionSink, SubmissionSink};
pub use view::TaxDetails;
pub use view_model::TaxDetailsViewModel;
