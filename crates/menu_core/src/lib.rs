//! Item-management core for the menu catalog editor: the draft form state
//! machine, its validation rules, and the append-only catalog.

pub mod catalog;
pub mod draft;
pub mod ids;
pub mod session;

pub use catalog::CatalogStore;
pub use draft::{DraftController, DraftField, DraftState, DraftView};
pub use ids::{IdSource, SequentialIds};
pub use session::{Command, MenuSession, SubmitOutcome};
