mod error;
pub mod store;
pub mod theme;

pub use error::*;
pub use store::{KeyValueStore, MemoryStore, Scoped, SharedStore};

/// Storage key of the persisted theme choice.
pub const THEME_KEY: &str = "portfolio-theme";

/// Storage key of the contact form draft.
pub const FORM_DRAFT_KEY: &str = "portfolio-form-draft";
