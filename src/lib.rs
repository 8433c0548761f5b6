//! Core library surface for the Address Book Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces: the contact model, the collection/persistence core, and the
//! interactive front-end.
pub mod book;
pub mod models;
pub mod ui;

/// Convenience re-exports for the collection and persistence core.
pub use book::{AddressBook, BookError};

/// The domain type every layer manipulates.
pub use models::Contact;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
