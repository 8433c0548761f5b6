//! Binary entry point that glues the flat-file contact store to the TUI: the
//! book starts empty, the default save location is resolved up front, and
//! the Ratatui event loop runs until the user exits.
use address_book_manager::book::default_book_path;
use address_book_manager::{run_app, AddressBook, App};

/// Resolve the default book path, build the empty session state, and launch
/// the Ratatui event loop.
///
/// A missing home directory only costs the pre-seeded filename suggestion;
/// every file operation still accepts an explicit path.
fn main() -> anyhow::Result<()> {
    let default_path = default_book_path().ok();

    let mut app = App::new(AddressBook::new(), default_path);
    run_app(&mut app)
}
