//! Collection, codec, and file-synchronization core, split across logical
//! submodules.

mod codec;
mod contacts;
mod error;
mod file;
mod import;

pub use codec::{decode, encode, report};
pub use contacts::{AddressBook, ContactEdit};
pub use error::BookError;
pub use file::{
    append_from_file, default_book_path, load_replacing, merge_from_file, save_contacts,
    write_report,
};
pub use import::{append_unique, merge_alphabetical, replace_all, ImportOutcome};
