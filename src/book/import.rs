//! The three file-import strategies, operating on already-decoded contacts
//! so the collection logic stays independent of any I/O. The file
//! collaborators in `file.rs` pair them with the codec.

use crate::models::Contact;

use super::contacts::AddressBook;

/// What an append or merge actually did, so the caller can report it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Records woven into the book.
    pub added: usize,
    /// Records discarded because their exact name pair was already present.
    pub skipped: usize,
}

/// Discard the previous book entirely and build a fresh one from `contacts`
/// in their given order, with no deduplication. The caller drops the old
/// book by overwriting its binding.
pub fn replace_all(contacts: Vec<Contact>) -> AddressBook {
    AddressBook::from_contacts(contacts)
}

/// Append each record whose `(first, family)` pair is not already present,
/// in file order, after the existing entries. The duplicate probe runs
/// against the growing book, so a file that repeats a name keeps only its
/// first occurrence.
pub fn append_unique(book: &mut AddressBook, contacts: Vec<Contact>) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for contact in contacts {
        if book.contains_name(&contact.first_name, &contact.family_name) {
            outcome.skipped += 1;
        } else {
            book.append(contact);
            outcome.added += 1;
        }
    }
    outcome
}

/// Weave each non-duplicate record into its alphabetical position. Same
/// dedup rule as `append_unique`, against the growing book.
pub fn merge_alphabetical(book: &mut AddressBook, contacts: Vec<Contact>) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for contact in contacts {
        if book.contains_name(&contact.first_name, &contact.family_name) {
            outcome.skipped += 1;
        } else {
            book.insert_alphabetical(contact);
            outcome.added += 1;
        }
    }
    outcome
}
