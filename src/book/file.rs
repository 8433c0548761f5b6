//! File collaborators: the line source and sink the codec and synchronizer
//! work against, plus the default per-user book location. Handles are scoped
//! to each operation and every failure maps to `FileUnavailable`, leaving
//! the in-memory book untouched on read paths.

use std::fs::{self, File};
use std::io::Write as _;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

use super::codec;
use super::contacts::AddressBook;
use super::error::BookError;
use super::import::{self, ImportOutcome};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".address-book-manager";
/// Default contact file name stored inside the application data directory.
const BOOK_FILE_NAME: &str = "contacts.txt";

/// Resolve `~/.address-book-manager/contacts.txt`, creating the data
/// directory on demand. The book itself still starts empty; this path only
/// pre-seeds the filename prompt so saves land somewhere sensible.
pub fn default_book_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    let data_dir = base_dirs.home_dir().join(DATA_DIR_NAME);
    fs::create_dir_all(&data_dir).context("failed to create data directory")?;
    Ok(data_dir.join(BOOK_FILE_NAME))
}

/// Write the book to `path` in the 5-line record format, truncating any
/// previous content.
pub fn save_contacts(book: &AddressBook, path: &Path) -> Result<(), BookError> {
    write_text(path, &codec::encode(book))
}

/// Write the human-readable report to `path`, truncating any previous
/// content.
pub fn write_report(book: &AddressBook, path: &Path) -> Result<(), BookError> {
    write_text(path, &codec::report(book))
}

/// Read and decode `path` into a fresh book, preserving file order with no
/// dedup. The caller replaces its book only on success, so a missing or
/// malformed file never costs the current data.
pub fn load_replacing(path: &Path) -> Result<AddressBook, BookError> {
    let text = read_text(path)?;
    Ok(import::replace_all(codec::decode(&text)?))
}

/// Read, decode, and append every non-duplicate record after the existing
/// entries.
pub fn append_from_file(book: &mut AddressBook, path: &Path) -> Result<ImportOutcome, BookError> {
    let text = read_text(path)?;
    let contacts = codec::decode(&text)?;
    Ok(import::append_unique(book, contacts))
}

/// Read, decode, and weave every non-duplicate record into its alphabetical
/// position.
pub fn merge_from_file(book: &mut AddressBook, path: &Path) -> Result<ImportOutcome, BookError> {
    let text = read_text(path)?;
    let contacts = codec::decode(&text)?;
    Ok(import::merge_alphabetical(book, contacts))
}

fn read_text(path: &Path) -> Result<String, BookError> {
    fs::read_to_string(path).map_err(|source| unavailable(path, source))
}

fn write_text(path: &Path, text: &str) -> Result<(), BookError> {
    let file = File::create(path).map_err(|source| unavailable(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .map_err(|source| unavailable(path, source))?;
    writer.flush().map_err(|source| unavailable(path, source))
}

fn unavailable(path: &Path, source: io::Error) -> BookError {
    BookError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;

    #[test]
    fn save_then_load_round_trips_a_contact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.txt");

        let mut book = AddressBook::new();
        book.append(Contact::new("Bob", "Smith", 5551234567, "1 Rd", 30));
        save_contacts(&book, &path).unwrap();

        let reloaded = load_replacing(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(
            reloaded.get(0).unwrap(),
            &Contact::new("Bob", "Smith", 5551234567, "1 Rd", 30)
        );
    }

    #[test]
    fn load_missing_file_reports_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = load_replacing(&path).unwrap_err();
        assert!(matches!(err, BookError::FileUnavailable { .. }));
    }

    #[test]
    fn append_from_missing_file_leaves_book_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let mut book = AddressBook::new();
        book.append(Contact::new("Bob", "Smith", 5551234567, "1 Rd", 30));

        let err = append_from_file(&mut book, &path).unwrap_err();
        assert!(matches!(err, BookError::FileUnavailable { .. }));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn merge_from_file_dedups_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("incoming.txt");

        let mut incoming = AddressBook::new();
        incoming.append(Contact::new("Zoe", "Young", 1112223333, "3 St", 25));
        incoming.append(Contact::new("Bob", "Smith", 4445556666, "4 St", 35));
        save_contacts(&incoming, &path).unwrap();

        let mut book = AddressBook::new();
        book.append(Contact::new("Bob", "Smith", 5551234567, "1 Rd", 30));

        let outcome = merge_from_file(&mut book, &path).unwrap();
        assert_eq!(outcome, ImportOutcome { added: 1, skipped: 1 });
        // The pre-existing Bob Smith keeps his original fields.
        assert_eq!(book.get(0).unwrap().phone, 5551234567);
        assert_eq!(book.get(1).unwrap().family_name, "Young");
    }

    #[test]
    fn malformed_file_aborts_import_with_no_partial_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, "Amy\nAdams\n5 Ave\n1234567890\n22\nBob\nSmith\n").unwrap();

        let mut book = AddressBook::new();
        let err = append_from_file(&mut book, &path).unwrap_err();
        assert!(matches!(err, BookError::MalformedInput { .. }));
        assert!(book.is_empty());
    }
}
