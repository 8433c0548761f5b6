//! The ordered contact collection. Contacts are owned values in a growable
//! vector, 0-based and index-addressable; the count is the vector's length.
//! Duplicate names are allowed through direct insertion, only the file-import
//! strategies consult the duplicate probe.

use crate::models::Contact;

use super::error::BookError;

/// Replacement value for exactly one field of one contact. Applying an edit
/// never touches the other four fields and performs no domain validation on
/// phone or age, unlike the interactive creation form. That asymmetry is
/// inherited behavior, kept on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEdit {
    FirstName(String),
    FamilyName(String),
    Address(String),
    Phone(i64),
    Age(i64),
}

/// The address book: an ordered sequence of owned contacts.
#[derive(Debug, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// A fresh, empty book. The interactive session starts from this.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from already-decoded contacts, preserving their order.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Borrow the entry at `index`. The borrow must not be retained across a
    /// mutating call; the borrow checker enforces that.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Add `contact` at the end. Duplicates are not rejected here; direct
    /// entry trusts the user.
    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Insert `contact` at the first position whose `(family, first)` pair
    /// the new pair lexicographically precedes, appending when no such
    /// position exists. Returns the index used. This keeps an
    /// already-sorted book sorted; it does not re-sort unsorted content.
    pub fn insert_alphabetical(&mut self, contact: Contact) -> usize {
        let position = self
            .contacts
            .iter()
            .position(|existing| contact.sort_key() < existing.sort_key())
            .unwrap_or(self.contacts.len());
        self.contacts.insert(position, contact);
        position
    }

    /// Remove and return the entry at `index`, shifting later entries left.
    /// Fails without mutation when `index` is out of range; removing the
    /// last entry leaves a valid empty book.
    pub fn remove_at(&mut self, index: usize) -> Result<Contact, BookError> {
        if index >= self.contacts.len() {
            return Err(BookError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(self.contacts.remove(index))
    }

    /// Remove and return the first entry whose names both match exactly
    /// (case-sensitive, full string). At most one entry is removed per call
    /// even when duplicates exist.
    pub fn remove_by_full_name(
        &mut self,
        first_name: &str,
        family_name: &str,
    ) -> Result<Contact, BookError> {
        let position = self
            .contacts
            .iter()
            .position(|contact| contact.name_matches(first_name, family_name))
            .ok_or_else(|| BookError::NotFound {
                first: first_name.to_string(),
                family: family_name.to_string(),
            })?;
        Ok(self.contacts.remove(position))
    }

    /// Whether some entry already carries this exact name pair. Consulted by
    /// the file-import strategies only.
    pub fn contains_name(&self, first_name: &str, family_name: &str) -> bool {
        self.contacts
            .iter()
            .any(|contact| contact.name_matches(first_name, family_name))
    }

    /// Replace exactly the field named by `edit` on the entry at `index`.
    pub fn edit_at(&mut self, index: usize, edit: ContactEdit) -> Result<(), BookError> {
        let len = self.contacts.len();
        let contact = self
            .contacts
            .get_mut(index)
            .ok_or(BookError::IndexOutOfRange { index, len })?;

        match edit {
            ContactEdit::FirstName(value) => contact.first_name = value,
            ContactEdit::FamilyName(value) => contact.family_name = value,
            ContactEdit::Address(value) => contact.address = value,
            ContactEdit::Phone(value) => contact.phone = value,
            ContactEdit::Age(value) => contact.age = value,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, family: &str) -> Contact {
        Contact::new(first, family, 5551234567, "1 Test Rd", 30)
    }

    fn is_sorted(book: &AddressBook) -> bool {
        let keys: Vec<_> = book.iter().map(Contact::sort_key).collect();
        keys.windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[test]
    fn append_then_drain_from_front() {
        let mut book = AddressBook::new();
        for i in 0..5 {
            book.append(contact(&format!("First{i}"), "Family"));
        }
        assert_eq!(book.len(), 5);

        for _ in 0..5 {
            book.remove_at(0).unwrap();
        }
        assert_eq!(book.len(), 0);
        assert!(book.is_empty());
    }

    #[test]
    fn append_allows_duplicate_names() {
        let mut book = AddressBook::new();
        book.append(contact("Bob", "Smith"));
        book.append(contact("Bob", "Smith"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn insert_alphabetical_keeps_sorted_order() {
        let mut book = AddressBook::new();
        book.insert_alphabetical(contact("Amy", "Adams"));
        book.insert_alphabetical(contact("Zoe", "Young"));
        book.insert_alphabetical(contact("Bob", "Smith"));
        assert!(is_sorted(&book));
        assert_eq!(book.get(1).unwrap().family_name, "Smith");
    }

    #[test]
    fn insert_alphabetical_breaks_family_ties_by_first_name() {
        let mut book = AddressBook::new();
        book.insert_alphabetical(contact("Zara", "Smith"));
        let position = book.insert_alphabetical(contact("Adam", "Smith"));
        assert_eq!(position, 0);
        assert!(is_sorted(&book));
    }

    #[test]
    fn insert_alphabetical_handles_empty_names() {
        let mut book = AddressBook::new();
        book.insert_alphabetical(contact("Amy", "Adams"));
        let position = book.insert_alphabetical(contact("", ""));
        assert_eq!(position, 0);
        assert!(is_sorted(&book));

        let end = book.insert_alphabetical(contact("Zoe", "Young"));
        assert_eq!(end, 2);
        assert!(is_sorted(&book));
    }

    #[test]
    fn insert_after_equal_key_goes_after_existing() {
        let mut book = AddressBook::new();
        book.insert_alphabetical(contact("Bob", "Smith"));
        let position = book.insert_alphabetical(contact("Bob", "Smith"));
        assert_eq!(position, 1);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn remove_at_one_past_last_fails_without_mutation() {
        let mut book = AddressBook::new();
        book.append(contact("Bob", "Smith"));

        let err = book.remove_at(1).unwrap_err();
        assert!(matches!(
            err,
            BookError::IndexOutOfRange { index: 1, len: 1 }
        ));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn remove_at_last_entry_leaves_valid_empty_book() {
        let mut book = AddressBook::new();
        book.append(contact("Bob", "Smith"));
        book.remove_at(0).unwrap();
        assert!(book.is_empty());

        // The emptied book stays usable.
        book.append(contact("Amy", "Adams"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn remove_by_full_name_takes_first_of_duplicates() {
        let mut book = AddressBook::new();
        let mut earlier = contact("Bob", "Smith");
        earlier.address = "First St".to_string();
        let mut later = contact("Bob", "Smith");
        later.address = "Second St".to_string();
        book.append(earlier);
        book.append(later);

        let removed = book.remove_by_full_name("Bob", "Smith").unwrap();
        assert_eq!(removed.address, "First St");
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(0).unwrap().address, "Second St");
    }

    #[test]
    fn remove_by_full_name_is_case_sensitive() {
        let mut book = AddressBook::new();
        book.append(contact("Bob", "Smith"));

        let err = book.remove_by_full_name("bob", "smith").unwrap_err();
        assert!(matches!(err, BookError::NotFound { .. }));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn edit_at_replaces_only_the_named_field() {
        let mut book = AddressBook::new();
        book.append(contact("Bob", "Smith"));

        book.edit_at(0, ContactEdit::Address("9 New Rd".to_string()))
            .unwrap();

        let edited = book.get(0).unwrap();
        assert_eq!(edited.address, "9 New Rd");
        assert_eq!(edited.first_name, "Bob");
        assert_eq!(edited.phone, 5551234567);
    }

    #[test]
    fn edit_at_accepts_out_of_domain_numbers() {
        let mut book = AddressBook::new();
        book.append(contact("Bob", "Smith"));

        book.edit_at(0, ContactEdit::Phone(123)).unwrap();
        book.edit_at(0, ContactEdit::Age(999)).unwrap();

        let edited = book.get(0).unwrap();
        assert_eq!(edited.phone, 123);
        assert_eq!(edited.age, 999);
    }

    #[test]
    fn edit_at_out_of_range_reports_index() {
        let mut book = AddressBook::new();
        let err = book
            .edit_at(0, ContactEdit::Age(40))
            .unwrap_err();
        assert!(matches!(
            err,
            BookError::IndexOutOfRange { index: 0, len: 0 }
        ));
    }
}
