use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::book::ContactEdit;
use crate::models::Contact;

/// Validation attempts granted to each numeric field before its value falls
/// back to the sentinel `0`.
pub(crate) const MAX_FIELD_ATTEMPTS: u8 = 5;

/// Fields of the contact form, in focus-cycle order.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum ContactField {
    FirstName,
    FamilyName,
    Address,
    Phone,
    Age,
}

impl Default for ContactField {
    fn default() -> Self {
        ContactField::FirstName
    }
}

impl ContactField {
    pub(crate) const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::FamilyName,
        ContactField::Address,
        ContactField::Phone,
        ContactField::Age,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First name",
            ContactField::FamilyName => "Family name",
            ContactField::Address => "Address",
            ContactField::Phone => "Phone",
            ContactField::Age => "Age",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            ContactField::FirstName | ContactField::FamilyName | ContactField::Address => {
                "<may be empty>"
            }
            ContactField::Phone => "<10 digits>",
            ContactField::Age => "<1-150>",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, ContactField::Phone | ContactField::Age)
    }

    fn next(self) -> Self {
        match self {
            ContactField::FirstName => ContactField::FamilyName,
            ContactField::FamilyName => ContactField::Address,
            ContactField::Address => ContactField::Phone,
            ContactField::Phone => ContactField::Age,
            ContactField::Age => ContactField::FirstName,
        }
    }

    fn previous(self) -> Self {
        match self {
            ContactField::FirstName => ContactField::Age,
            ContactField::FamilyName => ContactField::FirstName,
            ContactField::Address => ContactField::FamilyName,
            ContactField::Phone => ContactField::Address,
            ContactField::Age => ContactField::Phone,
        }
    }
}

/// A completed, validated submission. The fallback flags record whether a
/// numeric field exhausted its attempts and was coerced to the sentinel, so
/// the caller can say so instead of substituting silently.
pub(crate) struct ContactDraft {
    pub(crate) contact: Contact,
    pub(crate) phone_fell_back: bool,
    pub(crate) age_fell_back: bool,
}

impl ContactDraft {
    /// Human wording for any sentinel fallback that happened, or `None` when
    /// both fields validated.
    pub(crate) fn fallback_note(&self) -> Option<String> {
        match (self.phone_fell_back, self.age_fell_back) {
            (true, true) => Some(format!(
                "Phone and age fell back to 0 after {MAX_FIELD_ATTEMPTS} invalid attempts."
            )),
            (true, false) => Some(format!(
                "Phone fell back to 0 after {MAX_FIELD_ATTEMPTS} invalid attempts."
            )),
            (false, true) => Some(format!(
                "Age fell back to 0 after {MAX_FIELD_ATTEMPTS} invalid attempts."
            )),
            (false, false) => None,
        }
    }
}

/// Form state for entering or editing a contact. Creation goes through
/// `parse_validated` (domain checks with the capped retry budget); editing
/// goes through `parse_unchecked`, which accepts any integer for phone and
/// age. The asymmetry mirrors the store's validated-entry-only policy.
#[derive(Default, Clone)]
pub(crate) struct ContactForm {
    pub(crate) first_name: String,
    pub(crate) family_name: String,
    pub(crate) address: String,
    pub(crate) phone: String,
    pub(crate) age: String,
    pub(crate) active: ContactField,
    pub(crate) error: Option<String>,
    phone_attempts: u8,
    age_attempts: u8,
}

impl ContactForm {
    /// Populate the form from an existing contact when entering edit mode.
    pub(crate) fn from_contact(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            family_name: contact.family_name.clone(),
            address: contact.address.clone(),
            phone: contact.phone.to_string(),
            age: contact.age.to_string(),
            ..Self::default()
        }
    }

    /// Cycle focus to the next field.
    pub(crate) fn next_field(&mut self) {
        self.active = self.active.next();
    }

    /// Cycle focus to the previous field.
    pub(crate) fn previous_field(&mut self) {
        self.active = self.active.previous();
    }

    /// Append a character to the active field. Numeric fields take ASCII
    /// digits only, text fields take any printing character.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        let accepted = if self.active.is_numeric() {
            ch.is_ascii_digit()
        } else {
            !ch.is_control()
        };
        if accepted {
            self.value_mut(self.active).push(ch);
        }
        accepted
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        self.value_mut(self.active).pop();
    }

    pub(crate) fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::FamilyName => &self.family_name,
            ContactField::Address => &self.address,
            ContactField::Phone => &self.phone,
            ContactField::Age => &self.age,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::FamilyName => &mut self.family_name,
            ContactField::Address => &mut self.address,
            ContactField::Phone => &mut self.phone,
            ContactField::Age => &mut self.age,
        }
    }

    /// Character count of the requested field, for cursor placement.
    pub(crate) fn value_len(&self, field: ContactField) -> usize {
        self.value(field).chars().count()
    }

    /// Validate the inputs under the creation policy. An out-of-domain phone
    /// or age rejects the submission and consumes one of that field's
    /// attempts; once a field's budget is spent its value becomes the
    /// sentinel `0` and submission proceeds, with the fallback recorded on
    /// the returned draft.
    pub(crate) fn parse_validated(&mut self) -> Result<ContactDraft> {
        let (phone, phone_fell_back) = match validate_phone(&self.phone) {
            Some(value) => (value, false),
            None if self.phone_attempts + 1 < MAX_FIELD_ATTEMPTS => {
                self.phone_attempts += 1;
                self.active = ContactField::Phone;
                let left = MAX_FIELD_ATTEMPTS - self.phone_attempts;
                return Err(anyhow!(
                    "Phone must be 10 digits and not start with 0 ({left} attempt(s) left)."
                ));
            }
            None => (0, true),
        };

        let (age, age_fell_back) = match validate_age(&self.age) {
            Some(value) => (value, false),
            None if self.age_attempts + 1 < MAX_FIELD_ATTEMPTS => {
                self.age_attempts += 1;
                self.active = ContactField::Age;
                let left = MAX_FIELD_ATTEMPTS - self.age_attempts;
                return Err(anyhow!(
                    "Age must be between 1 and 150 ({left} attempt(s) left)."
                ));
            }
            None => (0, true),
        };

        Ok(ContactDraft {
            contact: Contact {
                first_name: self.first_name.clone(),
                family_name: self.family_name.clone(),
                address: self.address.clone(),
                phone,
                age,
            },
            phone_fell_back,
            age_fell_back,
        })
    }

    /// Parse the inputs under the edit policy: phone and age only have to be
    /// integers, any value is accepted unchanged.
    pub(crate) fn parse_unchecked(&self) -> Result<Contact> {
        let phone = self
            .phone
            .trim()
            .parse::<i64>()
            .map_err(|_| anyhow!("Phone must be a number."))?;
        let age = self
            .age
            .trim()
            .parse::<i64>()
            .map_err(|_| anyhow!("Age must be a number."))?;
        Ok(Contact {
            first_name: self.first_name.clone(),
            family_name: self.family_name.clone(),
            address: self.address.clone(),
            phone,
            age,
        })
    }

    /// Diff the (unchecked-parsed) form against `original`, producing one
    /// edit per field that actually changed.
    pub(crate) fn changed_edits(&self, original: &Contact) -> Result<Vec<ContactEdit>> {
        let parsed = self.parse_unchecked()?;
        let mut edits = Vec::new();
        if parsed.first_name != original.first_name {
            edits.push(ContactEdit::FirstName(parsed.first_name));
        }
        if parsed.family_name != original.family_name {
            edits.push(ContactEdit::FamilyName(parsed.family_name));
        }
        if parsed.address != original.address {
            edits.push(ContactEdit::Address(parsed.address));
        }
        if parsed.phone != original.phone {
            edits.push(ContactEdit::Phone(parsed.phone));
        }
        if parsed.age != original.age {
            edits.push(ContactEdit::Age(parsed.age));
        }
        Ok(edits)
    }

    /// Render a styled line for the modal form widget.
    pub(crate) fn build_line(&self, field: ContactField) -> Line<'static> {
        input_line(
            field.label(),
            self.value(field),
            field.placeholder(),
            self.active == field,
        )
    }
}

fn validate_phone(raw: &str) -> Option<i64> {
    let digits = raw.trim();
    if digits.len() == 10
        && !digits.starts_with('0')
        && digits.chars().all(|ch| ch.is_ascii_digit())
    {
        digits.parse().ok()
    } else {
        None
    }
}

fn validate_age(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|age| (1..=150).contains(age))
}

/// Fields of the remove-by-name prompt.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum NameField {
    First,
    Family,
}

impl Default for NameField {
    fn default() -> Self {
        NameField::First
    }
}

/// Prompt state for removal by exact full name. Empty names are legal
/// inputs; they match contacts whose name fields are empty.
#[derive(Default, Clone)]
pub(crate) struct NameForm {
    pub(crate) first_name: String,
    pub(crate) family_name: String,
    pub(crate) active: NameField,
    pub(crate) error: Option<String>,
}

impl NameForm {
    /// Swap focus between the two name fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            NameField::First => NameField::Family,
            NameField::Family => NameField::First,
        };
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            NameField::First => self.first_name.push(ch),
            NameField::Family => self.family_name.push(ch),
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            NameField::First => {
                self.first_name.pop();
            }
            NameField::Family => {
                self.family_name.pop();
            }
        }
    }

    pub(crate) fn value_len(&self, field: NameField) -> usize {
        match field {
            NameField::First => self.first_name.chars().count(),
            NameField::Family => self.family_name.chars().count(),
        }
    }

    pub(crate) fn build_line(&self, field: NameField) -> Line<'static> {
        let (label, value, is_active) = match field {
            NameField::First => (
                "First name",
                &self.first_name,
                self.active == NameField::First,
            ),
            NameField::Family => (
                "Family name",
                &self.family_name,
                self.active == NameField::Family,
            ),
        };
        input_line(label, value, "<may be empty>", is_active)
    }
}

/// Prompt state for the file path of a save, report, load, append, or merge
/// operation.
#[derive(Default, Clone)]
pub(crate) struct FilenameForm {
    pub(crate) path: String,
    pub(crate) error: Option<String>,
}

impl FilenameForm {
    /// Seed the prompt with a suggested path, typically the default book
    /// location under the user's home directory.
    pub(crate) fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            error: None,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.path.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.path.pop();
    }

    pub(crate) fn value_len(&self) -> usize {
        self.path.chars().count()
    }

    /// Validate and return the trimmed path.
    pub(crate) fn parse_inputs(&self) -> Result<String> {
        let path = self.path.trim();
        if path.is_empty() {
            return Err(anyhow!("A file name is required."));
        }
        Ok(path.to_string())
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        input_line("File", &self.path, "<required>", true)
    }
}

/// Confirmation state for removing the selected contact by index.
#[derive(Clone)]
pub(crate) struct ConfirmRemoveContact {
    pub(crate) index: usize,
    pub(crate) name: String,
}

impl ConfirmRemoveContact {
    pub(crate) fn new(index: usize, contact: &Contact) -> Self {
        Self {
            index,
            name: contact.display_name(),
        }
    }
}

/// Render one `Label: value` form line with the shared active/placeholder
/// styling.
fn input_line(label: &str, value: &str, placeholder: &str, is_active: bool) -> Line<'static> {
    let display = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled(display, style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "Bob".to_string(),
            family_name: "Smith".to_string(),
            address: "1 Rd".to_string(),
            phone: "5551234567".to_string(),
            age: "30".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn validated_parse_accepts_in_domain_values() {
        let mut form = valid_form();
        let draft = form.parse_validated().unwrap();
        assert_eq!(draft.contact.phone, 5551234567);
        assert_eq!(draft.contact.age, 30);
        assert!(draft.fallback_note().is_none());
    }

    #[test]
    fn phone_rules_reject_short_long_and_leading_zero() {
        assert!(validate_phone("555123456").is_none());
        assert!(validate_phone("55512345678").is_none());
        assert!(validate_phone("0551234567").is_none());
        assert_eq!(validate_phone("5551234567"), Some(5551234567));
    }

    #[test]
    fn age_rules_reject_out_of_domain() {
        assert!(validate_age("0").is_none());
        assert!(validate_age("151").is_none());
        assert_eq!(validate_age("150"), Some(150));
        assert_eq!(validate_age("1"), Some(1));
    }

    #[test]
    fn invalid_phone_exhausts_attempts_then_falls_back_to_sentinel() {
        let mut form = valid_form();
        form.phone = "123".to_string();

        for _ in 0..MAX_FIELD_ATTEMPTS - 1 {
            assert!(form.parse_validated().is_err());
        }

        let draft = form.parse_validated().unwrap();
        assert_eq!(draft.contact.phone, 0);
        assert!(draft.phone_fell_back);
        assert!(draft.fallback_note().unwrap().contains("Phone"));
        // The age still validated normally.
        assert_eq!(draft.contact.age, 30);
        assert!(!draft.age_fell_back);
    }

    #[test]
    fn each_numeric_field_spends_its_own_budget() {
        let mut form = valid_form();
        form.phone = "123".to_string();
        form.age = "400".to_string();

        // Phone burns its rejections first, then age burns its own.
        for _ in 0..(MAX_FIELD_ATTEMPTS - 1) * 2 {
            assert!(form.parse_validated().is_err());
        }

        let draft = form.parse_validated().unwrap();
        assert_eq!(draft.contact.phone, 0);
        assert_eq!(draft.contact.age, 0);
        assert!(draft.phone_fell_back && draft.age_fell_back);
    }

    #[test]
    fn unchecked_parse_accepts_out_of_domain_integers() {
        let mut form = valid_form();
        form.phone = "123".to_string();
        form.age = "400".to_string();

        let contact = form.parse_unchecked().unwrap();
        assert_eq!(contact.phone, 123);
        assert_eq!(contact.age, 400);
    }

    #[test]
    fn unchecked_parse_still_requires_an_integer() {
        let mut form = valid_form();
        form.phone = String::new();
        assert!(form.parse_unchecked().is_err());
    }

    #[test]
    fn changed_edits_cover_only_differing_fields() {
        let original = Contact::new("Bob", "Smith", 5551234567, "1 Rd", 30);
        let mut form = ContactForm::from_contact(&original);
        form.address = "9 New Rd".to_string();
        form.age = "31".to_string();

        let edits = form.changed_edits(&original).unwrap();
        assert_eq!(
            edits,
            vec![
                ContactEdit::Address("9 New Rd".to_string()),
                ContactEdit::Age(31),
            ]
        );
    }

    #[test]
    fn numeric_fields_reject_non_digit_characters() {
        let mut form = ContactForm {
            active: ContactField::Phone,
            ..ContactForm::default()
        };
        assert!(!form.push_char('x'));
        assert!(form.push_char('5'));
        assert_eq!(form.phone, "5");
    }
}
