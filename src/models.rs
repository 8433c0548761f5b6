//! Domain model shared by the collection, codec, and TUI layers. The intent
//! is that `Contact` stays a light-weight data holder so other layers can
//! focus on ordering, persistence, and presentation logic.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One person's stored details. Every field is owned by the value itself, so
/// dropping a contact (or the whole book) releases its text without any
/// matched free calls.
pub struct Contact {
    /// Given name. May be empty, never absent.
    pub first_name: String,
    /// Family name. Primary ordering and dedup key together with
    /// `first_name`.
    pub family_name: String,
    /// Ten decimal digits with a non-zero leading digit when entered through
    /// the validated form; `0` is the sentinel for "never captured". File
    /// loads and edits accept any integer unchecked.
    pub phone: i64,
    /// Street address. May be empty.
    pub address: String,
    /// Age in years, 1 through 150 on the validated path, `0` as the
    /// sentinel. Unchecked on file load and edit.
    pub age: i64,
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        family_name: impl Into<String>,
        phone: i64,
        address: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            family_name: family_name.into(),
            phone,
            address: address.into(),
            age,
        }
    }

    /// The `(family, first)` pair that drives alphabetical ordering.
    /// Comparison is case-sensitive byte ordering, family name first with
    /// ties broken by first name.
    pub fn sort_key(&self) -> (&str, &str) {
        (self.family_name.as_str(), self.first_name.as_str())
    }

    /// Exact full-string match on both name fields, used by removal-by-name
    /// and the import-time duplicate probe.
    pub fn name_matches(&self, first_name: &str, family_name: &str) -> bool {
        self.first_name == first_name && self.family_name == family_name
    }

    /// Compose a `First Family` string that falls back to a placeholder when
    /// both names are blank. Status messages and list cards rely on this
    /// ready-to-use formatting.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.family_name);
        let trimmed = full.trim();
        if trimmed.is_empty() {
            "(unnamed)".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
