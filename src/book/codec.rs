//! The flat-text wire format and the human-readable report. One contact is
//! five consecutive lines in fixed order: first name, family name, address,
//! phone, age. Line breaks are the only framing, so a field value containing
//! one corrupts the file irrecoverably; that limitation is documented rather
//! than defended against.
//!
//! Decoding validates framing only. Out-of-domain integers (a 3-digit phone,
//! an age of 400) load untouched; domain validation belongs to the
//! interactive entry form alone.

use std::fmt::Write as _;

use crate::models::Contact;

use super::contacts::AddressBook;
use super::error::BookError;

/// Lines per record block in the contact file format.
const LINES_PER_CONTACT: usize = 5;

/// Serialize the book into the 5-line-per-record format, in collection
/// order, ending with the final record's trailing newline.
pub fn encode(book: &AddressBook) -> String {
    let mut out = String::new();
    for contact in book.iter() {
        // Infallible: writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}\n{}\n{}\n{}\n{}",
            contact.first_name, contact.family_name, contact.address, contact.phone, contact.age
        );
    }
    out
}

/// Parse encoded text back into contacts, consuming exactly five lines per
/// record until the input is exhausted. A trailing block of fewer than five
/// lines, or a phone/age line that is not a decimal integer, fails with
/// `MalformedInput` and nothing is returned.
pub fn decode(text: &str) -> Result<Vec<Contact>, BookError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut contacts = Vec::with_capacity(lines.len() / LINES_PER_CONTACT);

    for (block_index, block) in lines.chunks(LINES_PER_CONTACT).enumerate() {
        let first_line = block_index * LINES_PER_CONTACT + 1;
        if block.len() < LINES_PER_CONTACT {
            return Err(BookError::MalformedInput {
                line: first_line,
                reason: format!(
                    "record block has {} of {} lines",
                    block.len(),
                    LINES_PER_CONTACT
                ),
            });
        }

        contacts.push(Contact {
            first_name: block[0].to_string(),
            family_name: block[1].to_string(),
            address: block[2].to_string(),
            phone: parse_number(block[3], first_line + 3, "phone number")?,
            age: parse_number(block[4], first_line + 4, "age")?,
        });
    }

    Ok(contacts)
}

fn parse_number(raw: &str, line: usize, field: &str) -> Result<i64, BookError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| BookError::MalformedInput {
            line,
            reason: format!("expected a numeric {field}, found '{raw}'"),
        })
}

/// Produce the write-only human-readable listing: a title line, numbered
/// per-contact blocks, and a trailing total. There is no decoder for this
/// format.
pub fn report(book: &AddressBook) -> String {
    let mut out = String::from("Address Book Report\n\n");
    for (index, contact) in book.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} {}\nPhone: {}\nAddress: {}\nAge: {}\n",
            index + 1,
            contact.first_name,
            contact.family_name,
            contact.phone,
            contact.address,
            contact.age
        );
    }
    let _ = writeln!(out, "Total Contacts: {}", book.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.append(Contact::new("Bob", "Smith", 5551234567, "1 Rd", 30));
        book.append(Contact::new("Amy", "Adams", 9998887777, "2 Ave", 41));
        book
    }

    #[test]
    fn encode_emits_five_lines_per_contact() {
        let encoded = encode(&sample_book());
        assert_eq!(
            encoded,
            "Bob\nSmith\n1 Rd\n5551234567\n30\nAmy\nAdams\n2 Ave\n9998887777\n41\n"
        );
    }

    #[test]
    fn decode_round_trips_encode() {
        let book = sample_book();
        let decoded = decode(&encode(&book)).unwrap();
        let originals: Vec<Contact> = book.iter().cloned().collect();
        assert_eq!(decoded, originals);
    }

    #[test]
    fn round_trip_keeps_empty_fields_and_sentinels() {
        let mut book = AddressBook::new();
        book.append(Contact::new("", "", 0, "", 0));
        let decoded = decode(&encode(&book)).unwrap();
        assert_eq!(decoded, vec![Contact::new("", "", 0, "", 0)]);
    }

    #[test]
    fn decode_of_empty_text_is_empty() {
        assert_eq!(decode("").unwrap(), Vec::new());
    }

    #[test]
    fn decode_accepts_out_of_domain_numbers() {
        let decoded = decode("Bob\nSmith\n1 Rd\n123\n400\n").unwrap();
        assert_eq!(decoded[0].phone, 123);
        assert_eq!(decoded[0].age, 400);
    }

    #[test]
    fn decode_rejects_truncated_trailing_block() {
        let err = decode("Bob\nSmith\n1 Rd\n5551234567\n30\nAmy\nAdams\n").unwrap_err();
        match err {
            BookError::MalformedInput { line, .. } => assert_eq!(line, 6),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_rejects_non_numeric_phone_line() {
        let err = decode("Bob\nSmith\n1 Rd\nnot-a-number\n30\n").unwrap_err();
        match err {
            BookError::MalformedInput { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn report_lists_contacts_with_total() {
        let rendered = report(&sample_book());
        assert_eq!(
            rendered,
            "Address Book Report\n\n\
             1. Bob Smith\nPhone: 5551234567\nAddress: 1 Rd\nAge: 30\n\n\
             2. Amy Adams\nPhone: 9998887777\nAddress: 2 Ave\nAge: 41\n\n\
             Total Contacts: 2\n"
        );
    }

    #[test]
    fn report_of_empty_book_still_carries_total() {
        assert_eq!(
            report(&AddressBook::new()),
            "Address Book Report\n\nTotal Contacts: 0\n"
        );
    }
}
