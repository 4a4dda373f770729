//! Contact-field validation for the lead form.
//!
//! Each predicate trims its input, checks the whole string against a single
//! pattern and answers with a plain `bool`. Callers own the user-facing
//! messaging, so the same predicate backs both the interactive form and the
//! flag-driven path.

use regex::Regex;

/// Letters accepted in name and company fields, covering the accented range
/// used in Brazilian Portuguese.
const LETTERS: &str = "A-Za-zÀ-ÖØ-öø-ÿÇç";

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// A personal name: at least 3 characters, first and last name separated by
/// a space, letters plus apostrophes, accent marks, hyphens and spaces.
pub fn is_valid_name(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.chars().count() < 3 || !trimmed.contains(' ') {
        return false;
    }

    let pattern = Regex::new(&format!(r"^[{LETTERS}'´`^~\- ]+$")).unwrap();
    pattern.is_match(trimmed)
}

/// An e-mail address with a user part, a domain and a TLD of two or more
/// letters. `a@b.c` fails because the TLD is a single letter.
pub fn is_valid_email(input: &str) -> bool {
    let pattern = Regex::new(EMAIL_PATTERN).unwrap();
    pattern.is_match(input.trim())
}

/// A company name: at least 2 characters, letters, digits, spaces and the
/// punctuation `. , & -`.
pub fn is_valid_company(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.chars().count() < 2 {
        return false;
    }

    // Hyphen last inside the class so it needs no escaping.
    let pattern = Regex::new(&format!(r"^[{LETTERS}0-9 .,&-]+$")).unwrap();
    pattern.is_match(trimmed)
}

/// Strip everything that is not a decimal digit. Idempotent.
pub fn only_digits(input: &str) -> String {
    let pattern = Regex::new(r"\D").unwrap();
    pattern.replace_all(input, "").into_owned()
}

/// A Brazilian phone number, or nothing at all: the field is optional.
///
/// Formatting characters are stripped, a leading `55` country code is
/// dropped when enough digits follow it, and what remains must be a
/// 10-digit landline or an 11-digit mobile number.
pub fn is_valid_phone(input: &str) -> bool {
    if input.is_empty() {
        return true;
    }

    let digits = only_digits(input);
    let national = if digits.starts_with("55") && digits.chars().count() >= 12 {
        digits.chars().skip(2).collect()
    } else {
        digits
    };

    matches!(national.chars().count(), 10 | 11)
}
