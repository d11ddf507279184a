//! Field rules shared by the result records and the document builder.

use crate::error::ValidationError;

/// Characters that split a string into more than one line.
///
/// Matches the line boundaries recognised by the NRDP server's own
/// line-oriented tooling, not just `\n`.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Reject multi-line values for `field`.
pub fn validate_single_line(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains(is_line_break) {
        return Err(ValidationError::InvalidLine { field });
    }

    Ok(())
}

/// Like [`validate_single_line`] but also requires at least one character.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    validate_single_line(field, value)
}

/// Performance data labels are quoted with `'` and terminated by `=`.
pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() || label.contains(|c: char| c == '\'' || c == '=' || is_line_break(c)) {
        return Err(ValidationError::InvalidLabel { label: label.to_string() });
    }

    Ok(())
}

/// Units sit between the value and the first `;`, so they may not contain
/// digits, separators or whitespace.
pub fn validate_units(units: &str) -> Result<(), ValidationError> {
    let invalid = units
        .chars()
        .any(|c| c.is_whitespace() || c.is_ascii_digit() || matches!(c, ';' | '\'' | '='));

    if invalid {
        return Err(ValidationError::InvalidUnits { units: units.to_string() });
    }

    Ok(())
}

/// XML 1.0 `Char` production: text outside it cannot appear in a document,
/// escaped or not.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{d7ff}' | '\u{e000}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}'
    )
}
