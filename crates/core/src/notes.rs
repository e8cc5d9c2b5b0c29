//! Note and category limits plus the field validation shared by handlers.
//!
//! Create DTOs validate through `validator` derives using these constants;
//! update handlers call the functions below on each present patch field.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a category name in characters.
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 100;

/// Maximum length of a category icon (an emoji or short glyph name).
pub const MAX_CATEGORY_ICON_LENGTH: u64 = 32;

/// Maximum length of a note body in characters.
pub const MAX_NOTE_BODY_LENGTH: u64 = 10_000;

/// Maximum length of a note title in characters.
pub const MAX_NOTE_TITLE_LENGTH: u64 = 200;

/// Maximum length of a note color tag (e.g. `"yellow"` or `"#FFEE88"`).
pub const MAX_NOTE_COLOR_LENGTH: u64 = 32;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a category name: non-empty and within the length limit.
pub fn validate_category_name(name: &str) -> Result<(), String> {
    validate_required_text("name", name, MAX_CATEGORY_NAME_LENGTH)
}

/// Validate a note body: non-empty and within the length limit.
pub fn validate_note_body(body: &str) -> Result<(), String> {
    validate_required_text("body", body, MAX_NOTE_BODY_LENGTH)
}

/// Validate an optional text column against its maximum length.
pub fn validate_max_length(field: &str, value: &str, max: u64) -> Result<(), String> {
    if value.chars().count() as u64 > max {
        return Err(format!("{field} exceeds maximum length of {max} characters"));
    }
    Ok(())
}

/// Reject an update request in which no field is present.
pub fn require_any_field(present: &[bool], fields: &[&str]) -> Result<(), String> {
    if present.iter().any(|p| *p) {
        Ok(())
    } else {
        Err(format!(
            "At least one of {} must be provided",
            fields.join(", ")
        ))
    }
}

fn validate_required_text(field: &str, value: &str, max: u64) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    validate_max_length(field, value, max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_category_name ----------------------------------------------

    #[test]
    fn category_name_accepted() {
        assert!(validate_category_name("Work").is_ok());
    }

    #[test]
    fn empty_category_name_rejected() {
        let err = validate_category_name("").unwrap_err();
        assert_eq!(err, "name cannot be empty");
    }

    #[test]
    fn overlong_category_name_rejected() {
        let name = "x".repeat(MAX_CATEGORY_NAME_LENGTH as usize + 1);
        assert!(validate_category_name(&name).is_err());
    }

    // -- validate_note_body --------------------------------------------------

    #[test]
    fn note_body_at_limit_accepted() {
        let body = "a".repeat(MAX_NOTE_BODY_LENGTH as usize);
        assert!(validate_note_body(&body).is_ok());
    }

    #[test]
    fn empty_note_body_rejected() {
        assert_eq!(validate_note_body("").unwrap_err(), "body cannot be empty");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 32 multi-byte glyphs are still 32 characters.
        let icon = "\u{1F4DD}".repeat(MAX_CATEGORY_ICON_LENGTH as usize);
        assert!(validate_max_length("icon", &icon, MAX_CATEGORY_ICON_LENGTH).is_ok());
    }

    // -- require_any_field ---------------------------------------------------

    #[test]
    fn require_any_field_passes_with_one_present() {
        assert!(require_any_field(&[false, true], &["name", "icon"]).is_ok());
    }

    #[test]
    fn require_any_field_lists_fields_when_none_present() {
        let err = require_any_field(&[false, false], &["name", "icon"]).unwrap_err();
        assert_eq!(err, "At least one of name, icon must be provided");
    }
}
