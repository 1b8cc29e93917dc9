//! Payload validation for create and update requests.

use std::collections::BTreeMap;

use crate::models::NotePayload;

/// Field name → human-readable messages, aggregated across all rules.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const TITLE_MAX_CHARS: usize = 100;

/// Run every rule and collect the failures per field.
pub fn validate_payload(payload: &NotePayload) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = payload.title.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() {
        push_error(&mut errors, "title", "title is required and must not be blank");
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        push_error(
            &mut errors,
            "title",
            &format!("title must be at most {} characters", TITLE_MAX_CHARS),
        );
    }

    // content is unconstrained

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
