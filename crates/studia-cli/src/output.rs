//! Terminal rendering for API responses.
//!
//! Successful envelopes print to stdout; failed envelopes become
//! [`RequestFailed`] errors so the process exits non-zero.

use std::fmt::Write;

use serde::Serialize;
use studia_admin::filter::{ListFilter, Searchable};
use studia_admin::{Envelope, FieldErrors};
use thiserror::Error;

/// A failure reported by the server, flattened for terminal display.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestFailed {
    message: String,
}

impl RequestFailed {
    /// Folds the envelope's message, error code and field errors into one
    /// displayable message.
    fn from_envelope<T>(envelope: &Envelope<T>) -> Self {
        let mut message = envelope.message.clone();

        if let Some(code) = &envelope.error {
            let _ = write!(message, " [{code}]");
        }
        if let Some(errors) = &envelope.errors {
            message.push_str(&render_field_errors(errors));
        }

        Self { message }
    }
}

/// Prints a successful response's payload as pretty JSON.
///
/// Responses without a payload (deletes, logout) print the server message
/// instead.
pub fn render<T: Serialize>(envelope: Envelope<T>) -> anyhow::Result<()> {
    if !envelope.status {
        return Err(RequestFailed::from_envelope(&envelope).into());
    }

    match &envelope.data {
        Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
        None => println!("{}", envelope.message),
    }

    Ok(())
}

/// Prints one locally filtered page of a list response.
pub fn render_page<T>(envelope: Envelope<Vec<T>>, filter: &ListFilter) -> anyhow::Result<()>
where
    T: Serialize + Searchable,
{
    if !envelope.status {
        return Err(RequestFailed::from_envelope(&envelope).into());
    }

    let page = filter.apply(envelope.data.unwrap_or_default());
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}

fn render_field_errors(errors: &FieldErrors) -> String {
    let mut rendered = String::new();
    for (field, messages) in errors {
        for message in messages {
            let _ = write!(rendered, "\n  {field}: {message}");
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn failure_message_includes_code_and_fields() {
        let mut errors: FieldErrors = BTreeMap::new();
        errors.insert(
            "email".to_owned(),
            vec!["Email is already taken".to_owned()],
        );

        let envelope: Envelope<()> =
            Envelope::failure_with_code("Validation failed", "REQUEST_FAILED").with_errors(errors);
        let rendered = RequestFailed::from_envelope(&envelope).to_string();

        assert!(rendered.starts_with("Validation failed [REQUEST_FAILED]"));
        assert!(rendered.contains("email: Email is already taken"));
    }

    #[test]
    fn plain_failure_keeps_the_message() {
        let envelope: Envelope<()> = Envelope::failure("An error occurred");
        let rendered = RequestFailed::from_envelope(&envelope).to_string();

        assert_eq!(rendered, "An error occurred");
    }
}
