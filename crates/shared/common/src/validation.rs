//! Flattening of `validator` reports into a single client-facing message.

use validator::ValidationErrors;

/// Join every failure message into one string, fields in name order.
///
/// Errors without a message fall back to their code.
pub fn join_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
