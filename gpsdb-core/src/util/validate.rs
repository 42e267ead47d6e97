use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldInvalidation {
    #[error("The field '{0}' is missing")]
    Missing(&'static str),
    #[error("The field '{0}' must not be empty")]
    Blank(&'static str),
    #[error("The field '{0}' contains invalid characters")]
    Encoding(&'static str),
}

/// Returns the trimmed value of a required form field.
///
/// Values containing U+FFFD, which form decoders substitute for malformed input, are rejected.
pub fn required_field(
    name: &'static str,
    value: Option<&str>,
) -> Result<String, FieldInvalidation> {
    let value = value.ok_or(FieldInvalidation::Missing(name))?.trim();
    if value.is_empty() {
        return Err(FieldInvalidation::Blank(name));
    }
    if value.contains(char::REPLACEMENT_CHARACTER) {
        return Err(FieldInvalidation::Encoding(name));
    }
    Ok(value.to_owned())
}
