//! Input validation for configuration values.
//!
//! Stages are deliberately not validated: whatever the deployment tooling
//! supplies is used verbatim in the secret identifier.

use std::collections::HashSet;

use crate::error::{Result, ValidationError};

/// Validate a required key name.
///
/// Required keys become environment variable names in the hosted runtime:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    if let Some(first_char) = key.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: "cannot start with a digit".to_string(),
            }
            .into());
        }
    }

    for (i, ch) in key.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate an ordered required-key list: every key valid, no duplicates.
pub fn validate_required_keys(keys: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(keys.len());
    for key in keys {
        validate_key(key)?;
        if !seen.insert(key.as_str()) {
            return Err(ValidationError::DuplicateKey(key.clone()).into());
        }
    }
    Ok(())
}

/// Validate an application name.
///
/// The name is the first segment of every secret identifier, so it must be
/// non-empty and cannot contain `/`.
pub fn validate_app_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidAppName {
            name: name.to_string(),
            reason: "cannot be empty".to_string(),
        }
        .into());
    }
    if name.contains('/') {
        return Err(ValidationError::InvalidAppName {
            name: name.to_string(),
            reason: "cannot contain '/'".to_string(),
        }
        .into());
    }
    Ok(())
}
