use crate::errors::{ConmanError, Result};

/// Splits `user@host` on its single `@`.
///
/// Anything that does not yield exactly two parts (no `@`, or more than one) is
/// rejected with [`ConmanError::Format`].
pub fn split_address(address: &str) -> Result<(String, String)> {
    let mut parts = address.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(user), Some(host), None) => Ok((user.to_string(), host.to_string())),
        _ => Err(ConmanError::Format {
            address: address.to_string(),
        }),
    }
}
