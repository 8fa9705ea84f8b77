//! Secure credential types with automatic memory zeroization.
//!
//! The Dayforce password is held in a [`SecretString`] whose memory is
//! overwritten with zeros when dropped, and whose `Debug` output is
//! redacted so credentials cannot leak through logging.
//!
//! # Example
//!
//! ```rust
//! use dayforce_api::credentials::SecretString;
//!
//! let password = SecretString::new("hunter2");
//! assert_eq!(password.expose_secret(), "hunter2");
//! assert_eq!(format!("{password:?}"), "[REDACTED]");
//! ```

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string that is automatically zeroed when dropped.
///
/// Use [`SecretString::expose_secret`] to access the value; there is no
/// `Display` implementation, and `Debug` prints `[REDACTED]`.
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret value.
    ///
    /// The explicit method name marks every access site where the secret
    /// leaves its protective wrapper.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expose_secret_returns_value() {
        let secret = SecretString::new("api-password");
        assert_eq!(secret.expose_secret(), "api-password");
    }

    #[test]
    fn debug_output_is_redacted() {
        let secret = SecretString::new("api-password");
        let debug = format!("{secret:?}");
        assert_eq!(debug, "[REDACTED]");
        assert!(!debug.contains("api-password"));
    }

    #[test]
    fn clone_preserves_value() {
        let secret = SecretString::new("value");
        assert_eq!(secret.clone(), secret);
    }
}
