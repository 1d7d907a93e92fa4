//! Secret redaction for log and debug output.
//!
//! Wrap private keys (or anything else that must never reach a log line) in
//! [`Redacted`] before handing them to `tracing` fields or `Debug` formatting.
//!
//! ```ignore
//! use ima_client::redact::Redacted;
//!
//! tracing::info!(key = %Redacted(&private_key), "Signing locally");
//! // Logs: key = <redacted>
//! ```

use std::fmt::{self, Debug, Display};

/// Wrapper that redacts its inner value when formatted.
#[derive(Clone, Copy)]
pub struct Redacted<T>(pub T);

impl<T> Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl<T> Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_never_shows_inner_value() {
        let key = Redacted("0xdeadbeef");
        assert_eq!(format!("{key}"), "<redacted>");
        assert_eq!(format!("{key:?}"), "<redacted>");
    }
}
