//! Redaction helpers for values that may carry PII.

use std::fmt;

use lazy_regex::{lazy_regex, Lazy, Regex};

static EMAIL: Lazy<Regex> = lazy_regex!(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}");

/// Display wrapper that masks email addresses in log output.
///
/// Wrap any string destined for a log line that could contain an address;
/// everything else passes through unchanged.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", EMAIL.replace_all(self.0, "<redacted-email>"))
    }
}

#[cfg(test)]
mod tests {
    use super::Redacted;

    #[test]
    fn masks_emails() {
        let out = format!("{}", Redacted("author ada@example.test created a video"));
        assert_eq!(out, "author <redacted-email> created a video");
    }

    #[test]
    fn passes_plain_text_through() {
        let out = format!("{}", Redacted("no address here"));
        assert_eq!(out, "no address here");
    }
}
