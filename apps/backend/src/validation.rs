//! Request payload validation at the HTTP boundary.
//!
//! Handlers never see a payload that failed these checks; the
//! `ValidatedJson` extractor rejects it with a 400 listing one entry per
//! violated field.

use lazy_regex::{lazy_regex, Lazy, Regex};
use url::Url;

use crate::error::FieldError;

static EMAIL: Lazy<Regex> = lazy_regex!(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$");

/// Field-level validation for inbound payloads.
pub trait Validate {
    /// Returns one entry per violated constraint; empty means valid.
    fn validate(&self) -> Vec<FieldError>;
}

/// Character-count bounds, inclusive.
pub fn check_length(errors: &mut Vec<FieldError>, key: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(FieldError::new(
            key,
            format!("must be between {min} and {max} characters"),
        ));
    }
}

/// Upper character-count bound only; empty is allowed.
pub fn check_max_length(errors: &mut Vec<FieldError>, key: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            key,
            format!("must be at most {max} characters"),
        ));
    }
}

pub fn check_range(errors: &mut Vec<FieldError>, key: &str, value: i32, min: i32, max: i32) {
    if value < min || value > max {
        errors.push(FieldError::new(
            key,
            format!("must be between {min} and {max}"),
        ));
    }
}

pub fn check_url(errors: &mut Vec<FieldError>, key: &str, value: &str) {
    if Url::parse(value).is_err() {
        errors.push(FieldError::new(key, "must be a valid URL"));
    }
}

pub fn check_email(errors: &mut Vec<FieldError>, key: &str, value: &str) {
    if !EMAIL.is_match(value) {
        errors.push(FieldError::new(key, "must be a valid email address"));
    }
}

#[cfg(test)]
mod tests {
    use super::{check_email, check_length, check_max_length, check_range, check_url};
    use crate::error::FieldError;

    fn run(check: impl FnOnce(&mut Vec<FieldError>)) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check(&mut errors);
        errors
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(run(|e| check_length(e, "title", "abc", 3, 100)).is_empty());
        assert!(run(|e| check_length(e, "title", &"x".repeat(100), 3, 100)).is_empty());

        let errors = run(|e| check_length(e, "title", "ab", 3, 100));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "title");

        assert!(!run(|e| check_length(e, "title", &"x".repeat(101), 3, 100)).is_empty());
    }

    #[test]
    fn max_length_allows_empty() {
        assert!(run(|e| check_max_length(e, "description", "", 500)).is_empty());
        assert!(!run(|e| check_max_length(e, "description", &"x".repeat(501), 500)).is_empty());
    }

    #[test]
    fn age_range_is_inclusive() {
        assert!(run(|e| check_range(e, "author.age", 0, 0, 120)).is_empty());
        assert!(run(|e| check_range(e, "author.age", 120, 0, 120)).is_empty());
        assert!(!run(|e| check_range(e, "author.age", -1, 0, 120)).is_empty());
        assert!(!run(|e| check_range(e, "author.age", 121, 0, 120)).is_empty());
    }

    #[test]
    fn url_requires_a_parseable_absolute_url() {
        assert!(run(|e| check_url(e, "url", "https://example.test/v/1")).is_empty());
        assert!(!run(|e| check_url(e, "url", "not a url")).is_empty());
        assert!(!run(|e| check_url(e, "url", "")).is_empty());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(run(|e| check_email(e, "author.email", "ada@example.test")).is_empty());
        assert!(!run(|e| check_email(e, "author.email", "ada@nowhere")).is_empty());
        assert!(!run(|e| check_email(e, "author.email", "")).is_empty());
    }
}
