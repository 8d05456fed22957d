//! The checks themselves. Each one evaluates a predicate against its input and raises an
//! [`AssertionViolation`] if the predicate fails.
//!
//! Every check takes trailing `name` and `message` arguments. `name` is a display label
//! for the value under test and selects the named default template; `message` overrides
//! the default template entirely while still going through placeholder substitution.
//! Checks hold no state and may be called from any thread.

use crate::error::AssertionViolation;
use crate::format::format_positional;
use regex::Regex;
use serde_json::Value;
use std::fmt::Display;

/// Tests a predicate. If the predicate fails, then the result of the violation function
/// is the result.
fn check<P, F>(predicate: P, violation: F) -> Result<(), AssertionViolation>
where
    P: FnOnce() -> bool,
    F: FnOnce() -> AssertionViolation,
{
    if predicate() {
        Ok(())
    } else {
        Err(violation())
    }
}

/// Builds the violation for the single-name-argument checks: custom message if supplied,
/// else the named or unnamed default. The name is only passed to formatting when present,
/// so a `{0}` in a custom message stays untouched when no name was given.
fn violation(
    message: Option<&str>,
    name: Option<&str>,
    named: &str,
    unnamed: &str,
) -> AssertionViolation {
    let template = message.unwrap_or(if name.is_some() { named } else { unnamed });
    let rendered = match name {
        Some(name) => format_positional(template, &[&name]),
        None => format_positional(template, &[]),
    };
    AssertionViolation::new(rendered)
}

/// Checks that the specified value is not null.
///
/// `None` stands for the absent value; any `Some` passes.
pub fn is_not_null<T: ?Sized>(
    value: Option<&T>,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<(), AssertionViolation> {
    check(
        || value.is_some(),
        || {
            violation(
                message,
                name,
                "\"{0}\" cannot be null.",
                "Specified value cannot be null.",
            )
        },
    )
}

/// Checks that the specified value is true.
pub fn is_true(
    value: bool,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<(), AssertionViolation> {
    check(
        || value,
        || {
            violation(
                message,
                name,
                "\"{0}\" is not a \"true\".",
                "Specified value is not a \"true\".",
            )
        },
    )
}

/// Checks that the specified value is false.
pub fn is_false(
    value: bool,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<(), AssertionViolation> {
    check(
        || !value,
        || {
            violation(
                message,
                name,
                "\"{0}\" is not a \"false\".",
                "Specified value is not a \"false\".",
            )
        },
    )
}

/// Checks that the specified string matches the pattern.
///
/// Search semantics: the pattern may match anywhere in the string. Anchor the pattern to
/// require a full match.
pub fn is_match(
    value: &str,
    pattern: &Regex,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<(), AssertionViolation> {
    check(
        || pattern.is_match(value),
        || {
            violation(
                message,
                name,
                "\"{0}\" is not match pattern.",
                "Specified value is not match pattern.",
            )
        },
    )
}

/// Checks that the specified value is within `[from, to]`, bounds inclusive.
///
/// The unnamed default message references the bounds only, but an empty-string name is
/// always argument 0 so the bound placeholders keep indices 1 and 2 in custom messages.
pub fn in_range<T>(
    value: T,
    from: T,
    to: T,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<(), AssertionViolation>
where
    T: PartialOrd + Display,
{
    if value < from || value > to {
        let template = message.unwrap_or(if name.is_some() {
            "\"{0}\" is out of range [{1}, {2}]."
        } else {
            "Specified value out of range [{1}, {2}]."
        });
        let name = name.unwrap_or("");
        let rendered = format_positional(template, &[&name, &from, &to]);
        return Err(AssertionViolation::new(rendered));
    }
    Ok(())
}

/// Checks that the specified value is an array.
///
/// Only a genuine JSON array passes; array-likes such as an object with a `length` key
/// do not.
pub fn is_array(
    value: &Value,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<(), AssertionViolation> {
    check(
        || value.is_array(),
        || {
            violation(
                message,
                name,
                "\"{0}\" is not a array.",
                "Specified value is not a array.",
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn not_null_accepts_any_present_value() {
        assert!(is_not_null(Some(&0), None, None).is_ok());
        assert!(is_not_null(Some("even empty"), None, None).is_ok());
    }

    #[test]
    fn not_null_raises_on_absent_value() {
        let err = is_not_null::<str>(None, Some("config"), None).unwrap_err();
        assert_eq!(err.message(), "\"config\" cannot be null.");

        let err = is_not_null::<str>(None, None, None).unwrap_err();
        assert_eq!(err.message(), "Specified value cannot be null.");
    }

    #[test]
    fn is_true_is_strict() {
        assert!(is_true(true, None, None).is_ok());
        let err = is_true(false, None, None).unwrap_err();
        assert_eq!(err.message(), "Specified value is not a \"true\".");
    }

    #[test]
    fn is_false_is_strict() {
        assert!(is_false(false, None, None).is_ok());
        let err = is_false(true, Some("dry_run"), None).unwrap_err();
        assert_eq!(err.message(), "\"dry_run\" is not a \"false\".");
    }

    #[test]
    fn match_uses_search_semantics() {
        let digits = Regex::new(r"[0-9]+").unwrap();
        assert!(is_match("abc123", &digits, None, None).is_ok());

        let lowercase_only = Regex::new(r"^[a-z]+$").unwrap();
        let err = is_match("abc123", &lowercase_only, Some("id"), None).unwrap_err();
        assert_eq!(err.message(), "\"id\" is not match pattern.");
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(in_range(1, 1, 10, None, None).is_ok());
        assert!(in_range(10, 1, 10, None, None).is_ok());
        assert!(in_range(5, 1, 10, None, None).is_ok());
        assert!(in_range(0, 1, 10, None, None).is_err());
        assert!(in_range(11, 1, 10, None, None).is_err());
    }

    #[test]
    fn range_messages_embed_bounds() {
        let err = in_range(11, 1, 10, Some("age"), None).unwrap_err();
        assert_eq!(err.message(), "\"age\" is out of range [1, 10].");

        let err = in_range(11, 1, 10, None, None).unwrap_err();
        assert_eq!(err.message(), "Specified value out of range [1, 10].");
    }

    #[test]
    fn range_works_over_floats() {
        assert!(in_range(0.5, 0.0, 1.0, None, None).is_ok());
        let err = in_range(1.5, 0.0, 1.0, Some("ratio"), None).unwrap_err();
        assert_eq!(err.message(), "\"ratio\" is out of range [0, 1].");
    }

    #[test]
    fn array_check_rejects_array_likes() {
        assert!(is_array(&json!([1, 2, 3]), None, None).is_ok());
        assert!(is_array(&json!([]), None, None).is_ok());

        let err = is_array(&json!({"length": 3}), Some("items"), None).unwrap_err();
        assert_eq!(err.message(), "\"items\" is not a array.");

        let err = is_array(&json!("[]"), None, None).unwrap_err();
        assert_eq!(err.message(), "Specified value is not a array.");
    }

    #[test]
    fn custom_message_replaces_default_template() {
        let err = is_true(false, Some("ready"), Some("\"{0}\" must be set first")).unwrap_err();
        assert_eq!(err.message(), "\"ready\" must be set first");

        let err = in_range(11, 1, 10, Some("age"), Some("{0}: want {1}..={2}")).unwrap_err();
        assert_eq!(err.message(), "age: want 1..=10");
    }

    #[test]
    fn custom_message_without_name_keeps_placeholder() {
        let err = is_true(false, None, Some("{0} was false")).unwrap_err();
        assert_eq!(err.message(), "{0} was false");
    }
}
