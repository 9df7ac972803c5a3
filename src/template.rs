//! Positional message templates.
//!
//! Dictionary messages use `%s` placeholders, substituted in order when an
//! error is built with [`crate::Dictionary::new_error_formatted`]. The same
//! arguments are applied to every locale's template, so all locales of one
//! definition must share the same positional arity.
//!
//! Arity mismatches never panic. A placeholder with no matching argument
//! renders as `%!s(MISSING)` and surplus arguments are appended as
//! `%!(EXTRA a, b)`, keeping a malformed message visible without aborting
//! the caller.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Marker substituted for a placeholder with no matching argument.
const MISSING_MARKER: &str = "%!s(MISSING)";

// Regex for placeholder scanning (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"%%|%s").expect("placeholder regex is valid"))
}

/// Substitute `args` into the `%s` placeholders of `template`, in order.
///
/// `%%` renders a literal `%`. Any other `%`-sequence passes through
/// verbatim. Missing arguments and surplus arguments produce the visible
/// mismatch markers described in the module docs.
pub fn format_template(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next_arg = 0;
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                match args.get(next_arg) {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => out.push_str(MISSING_MARKER),
                }
                next_arg += 1;
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next_arg..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&arg.to_string());
        }
        out.push(')');
    }

    out
}

/// Count the `%s` placeholders in a template (`%%` escapes excluded).
///
/// Used by [`crate::DictionaryValidator`] to detect arity mismatches
/// between the locales of one definition.
pub fn placeholder_count(template: &str) -> usize {
    placeholder_regex()
        .find_iter(template)
        .filter(|m| m.as_str() == "%s")
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Substitution Tests ====================

    #[test]
    fn test_format_single_placeholder() {
        assert_eq!(format_template("%s is required", &[&"name"]), "name is required");
    }

    #[test]
    fn test_format_multiple_placeholders_in_order() {
        assert_eq!(
            format_template("%s must be between %s and %s", &[&"age", &18, &65]),
            "age must be between 18 and 65"
        );
    }

    #[test]
    fn test_format_no_placeholders_no_args() {
        assert_eq!(format_template("plain message", &[]), "plain message");
    }

    #[test]
    fn test_format_escaped_percent() {
        assert_eq!(format_template("%s%% done", &[&80]), "80% done");
    }

    #[test]
    fn test_format_unknown_verb_passes_through() {
        assert_eq!(format_template("%d items", &[]), "%d items");
    }

    #[test]
    fn test_format_trailing_percent() {
        assert_eq!(format_template("100%", &[]), "100%");
    }

    // ==================== Arity Mismatch Tests ====================

    #[test]
    fn test_format_missing_argument() {
        assert_eq!(
            format_template("%s is required", &[]),
            "%!s(MISSING) is required"
        );
    }

    #[test]
    fn test_format_extra_arguments() {
        assert_eq!(
            format_template("done", &[&"a", &"b"]),
            "done%!(EXTRA a, b)"
        );
    }

    #[test]
    fn test_format_empty_template_with_args() {
        assert_eq!(format_template("", &[&"name"]), "%!(EXTRA name)");
    }

    // ==================== Placeholder Count Tests ====================

    #[test]
    fn test_placeholder_count() {
        assert_eq!(placeholder_count("%s and %s"), 2);
        assert_eq!(placeholder_count("no placeholders"), 0);
    }

    #[test]
    fn test_placeholder_count_ignores_escapes() {
        assert_eq!(placeholder_count("%%s is literal, %s is not"), 1);
    }
}
