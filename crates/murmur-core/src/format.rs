//! crates/murmur-core/src/format.rs
//! Positional `{N}` formatting for log messages.
//!
//! The facade formats with an unbounded number of positional arguments.
//! Formatting never fails: placeholders without a matching argument and
//! malformed placeholders are emitted literally, so a bad format string can
//! degrade a message but can never crash the host application.

use std::fmt::{Display, Write as _};

/// Substitutes `{0}`, `{1}`, ... placeholders in `format` with `args`.
///
/// Every occurrence of a placeholder expands, so `{0}` may appear more than
/// once. With no arguments the format string passes through untouched.
///
/// # Examples
///
/// ```
/// use murmur_core::format_positional;
///
/// let message = format_positional(
///     "Player {0} has {1} health",
///     &[&"John" as &dyn std::fmt::Display, &42],
/// );
/// assert_eq!(message, "Player John has 42 health");
/// ```
#[must_use]
pub fn format_positional(format: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return format.to_owned();
    }

    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut rest = format;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        match tail.find('}') {
            Some(close) if close > 0 && tail[..close].bytes().all(|b| b.is_ascii_digit()) => {
                match tail[..close].parse::<usize>().ok().and_then(|i| args.get(i)) {
                    Some(arg) => {
                        // Writing into a String cannot fail.
                        let _ = write!(out, "{arg}");
                    }
                    None => {
                        // Placeholder without a matching argument stays literal.
                        out.push('{');
                        out.push_str(&tail[..close]);
                        out.push('}');
                    }
                }
                rest = &tail[close + 1..];
            }
            _ => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::format_positional;
    use std::fmt::Display;

    fn args<'a>(values: &'a [&'a dyn Display]) -> &'a [&'a dyn Display] {
        values
    }

    #[test]
    fn no_args_passes_through() {
        assert_eq!(format_positional("plain {0} text", &[]), "plain {0} text");
    }

    #[test]
    fn substitutes_in_order() {
        let message = format_positional("Player {0} has {1} health", args(&[&"John", &42]));
        assert_eq!(message, "Player John has 42 health");
    }

    #[test]
    fn repeated_placeholder_expands_every_time() {
        let message = format_positional("{0} and {0} again", args(&[&"once"]));
        assert_eq!(message, "once and once again");
    }

    #[test]
    fn supports_more_than_four_arguments() {
        let message = format_positional(
            "{0} {1} {2} {3} {4} {5}",
            args(&[&1, &2, &3, &4, &5, &6]),
        );
        assert_eq!(message, "1 2 3 4 5 6");
    }

    #[test]
    fn out_of_range_placeholder_stays_literal() {
        let message = format_positional("{0} and {7}", args(&[&"here"]));
        assert_eq!(message, "here and {7}");
    }

    #[test]
    fn malformed_placeholders_stay_literal() {
        assert_eq!(format_positional("{x} {", args(&[&1])), "{x} {");
        assert_eq!(format_positional("{} done", args(&[&1])), "{} done");
        assert_eq!(format_positional("{0", args(&[&1])), "{0");
    }

    #[test]
    fn arguments_can_appear_out_of_order() {
        let message = format_positional("{1} before {0}", args(&[&"last", &"first"]));
        assert_eq!(message, "first before last");
    }
}
