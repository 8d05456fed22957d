//! Positional placeholder formatting for violation messages.

use std::fmt::Display;

/// Replaces each `{i}` token in the template with the display form of the i-th argument.
///
/// A token whose index has no corresponding argument is left exactly as written, as is
/// brace text that is not a plain decimal index.
pub fn format_positional(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        let Some(close) = rest.find('}') else {
            // no closing brace anywhere after this point
            break;
        };

        let token = &rest[..=close];
        match token[1..close].parse::<usize>().ok().and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str(token),
        }
        rest = &rest[close + 1..];
    }

    out.push_str(rest);
    out
}
