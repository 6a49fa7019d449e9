//! Keystroke sanitizer for numeric input fields.
//!
//! - Only ASCII digits and `.` survive.
//! - The first `.` is kept; later ones are dropped.
//! - Empty input stays empty ("unset", not zero).

/// Sanitize raw field text into a non-negative decimal string.
///
/// Pure and idempotent: `coerce(&coerce(x)) == coerce(x)`.
pub fn coerce(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_dot = false;
    for ch in raw.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' if !seen_dot => {
                seen_dot = true;
                out.push(ch);
            }
            _ => {}
        }
    }
    out
}
