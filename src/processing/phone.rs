//! Phone number display helpers.

/// Keep only the ASCII digits of `phone` (e.g. for a `tel:` link).
pub fn dial_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Render ten-digit numbers as `(555) 123-4567`; anything else is returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits = dial_digits(phone);
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}
