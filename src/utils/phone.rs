//! Phone number utilities
//!
//! Phone numbers are personal data and must never appear raw in logs; every
//! log site in this crate goes through [`mask_phone_number`].

/// Mask a phone number for logging, keeping only the last four characters
/// (e.g. `+14155552671` becomes `+*******2671`).
///
/// Operates on characters, not bytes: the input is caller-supplied and may
/// contain non-ASCII formatting.
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible_digits = 4;
    let masked_count = chars.len() - visible_digits;
    let last_digits: String = chars[chars.len() - visible_digits..].iter().collect();

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(masked_count - 1), last_digits)
    } else {
        format!("{}{}", "*".repeat(masked_count), last_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_international_number() {
        assert_eq!(mask_phone_number("+14155552671"), "+*******2671");
    }

    #[test]
    fn test_mask_plain_number() {
        assert_eq!(mask_phone_number("4155552671"), "******2671");
    }

    #[test]
    fn test_mask_short_input() {
        assert_eq!(mask_phone_number("123"), "***");
        assert_eq!(mask_phone_number(""), "");
    }

    #[test]
    fn test_mask_multibyte_input() {
        // Multibyte characters near the keep-last-four boundary must not
        // split a character.
        assert_eq!(mask_phone_number("a€bcd"), "*€bcd");
        assert_eq!(mask_phone_number("＋１２３４５６７"), "****４５６７");
        assert_eq!(mask_phone_number("€€€"), "***");
    }
}
