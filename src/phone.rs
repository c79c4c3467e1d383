//! Norwegian phone number formatting

/// Maximum digits in a Norwegian subscriber number
const MAX_DIGITS: usize = 8;

/// Format raw input as a Norwegian phone number.
///
/// Strips everything that is not a digit, caps the result at eight digits
/// and groups it as `XXX XX XXX`.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=5 => format!("{} {}", &digits[..3], &digits[3..]),
        _ => format!("{} {} {}", &digits[..3], &digits[3..5], &digits[5..]),
    }
}

/// Check whether a formatted value holds a complete eight-digit number.
pub fn is_complete_phone(value: &str) -> bool {
    value.chars().filter(|c| c.is_ascii_digit()).count() == MAX_DIGITS
        && value.chars().all(|c| c.is_ascii_digit() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_short_input_is_unchanged() {
        assert_eq!(format_phone("12"), "12");
        assert_eq!(format_phone("123"), "123");
    }

    #[test]
    fn test_four_digits_split_after_three() {
        assert_eq!(format_phone("1234"), "123 4");
        assert_eq!(format_phone("12345"), "123 45");
    }

    #[test]
    fn test_full_number_grouped_3_2_3() {
        assert_eq!(format_phone("12345678"), "123 45 678");
    }

    #[test]
    fn test_six_digits_grouped() {
        assert_eq!(format_phone("123456"), "123 45 6");
    }

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(format_phone("+47 12-34-56-78"), "471 23 456");
        assert_eq!(format_phone("abc123def45"), "123 45");
    }

    #[test]
    fn test_caps_at_eight_digits() {
        assert_eq!(format_phone("1234567890123"), "123 45 678");
    }

    #[test]
    fn test_reformatting_is_stable() {
        let once = format_phone("12345678");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn test_is_complete_phone() {
        assert!(is_complete_phone("123 45 678"));
        assert!(is_complete_phone("12345678"));
        assert!(!is_complete_phone("123 45 67"));
        assert!(!is_complete_phone(""));
        assert!(!is_complete_phone("123-45-678"));
    }
}
