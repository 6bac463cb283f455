//! Text normalization shared by validation and scoring.

/// Keeps only ASCII letters and digits.
///
/// # Examples
///
/// ```
/// use receipt_processor::calculation::strip_non_alphanumeric;
///
/// assert_eq!(strip_non_alphanumeric("M&M Corner Market"), "MMCornerMarket");
/// assert_eq!(strip_non_alphanumeric("  & - "), "");
/// ```
pub fn strip_non_alphanumeric(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Trims leading and trailing whitespace and returns the result with its character count.
pub fn trimmed_with_length(text: &str) -> (&str, usize) {
    let trimmed = text.trim();
    (trimmed, trimmed.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_keeps_letters_and_digits() {
        assert_eq!(strip_non_alphanumeric("Target"), "Target");
        assert_eq!(strip_non_alphanumeric("7-Eleven #42"), "7Eleven42");
    }

    #[test]
    fn test_strip_removes_non_ascii_letters() {
        assert_eq!(strip_non_alphanumeric("Café €5"), "Caf5");
    }

    #[test]
    fn test_trim_counts_characters_not_bytes() {
        assert_eq!(trimmed_with_length("  Klarbrunn 12-PK 12 FL OZ  "), ("Klarbrunn 12-PK 12 FL OZ", 24));
        assert_eq!(trimmed_with_length(" Crème "), ("Crème", 5));
    }

    #[test]
    fn test_whitespace_only_trims_to_empty() {
        assert_eq!(trimmed_with_length("   "), ("", 0));
    }
}
