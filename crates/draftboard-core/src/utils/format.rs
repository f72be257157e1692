use crate::models::NO_DATA;

/// Largest number of decimal places a rank is ever rounded to.
pub const MAX_PRECISION: u32 = 6;

/// Round `value` to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

/// Format a rank to a fixed number of decimals, or the placeholder.
pub fn format_rank(rank: Option<f64>, precision: u32) -> String {
    match rank {
        Some(r) => format!("{:.*}", precision.min(MAX_PRECISION) as usize, r),
        None => NO_DATA.to_string(),
    }
}

/// Whole numbers without decimals, everything else in shortest form.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Truncate a string to a maximum number of characters, adding an ellipsis
/// if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Check whether `haystack` contains `needle`, ignoring case.
/// `needle` should already be lowercased.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(5.0, 2), 5.0);
        assert_eq!(round_to(4.666666, 2), 4.67);
        assert_eq!(round_to(4.666666, 1), 4.7);
        assert_eq!(round_to(4.25, 0), 4.0);
    }

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(Some(5.0), 2), "5.00");
        assert_eq!(format_rank(Some(4.6667), 1), "4.7");
        assert_eq!(format_rank(None, 2), "--");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2024.0), "2024");
        assert_eq!(format_number(18.4), "18.4");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-3.5), "-3.5");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Hi", 2), "Hi");
        assert_eq!(truncate("Hello", 3), "Hel");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Harbor City", "harbor"));
        assert!(!contains_ignore_case("Harbor City", "lake"));
    }
}
