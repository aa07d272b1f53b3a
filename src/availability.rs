use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Status cell values (trimmed, lower-cased) that mean the marksheet is ready.
    static ref AVAILABLE_VALUES: HashSet<&'static str> =
        ["yes", "true", "1", "available", "y"].into_iter().collect();
}

/// Whether a raw marksheet status cell marks the marksheet as available
///
/// Comparison ignores case and surrounding whitespace. Anything outside the
/// accepted set, including an empty or missing cell, reads as not available.
///
/// # Examples
/// ```
/// use marksheet_finder::availability::is_available;
///
/// assert!(is_available(" Yes "));
/// assert!(!is_available("pending"));
/// ```
pub fn is_available(status: &str) -> bool {
    AVAILABLE_VALUES.contains(status.trim().to_lowercase().as_str())
}
