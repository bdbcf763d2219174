//! Best-effort defanging of free-text input.
//!
//! This is not an HTML sanitizer. It removes a handful of substrings that
//! commonly carry markup or script, in a fixed order, and caps the length.
//!
//! Known limitations:
//! - The word `script` is removed anywhere, so legitimate text is altered
//!   (`manuscript` becomes `manu`, `Description` becomes `Deion`).
//! - `on<word>=` is removed anywhere, not only inside tags, so `onion=3`
//!   becomes `3`.
//! - Removals can join fragments into new matches (`scrscriptipt` leaves
//!   `script`); a single pass is made per rule.
//! - Entity-encoded markup such as `&lt;` passes through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters kept after cleaning.
pub const MAX_SANITIZED_CHARS: usize = 10_000;

static ANGLE_BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[<>]").expect("Failed to compile angle bracket regex"));

static JAVASCRIPT_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("Failed to compile scheme regex"));

static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)on[a-z0-9_]+=").expect("Failed to compile event handler regex")
});

static SCRIPT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)script").expect("Failed to compile script regex"));

/// Clean a raw value. Absent input yields an empty string.
///
/// # Example
///
/// ```
/// use contact_relay::sanitize::sanitize_input;
///
/// let cleaned = sanitize_input(Some("  <b onclick=go()>Hi</b>  "));
/// assert_eq!(cleaned, "b go()Hi/b");
/// assert_eq!(sanitize_input(None), "");
/// ```
pub fn sanitize_input(input: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };

    let cleaned = ANGLE_BRACKETS.replace_all(input.trim(), "");
    let cleaned = JAVASCRIPT_SCHEME.replace_all(&cleaned, "");
    let cleaned = EVENT_HANDLER.replace_all(&cleaned, "");
    let cleaned = SCRIPT_WORD.replace_all(&cleaned, "");

    // Characters, not UTF-16 units
    cleaned.chars().take(MAX_SANITIZED_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_is_defanged() {
        let cleaned = sanitize_input(Some("<script>alert('x')</script> Hello"));
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.contains('>'));
        assert!(!cleaned.to_lowercase().contains("script"));
        assert!(cleaned.contains("Hello"));
        assert_eq!(cleaned, "alert('x')/ Hello");
    }

    #[test]
    fn test_absent_and_blank_input() {
        assert_eq!(sanitize_input(None), "");
        assert_eq!(sanitize_input(Some("")), "");
        assert_eq!(sanitize_input(Some("   \n\t ")), "");
    }

    #[test]
    fn test_trims_before_cleaning() {
        assert_eq!(sanitize_input(Some("  hello  ")), "hello");
        // Trimming happens first, so whitespace exposed by removals stays
        assert_eq!(sanitize_input(Some("<> hi")), " hi");
    }

    #[test]
    fn test_javascript_scheme_removed_case_insensitive() {
        assert_eq!(
            sanitize_input(Some("JavaScript:alert(1) and javascript:x")),
            "alert(1) and x"
        );
    }

    #[test]
    fn test_event_handlers_removed() {
        assert_eq!(sanitize_input(Some("img ONERROR=steal()")), "img steal()");
        assert_eq!(sanitize_input(Some("onload=x onMouseOver=y")), "x y");
    }

    #[test]
    fn test_script_word_removed_everywhere() {
        assert_eq!(sanitize_input(Some("My manuscript")), "My manu");
        assert_eq!(sanitize_input(Some("SCRIPT Script sCrIpT")), "  ");
    }

    #[test]
    fn test_rules_apply_in_order() {
        // Bracket removal runs first and can form a scheme prefix
        assert_eq!(sanitize_input(Some("java<script:alert")), "alert");
        // The scheme is removed before the word rule sees it
        assert_eq!(sanitize_input(Some("javascript:go")), "go");
    }

    #[test]
    fn test_truncates_to_max_chars() {
        let long = "é".repeat(MAX_SANITIZED_CHARS + 50);
        let cleaned = sanitize_input(Some(&long));
        assert_eq!(cleaned.chars().count(), MAX_SANITIZED_CHARS);
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Hi, I'd like 3 jars of chilli jam. Call me on 555-0100.";
        assert_eq!(sanitize_input(Some(text)), text);
    }
}
