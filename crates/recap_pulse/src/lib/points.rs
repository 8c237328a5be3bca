//! # Point extraction
//!
//! Providers answer in loosely formatted text. This module turns that text
//! into the ordered list of summary points shown to the user.

use std::sync::LazyLock;

use regex::Regex;

/// Leading characters that mark a bulleted line.
const BULLET_MARKERS: &[char] = &['-', '•', '*'];

/// A digit followed somewhere later by a period, e.g. `3. text` or `(2). text`.
static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d.*\.").expect("numbered line regex is valid"));

/// Extracts the ordered summary points from a provider's raw answer.
///
/// Bulleted lines (`-`, `•`, `*`) lose their marker; numbered lines keep only
/// the text after the first period. Every other line is dropped. When no line
/// matches, the whole `raw_text` is returned as the single point, so the
/// result is only empty for empty input.
///
/// Points are neither de-duplicated nor capped at the requested count.
pub fn extract_points(raw_text: &str) -> Vec<String> {
    if raw_text.is_empty() {
        return Vec::new();
    }

    let points = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_point)
        .collect::<Vec<_>>();

    if points.is_empty() {
        vec![raw_text.to_string()]
    } else {
        points
    }
}

fn parse_point(line: &str) -> Option<String> {
    if let Some(rest) = line.strip_prefix(BULLET_MARKERS) {
        return Some(rest.trim().to_string());
    }

    if NUMBERED_LINE_RE.is_match(line) {
        return line
            .split_once('.')
            .map(|(_, tail)| tail.trim())
            .filter(|tail| !tail.is_empty())
            .map(str::to_string);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_bullets() {
        assert_eq!(extract_points("- a\n- b\n- c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_mixed_bullet_markers() {
        let raw = "• first point\n*   second point\n-third point";
        assert_eq!(
            extract_points(raw),
            vec!["first point", "second point", "third point"]
        );
    }

    #[test]
    fn test_numbered_list() {
        assert_eq!(extract_points("1. x\n2. y"), vec!["x", "y"]);
        assert_eq!(
            extract_points("10. tenth item\n11.eleventh"),
            vec!["tenth item", "eleventh"]
        );
    }

    #[test]
    fn test_numbered_line_splits_on_first_period_only() {
        assert_eq!(
            extract_points("1. Version 2.0 shipped."),
            vec!["Version 2.0 shipped."]
        );
    }

    #[test]
    fn test_numbered_line_without_content_is_dropped() {
        assert_eq!(extract_points("1.\n2. kept"), vec!["kept"]);
    }

    #[test]
    fn test_unmarked_lines_are_discarded() {
        let raw = "Here is your summary:\n\n- one\n  - two  \nThanks for reading";
        assert_eq!(extract_points(raw), vec!["one", "two"]);
    }

    #[test]
    fn test_period_before_digit_is_not_numbered() {
        let raw = "Summary. Nothing numbered here 42";
        assert_eq!(extract_points(raw), vec![raw]);
    }

    #[test]
    fn test_no_markers_falls_back_to_whole_text() {
        let raw = "  The talk covers databases\nand caching.  ";
        assert_eq!(extract_points(raw), vec![raw]);
    }

    #[test]
    fn test_empty_input_yields_no_points() {
        assert!(extract_points("").is_empty());
    }

    #[test]
    fn test_duplicate_markers_are_kept() {
        assert_eq!(extract_points("- - nested\n- a\n- a"), vec!["- nested", "a", "a"]);
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(extract_points("- a\r\n- b\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_marked_points_lose_their_marker() {
        let raw = "Intro\n- alpha\n* beta\n• gamma\n3. delta";
        let points = extract_points(raw);

        assert_eq!(points.len(), 4);
        for point in &points {
            assert!(!point.starts_with(BULLET_MARKERS), "marker kept in {point:?}");
            assert!(!point.starts_with("3."), "number kept in {point:?}");
        }
    }
}
