use line_diff::{DiffError, EditKind, EditOp, Side, TextDiff};
use pretty_assertions::assert_eq;

#[test]
fn test_newlines_at_end() {
    // Test handling of texts with and without trailing newlines

    // Both with trailing newlines: the empty last line matches
    let result = TextDiff::diff("Line 1\nLine 2\n", "Line 1\nLine X\n").unwrap();
    assert_eq!(result.stats.unchanged, 2);

    // Old with trailing newline, new without
    let result = TextDiff::diff("Line 1\nLine 2\n", "Line 1\nLine 2").unwrap();
    assert_eq!(result.stats.removed, 1);
    assert_eq!(result.stats.added, 0);
    assert_eq!(
        result.script.ops().last(),
        Some(&EditOp::Removed {
            left_index: 2,
            content: String::new()
        })
    );

    // Old without trailing newline, new with
    let result = TextDiff::diff("Line 1\nLine 2", "Line 1\nLine 2\n").unwrap();
    assert_eq!(result.stats.added, 1);
    assert_eq!(result.stats.removed, 0);
}

#[test]
fn test_one_side_empty() {
    // Empty text is a single empty line, so it can match a blank line
    let result = TextDiff::diff("", "Line 1\nLine 2").unwrap();
    assert_eq!(result.stats.removed, 1);
    assert_eq!(result.stats.added, 2);
    assert_eq!(result.stats.unchanged, 0);

    let result = TextDiff::diff("Line 1\n", "").unwrap();
    assert_eq!(result.stats.removed, 1);
    assert_eq!(result.stats.unchanged, 1);
}

#[test]
fn test_carriage_returns_are_content() {
    // Only '\n' splits lines, so CRLF and LF versions of a line differ
    let result = TextDiff::diff("a\r\nb", "a\nb").unwrap();

    assert_eq!(result.stats.removed, 1);
    assert_eq!(result.stats.added, 1);
    assert_eq!(result.stats.unchanged, 1);
}

#[test]
fn test_whitespace_normalization_joins_lines() {
    // Line breaks are whitespace, so the texts compare as single lines
    let result = TextDiff::configure()
        .ignore_whitespace(true)
        .diff("one\ntwo\nthree", "one two four")
        .unwrap();

    assert_eq!(result.script.len(), 2);
    assert_eq!(
        result
            .script
            .iter()
            .map(EditOp::kind)
            .collect::<Vec<_>>(),
        vec![EditKind::Removed, EditKind::Added]
    );
}

#[test]
fn test_very_large_diff() {
    let mut old = String::new();
    let mut new = String::new();

    // 1000 lines
    for i in 0..1000 {
        old.push_str(&format!("Line {} of old text\n", i));

        // Make every 10th line different
        if i % 10 == 0 {
            new.push_str(&format!("MODIFIED Line {} of new text\n", i));
        } else {
            new.push_str(&format!("Line {} of old text\n", i));
        }
    }

    let result = TextDiff::diff(&old, &new).unwrap();

    assert_eq!(result.stats.added, 100);
    assert_eq!(result.stats.removed, 100);
    assert_eq!(result.stats.unchanged, 901);
}

#[test]
fn test_line_ceiling() {
    let text = "a\nb\nc\nd";
    let config = TextDiff::configure().max_lines(Some(3));

    let err = config.diff(text, "a").unwrap_err();
    assert_eq!(
        err,
        DiffError::InputTooLarge {
            side: Side::Left,
            lines: 4,
            limit: 3,
        }
    );
    assert_eq!(
        err.to_string(),
        "left input has 4 lines, exceeding the limit of 3"
    );

    // The ceiling applies to the normalized lines
    let result = config.ignore_whitespace(true).diff(text, "a").unwrap();
    assert_eq!(result.script.len(), 2);
}

#[test]
fn test_unicode_text() {
    let old = "Line 1\nLine 2 🚀\nLine 3 😊\n";
    let new = "Line 1\nLine 2 🚀\nLine 3 🎉\n";

    let result = TextDiff::diff(old, new).unwrap();

    assert_eq!(result.stats.removed, 1);
    assert_eq!(result.stats.added, 1);
    assert!(result.rendered.to_string().contains("😊"));
    assert!(result.rendered.to_string().contains("🎉"));
}

#[test]
fn test_unicode_case_folding() {
    let result = TextDiff::configure()
        .ignore_case(true)
        .diff("ÄPFEL", "äpfel")
        .unwrap();

    assert!(result.identical);
}
