//! Unified line diffs for mismatch reporting.
//!
//! Produces classic unified-diff text with three lines of context, the
//! format readers already know from version control. Comparison is at
//! line granularity over an LCS edit script.

const CONTEXT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit<'a> {
    Equal(&'a str),
    Delete(&'a str),
    Insert(&'a str),
}

/// Line-level edit script turning `expected` into `actual`.
fn edit_script<'a>(expected: &[&'a str], actual: &[&'a str]) -> Vec<Edit<'a>> {
    let m = expected.len();
    let n = actual.len();

    // lcs[i][j] is the longest common subsequence of expected[i..] and
    // actual[j..].
    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            lcs[i][j] = if expected[i] == actual[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut edits = Vec::with_capacity(m + n);
    let mut i = 0;
    let mut j = 0;
    while i < m && j < n {
        if expected[i] == actual[j] {
            edits.push(Edit::Equal(expected[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            edits.push(Edit::Delete(expected[i]));
            i += 1;
        } else {
            edits.push(Edit::Insert(actual[j]));
            j += 1;
        }
    }
    while i < m {
        edits.push(Edit::Delete(expected[i]));
        i += 1;
    }
    while j < n {
        edits.push(Edit::Insert(actual[j]));
        j += 1;
    }
    edits
}

/// Format a hunk range from a zero-based start line and a line count.
///
/// One-based "ed" ranges: a count of one shows just the line number and
/// an empty range begins at the line before it.
fn format_range(start: usize, count: usize) -> String {
    let beginning = start + 1;
    if count == 1 {
        format!("{}", beginning)
    } else if count == 0 {
        format!("{},0", beginning - 1)
    } else {
        format!("{},{}", beginning, count)
    }
}

/// Unified diff between two texts, or `None` when they are equal.
///
/// The labels name the two sides in the `---`/`+++` header lines. Every
/// emitted line ends with a newline, so the result can be printed or
/// indented wholesale.
pub fn unified_diff(
    expected: &str,
    actual: &str,
    expected_label: &str,
    actual_label: &str,
) -> Option<String> {
    if expected == actual {
        return None;
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let edits = edit_script(&expected_lines, &actual_lines);

    let changes: Vec<usize> = edits
        .iter()
        .enumerate()
        .filter(|(_, edit)| !matches!(edit, Edit::Equal(_)))
        .map(|(index, _)| index)
        .collect();

    let mut out = String::new();
    out.push_str(&format!("--- {}\n", expected_label));
    out.push_str(&format!("+++ {}\n", actual_label));

    if changes.is_empty() {
        // Equal at line granularity, so the texts can only disagree in
        // line terminators.
        out.push_str("(texts differ only in line endings or trailing newlines)\n");
        return Some(out);
    }

    // Two changes share a hunk when at most 2*CONTEXT equal lines
    // separate them.
    let mut groups: Vec<(usize, usize)> = Vec::new();
    for &index in &changes {
        match groups.last_mut() {
            Some((_, hi)) if index - *hi <= 2 * CONTEXT + 1 => *hi = index,
            _ => groups.push((index, index)),
        }
    }

    // Lines of each side consumed before each edit position.
    let mut expected_off = Vec::with_capacity(edits.len() + 1);
    let mut actual_off = Vec::with_capacity(edits.len() + 1);
    let mut expected_pos = 0;
    let mut actual_pos = 0;
    for edit in &edits {
        expected_off.push(expected_pos);
        actual_off.push(actual_pos);
        match edit {
            Edit::Equal(_) => {
                expected_pos += 1;
                actual_pos += 1;
            }
            Edit::Delete(_) => expected_pos += 1,
            Edit::Insert(_) => actual_pos += 1,
        }
    }
    expected_off.push(expected_pos);
    actual_off.push(actual_pos);

    for &(first, last) in &groups {
        let start = first.saturating_sub(CONTEXT);
        let end = (last + CONTEXT).min(edits.len() - 1);

        let expected_count = expected_off[end + 1] - expected_off[start];
        let actual_count = actual_off[end + 1] - actual_off[start];
        out.push_str(&format!(
            "@@ -{} +{} @@\n",
            format_range(expected_off[start], expected_count),
            format_range(actual_off[start], actual_count)
        ));

        for edit in &edits[start..=end] {
            let (marker, line) = match edit {
                Edit::Equal(line) => (' ', line),
                Edit::Delete(line) => ('-', line),
                Edit::Insert(line) => ('+', line),
            };
            out.push(marker);
            out.push_str(line);
            out.push('\n');
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_have_no_diff() {
        assert_eq!(unified_diff("same", "same", "a", "b"), None);
        assert_eq!(unified_diff("", "", "a", "b"), None);
    }

    #[test]
    fn test_single_line_change() {
        let diff = unified_diff("Hello, world!", "Hello, World!", "golden", "rendered").unwrap();
        assert_eq!(
            diff,
            "--- golden\n\
             +++ rendered\n\
             @@ -1 +1 @@\n\
             -Hello, world!\n\
             +Hello, World!\n"
        );
    }

    #[test]
    fn test_appended_line() {
        let diff = unified_diff(
            "line one\nline two\n",
            "line one\nline two\nline three\n",
            "golden",
            "rendered",
        )
        .unwrap();
        assert_eq!(
            diff,
            "--- golden\n\
             +++ rendered\n\
             @@ -1,2 +1,3 @@\n\
             \x20line one\n\
             \x20line two\n\
             +line three\n"
        );
    }

    #[test]
    fn test_empty_expected_side() {
        let diff = unified_diff("", "something", "golden", "rendered").unwrap();
        assert_eq!(
            diff,
            "--- golden\n\
             +++ rendered\n\
             @@ -0,0 +1 @@\n\
             +something\n"
        );
    }

    #[test]
    fn test_empty_actual_side() {
        let diff = unified_diff("something", "", "golden", "rendered").unwrap();
        assert_eq!(
            diff,
            "--- golden\n\
             +++ rendered\n\
             @@ -1 +0,0 @@\n\
             -something\n"
        );
    }

    #[test]
    fn test_trailing_newline_only_difference() {
        let diff = unified_diff("text\n", "text", "golden", "rendered").unwrap();
        assert!(diff.contains("--- golden\n+++ rendered\n"));
        assert!(diff.contains("line endings or trailing newlines"));
    }

    #[test]
    fn test_context_is_capped_at_three_lines() {
        let expected: String = (1..=10).map(|i| format!("line {}\n", i)).collect();
        let actual = expected.replace("line 10", "LINE 10");
        let diff = unified_diff(&expected, &actual, "golden", "rendered").unwrap();

        assert!(diff.contains("@@ -7,4 +7,4 @@\n"));
        assert!(!diff.contains("line 6"));
        assert!(diff.contains(" line 7\n"));
        assert!(diff.contains("-line 10\n"));
        assert!(diff.contains("+LINE 10\n"));
    }

    #[test]
    fn test_distant_changes_split_into_hunks() {
        let expected: String = (1..=20).map(|i| format!("line {}\n", i)).collect();
        let actual = expected
            .replace("line 1\n", "LINE 1\n")
            .replace("line 20", "LINE 20");
        let diff = unified_diff(&expected, &actual, "golden", "rendered").unwrap();

        assert_eq!(diff.matches("@@").count(), 4); // two hunk headers
        assert!(diff.contains("@@ -1,4 +1,4 @@\n"));
        assert!(diff.contains("@@ -17,4 +17,4 @@\n"));
    }

    #[test]
    fn test_nearby_changes_share_a_hunk() {
        let expected = "A\n2\n3\n4\nB\n";
        let actual = "X\n2\n3\n4\nY\n";
        let diff = unified_diff(expected, actual, "golden", "rendered").unwrap();

        assert_eq!(diff.matches("@@").count(), 2); // one hunk header
        assert!(diff.contains("@@ -1,5 +1,5 @@\n"));
        assert!(diff.contains("-A\n"));
        assert!(diff.contains("+X\n"));
        assert!(diff.contains("-B\n"));
        assert!(diff.contains("+Y\n"));
    }

    #[test]
    fn test_full_replacement() {
        let diff = unified_diff("old one\nold two\n", "new one\n", "golden", "rendered").unwrap();
        assert!(diff.contains("-old one\n"));
        assert!(diff.contains("-old two\n"));
        assert!(diff.contains("+new one\n"));
    }

    #[test]
    fn test_diff_is_deterministic() {
        let expected = "a\nb\nc\n";
        let actual = "a\nx\nc\n";
        let first = unified_diff(expected, actual, "golden", "rendered").unwrap();
        let second = unified_diff(expected, actual, "golden", "rendered").unwrap();
        assert_eq!(first, second);
    }

    // ===========================================
    // Range Formatting Tests
    // ===========================================

    #[test]
    fn test_format_range_single_line() {
        assert_eq!(format_range(0, 1), "1");
        assert_eq!(format_range(6, 1), "7");
    }

    #[test]
    fn test_format_range_multi_line() {
        assert_eq!(format_range(0, 3), "1,3");
        assert_eq!(format_range(16, 4), "17,4");
    }

    #[test]
    fn test_format_range_empty() {
        assert_eq!(format_range(0, 0), "0,0");
        assert_eq!(format_range(5, 0), "5,0");
    }
}
