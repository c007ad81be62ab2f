//! Line-oriented diff generator
//!
//! Longest-common-subsequence diff over two multiline strings, used to
//! show expected vs actual values in failure messages. Context lines are
//! prefixed with two spaces, removals with `"- "`, insertions with
//! `"+ "`.

/// One backtracked diff operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Equal,
    Delete,
    Insert,
}

/// Compute a unified line diff from `old` to `new`.
///
/// An empty input contributes zero lines, so diffing against `""`
/// produces pure insertions or pure removals. On a mismatch the
/// backtrack removes the old line before inserting the new one whenever
/// the table allows either, which keeps the output deterministic.
#[must_use]
pub fn diff(old: &str, new: &str) -> String {
    let a = split_lines(old);
    let b = split_lines(new);
    let m = a.len();
    let n = b.len();

    // LCS length table, (m + 1) x (n + 1).
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    let mut i = m;
    let mut j = n;
    let mut parts: Vec<(Op, &str)> = Vec::with_capacity(m + n);

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            parts.push((Op::Equal, a[i - 1]));
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            parts.push((Op::Delete, a[i - 1]));
            i -= 1;
        } else {
            parts.push((Op::Insert, b[j - 1]));
            j -= 1;
        }
    }
    while i > 0 {
        parts.push((Op::Delete, a[i - 1]));
        i -= 1;
    }
    while j > 0 {
        parts.push((Op::Insert, b[j - 1]));
        j -= 1;
    }

    // The backtrack walked end to start; restore original order.
    let lines: Vec<String> = parts
        .into_iter()
        .rev()
        .map(|(op, line)| match op {
            Op::Equal => format!("  {line}"),
            Op::Delete => format!("- {line}"),
            Op::Insert => format!("+ {line}"),
        })
        .collect();
    lines.join("\n")
}

fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identical_inputs_are_all_context() {
        let text = "line 1\nline 2\nline 3";
        assert_eq!(diff(text, text), "  line 1\n  line 2\n  line 3");
    }

    #[test]
    fn empty_old_is_pure_insertion() {
        assert_eq!(diff("", "a\nb"), "+ a\n+ b");
    }

    #[test]
    fn empty_new_is_pure_removal() {
        assert_eq!(diff("a\nb", ""), "- a\n- b");
    }

    #[test]
    fn both_empty_is_empty() {
        assert_eq!(diff("", ""), "");
    }

    #[test]
    fn interleaved_changes_keep_context_anchors() {
        assert_eq!(
            diff("a\nb\nc\nd", "a\nx\nc\ny"),
            "  a\n+ x\n- b\n  c\n+ y\n- d"
        );
    }

    #[test]
    fn fully_disjoint_inputs_insert_then_remove() {
        assert_eq!(diff("1\n2\n3", "a\nb\nc"), "+ a\n+ b\n+ c\n- 1\n- 2\n- 3");
    }

    #[test]
    fn single_line_replacement() {
        assert_eq!(diff("old", "new"), "+ new\n- old");
    }

    #[test]
    fn stripped_output_reconstructs_both_inputs() {
        let old = "shared\nremoved\nalso shared";
        let new = "shared\nadded\nalso shared\ntrailing";
        let output = diff(old, new);

        let old_lines: Vec<&str> = output
            .lines()
            .filter(|line| !line.starts_with("+ "))
            .map(|line| &line[2..])
            .collect();
        let new_lines: Vec<&str> = output
            .lines()
            .filter(|line| !line.starts_with("- "))
            .map(|line| &line[2..])
            .collect();

        assert_eq!(old_lines.join("\n"), old);
        assert_eq!(new_lines.join("\n"), new);
    }
}
