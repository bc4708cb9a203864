//! Shared test tooling: scenario manifests and transcript diffs.

pub mod scenario;

pub use scenario::{Expectation, SCENARIOS_FORMAT_V1, Scenario, Step, StepAction, load_scenarios};

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    use std::fmt::Write;
    let missing = "<missing>";
    let mismatch = (0..max).find(|&i| expected.get(i) != actual.get(i));

    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for line_idx in start..end {
            let left = expected
                .get(line_idx)
                .map(String::as_str)
                .unwrap_or(missing);
            let right = actual.get(line_idx).map(String::as_str).unwrap_or(missing);
            let marker = if line_idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", line_idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", line_idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_points_at_first_mismatch() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let actual = vec!["a".to_string(), "c".to_string(), "d".to_string()];

        let report = diff_lines(&expected, &actual);

        assert!(report.starts_with("first mismatch at line 2"));
        assert!(report.contains("expected: b"));
        assert!(report.contains("actual: c"));
        assert!(report.contains("expected: <missing>"));
        assert!(report.ends_with("expected 2 lines, actual 3 lines\n"));
    }

    #[test]
    fn diff_of_equal_inputs_only_reports_lengths() {
        let lines = vec!["same".to_string()];
        assert_eq!(
            diff_lines(&lines, &lines),
            "expected 1 lines, actual 1 lines\n"
        );
    }
}
