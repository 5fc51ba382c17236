use validation_harness_core::{HarnessReport, RunMode, SuiteKind};

const RULE_WIDTH: usize = 60;

/// Final banner: one line per suite plus the overall verdict.
pub fn format_summary(report: &HarnessReport, mode: RunMode) -> String {
    let mut lines = vec!["=".repeat(RULE_WIDTH), "Validation summary".to_string()];
    lines.push("-".repeat(RULE_WIDTH));

    for suite in [SuiteKind::Compiled, SuiteKind::Notebooks] {
        let line = match report.get(suite) {
            Some(result) => format!(
                "{:<18} {:<7} exit code {:<4} {}s",
                suite.label(),
                if result.passed() { "PASSED" } else { "FAILED" },
                result.exit_code,
                result.elapsed_seconds
            ),
            None => format!("{:<18} SKIPPED", suite.label()),
        };
        lines.push(line);
    }

    if report
        .notebooks
        .as_ref()
        .is_some_and(|result| !result.passed())
    {
        lines.push("note: notebook failures are reported but do not change the exit code".into());
    }

    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!(
        "Overall ({mode:?}): {}",
        if report.is_failure() { "FAILED" } else { "PASSED" }
    ));
    lines.push("=".repeat(RULE_WIDTH));
    lines.join("\n")
}

pub fn print_summary(report: &HarnessReport, mode: RunMode) {
    println!("{}", format_summary(report, mode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use validation_harness_core::SuiteResult;

    #[test]
    fn test_skipped_suite_is_marked() {
        let mut report = HarnessReport::default();
        report.record(SuiteResult::new(SuiteKind::Compiled, 0, Duration::from_secs(42)));
        let summary = format_summary(&report, RunMode::CompiledOnly);

        assert!(summary.contains("C++ examples       PASSED  exit code 0    42s"));
        assert!(summary.contains("Python notebooks   SKIPPED"));
        assert!(summary.contains("Overall (CompiledOnly): PASSED"));
    }

    #[test]
    fn test_notebook_failure_noted_but_overall_passes() {
        let mut report = HarnessReport::default();
        report.record(SuiteResult::new(SuiteKind::Compiled, 0, Duration::from_secs(1)));
        report.record(SuiteResult::new(SuiteKind::Notebooks, 1, Duration::from_secs(3)));
        let summary = format_summary(&report, RunMode::All);

        assert!(summary.contains("Python notebooks   FAILED"));
        assert!(summary.contains("do not change the exit code"));
        assert!(summary.contains("Overall (All): PASSED"));
    }

    #[test]
    fn test_compiled_failure_fails_overall() {
        let mut report = HarnessReport::default();
        report.record(SuiteResult::new(SuiteKind::Compiled, 2, Duration::ZERO));
        let summary = format_summary(&report, RunMode::All);
        assert!(summary.contains("FAILED  exit code 2"));
        assert!(summary.ends_with(&format!("Overall (All): FAILED\n{}", "=".repeat(60))));
    }
}
