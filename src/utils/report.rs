use crate::error::Result;
use crate::utils::changelog::ValidationReport;
use crate::utils::issue::{Issue, IssueType};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub const VALID_MESSAGE: &str = "Changelog is valid.";

/// how a validation report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    Json,
    #[default]
    Human,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "human" => Ok(ReportFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

/// pass/fail result of a run, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Valid => 0,
            Outcome::Invalid => 1,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a Path,
    valid: bool,
    invalid_sections: &'a [Issue],
    invalid_versions: &'a [Issue],
}

/// write the report to `out` and return the outcome it represents
pub fn write_report<W: Write>(
    report: &ValidationReport,
    format: ReportFormat,
    out: &mut W,
) -> Result<Outcome> {
    match format {
        ReportFormat::Json => {
            let json = JsonReport {
                path: &report.path,
                valid: report.is_valid(),
                invalid_sections: &report.invalid_sections,
                invalid_versions: &report.invalid_versions,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        ReportFormat::Human => {
            if report.is_valid() {
                writeln!(out, "{}", VALID_MESSAGE)?;
            } else {
                write_issue_block(out, IssueType::InvalidSection, &report.invalid_sections)?;
                write_issue_block(out, IssueType::InvalidVersionHeader, &report.invalid_versions)?;
            }
        }
    }

    out.flush()?;

    if report.is_valid() {
        Ok(Outcome::Valid)
    } else {
        Ok(Outcome::Invalid)
    }
}

fn write_issue_block<W: Write>(out: &mut W, issue_type: IssueType, issues: &[Issue]) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", issue_type.report_header())?;
    for issue in issues {
        writeln!(out, "{}", issue.line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(report: &ValidationReport, format: ReportFormat) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = write_report(report, format, &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_valid_report_prints_single_line() {
        let report = ValidationReport::new(PathBuf::from("CHANGELOG.md"), vec![], vec![]);
        let (outcome, text) = render(&report, ReportFormat::Human);

        assert_eq!(outcome, Outcome::Valid);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(text, "Changelog is valid.\n");
    }

    #[test]
    fn test_invalid_report_lists_both_rules() {
        let report = ValidationReport::new(
            PathBuf::from("CHANGELOG.md"),
            vec![Issue::new(IssueType::InvalidSection, 3, "### Broken")],
            vec![Issue::new(
                IssueType::InvalidVersionHeader,
                1,
                "## [1.0] - 2023-05-01",
            )],
        );
        let (outcome, text) = render(&report, ReportFormat::Human);

        assert_eq!(outcome, Outcome::Invalid);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(
            text,
            "Found invalid changelog sections! The invalid sections are:\n### Broken\n\
             Found invalid changelog version headers! The invalid version headers are:\n\
             ## [1.0] - 2023-05-01\n"
        );
    }

    #[test]
    fn test_only_failing_rule_is_reported() {
        let report = ValidationReport::new(
            PathBuf::from("CHANGELOG.md"),
            vec![],
            vec![Issue::new(IssueType::InvalidVersionHeader, 1, "## bad")],
        );
        let (_, text) = render(&report, ReportFormat::Human);
        assert_eq!(
            text,
            "Found invalid changelog version headers! The invalid version headers are:\n## bad\n"
        );
    }

    #[test]
    fn test_json_report() {
        let report = ValidationReport::new(
            PathBuf::from("CHANGELOG.md"),
            vec![Issue::new(IssueType::InvalidSection, 4, "### Broken")],
            vec![],
        );
        let (outcome, text) = render(&report, ReportFormat::Json);
        assert_eq!(outcome, Outcome::Invalid);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["path"], "CHANGELOG.md");
        assert_eq!(value["invalid_sections"][0]["line"], "### Broken");
        assert_eq!(value["invalid_sections"][0]["line_number"], 4);
        assert_eq!(value["invalid_sections"][0]["issue_type"], "invalid_section");
        assert_eq!(value["invalid_versions"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("human".parse::<ReportFormat>(), Ok(ReportFormat::Human));
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
