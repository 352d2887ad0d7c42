use serde::{Deserialize, Serialize};
use std::fmt;

/// which changelog rule a line violates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// `###` heading whose label is not a recognized section
    InvalidSection,
    /// `## ` heading that is neither the placeholder nor `## [x.y.z] - yyyy-mm-dd`
    InvalidVersionHeader,
}

impl IssueType {
    /// header line printed above the offending lines of this kind
    pub fn report_header(&self) -> &'static str {
        match self {
            IssueType::InvalidSection => {
                "Found invalid changelog sections! The invalid sections are:"
            }
            IssueType::InvalidVersionHeader => {
                "Found invalid changelog version headers! The invalid version headers are:"
            }
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::InvalidSection => write!(f, "invalid_section"),
            IssueType::InvalidVersionHeader => write!(f, "invalid_version_header"),
        }
    }
}

/// a single offending line in the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// rule that was violated
    pub issue_type: IssueType,
    /// 1-based line number in the document
    pub line_number: usize,
    /// the offending line, verbatim
    pub line: String,
}

impl Issue {
    pub fn new(issue_type: IssueType, line_number: usize, line: impl Into<String>) -> Self {
        Self {
            issue_type,
            line_number,
            line: line.into(),
        }
    }

    pub fn is_section_issue(&self) -> bool {
        self.issue_type == IssueType::InvalidSection
    }

    pub fn is_version_issue(&self) -> bool {
        self.issue_type == IssueType::InvalidVersionHeader
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.line)
    }
}
