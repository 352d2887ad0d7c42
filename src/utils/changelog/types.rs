// changelog data structures

use crate::utils::issue::Issue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SECTION_PREFIX: &str = "###";
pub const VERSION_PREFIX: &str = "## ";

/// a changelog file, read once and split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    pub fn new(path: PathBuf, lines: Vec<String>) -> Self {
        Self { path, lines }
    }

    /// build a document from in-memory text, splitting it the same way a file is split
    ///
    /// lines are split on `\n` only, so a `\r` stays part of the line; the
    /// empty piece after a trailing newline is dropped
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            body.split('\n').map(str::to_string).collect()
        };
        Self::new(path.into(), lines)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// a line recognized as a heading by its prefix alone
///
/// no markdown parsing is done: a line inside a code fence that starts with
/// `## ` is still a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading<'a> {
    /// `###...` line; `label` is `None` when no space follows the prefix
    Section {
        line: &'a str,
        label: Option<&'a str>,
    },
    /// `## ...` line
    Version { line: &'a str },
}

impl<'a> Heading<'a> {
    /// classify a line, returning `None` for anything that is not a heading
    pub fn classify(line: &'a str) -> Option<Self> {
        if let Some(rest) = line.strip_prefix(SECTION_PREFIX) {
            return Some(Heading::Section {
                line,
                label: rest.strip_prefix(' '),
            });
        }

        if line.starts_with(VERSION_PREFIX) {
            return Some(Heading::Version { line });
        }

        None
    }

    pub fn line(&self) -> &'a str {
        match self {
            Heading::Section { line, .. } | Heading::Version { line } => line,
        }
    }
}

/// outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub invalid_sections: Vec<Issue>,
    pub invalid_versions: Vec<Issue>,
}

impl ValidationReport {
    pub fn new(path: PathBuf, invalid_sections: Vec<Issue>, invalid_versions: Vec<Issue>) -> Self {
        Self {
            path,
            invalid_sections,
            invalid_versions,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_sections.is_empty() && self.invalid_versions.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.invalid_sections.len() + self.invalid_versions.len()
    }

    /// all issues, sections first, each group in document order
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.invalid_sections.iter().chain(&self.invalid_versions)
    }
}
