// changelog validator

use super::config::{ChangelogConfig, DEFAULT_VERSION_PATTERN};
use super::parser::headings;
use super::types::{Document, Heading, ValidationReport};
use crate::error::{Error, Result};
use crate::utils::issue::{Issue, IssueType};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

lazy_static! {
    static ref DEFAULT_VERSION_REGEX: Regex =
        Regex::new(DEFAULT_VERSION_PATTERN).expect("Invalid default version pattern");
    static ref DEFAULT_VALIDATOR: ChangelogValidator = ChangelogValidator {
        config: ChangelogConfig::default(),
        version_regex: DEFAULT_VERSION_REGEX.clone(),
    };
}

/// applies the section and version heading rules to a document
#[derive(Debug, Clone)]
pub struct ChangelogValidator {
    config: ChangelogConfig,
    version_regex: Regex,
}

impl ChangelogValidator {
    /// compile the rules described by a configuration
    pub fn new(config: &ChangelogConfig) -> Result<Self> {
        let version_regex = if config.uses_default_pattern() {
            DEFAULT_VERSION_REGEX.clone()
        } else {
            Regex::new(&config.version_pattern).map_err(|e| Error::InvalidPattern {
                pattern: config.version_pattern.clone(),
                source: e,
            })?
        };

        Ok(Self {
            config: config.clone(),
            version_regex,
        })
    }

    pub fn config(&self) -> &ChangelogConfig {
        &self.config
    }

    /// `###` headings whose label is not an allowed section, in document order
    pub fn find_invalid_sections<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Issue> {
        headings(lines)
            .filter_map(|(line_number, heading)| match heading {
                Heading::Section { line, label } => {
                    let allowed = label.is_some_and(|l| self.config.is_allowed_section(l));
                    trace!("line {}: section '{}' allowed={}", line_number, line, allowed);
                    (!allowed).then(|| Issue::new(IssueType::InvalidSection, line_number, line))
                }
                Heading::Version { .. } => None,
            })
            .collect()
    }

    /// `## ` headings that are neither the placeholder nor a dated version, in document order
    pub fn find_invalid_versions<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Issue> {
        headings(lines)
            .filter_map(|(line_number, heading)| match heading {
                Heading::Version { line } => {
                    if line == self.config.unreleased_heading {
                        return None;
                    }
                    let valid = self.version_regex.is_match(line);
                    trace!("line {}: version '{}' valid={}", line_number, line, valid);
                    (!valid)
                        .then(|| Issue::new(IssueType::InvalidVersionHeader, line_number, line))
                }
                Heading::Section { .. } => None,
            })
            .collect()
    }

    /// run both rules over a document; neither rule stops the other
    pub fn validate(&self, document: &Document) -> ValidationReport {
        let invalid_sections = self.find_invalid_sections(document.lines());
        let invalid_versions = self.find_invalid_versions(document.lines());

        debug!(
            "{}: {} invalid section heading(s), {} invalid version header(s)",
            document.path().display(),
            invalid_sections.len(),
            invalid_versions.len()
        );

        ValidationReport::new(
            document.path().to_path_buf(),
            invalid_sections,
            invalid_versions,
        )
    }
}

impl Default for ChangelogValidator {
    fn default() -> Self {
        DEFAULT_VALIDATOR.clone()
    }
}

/// `###` headings rejected by the default rules
pub fn find_invalid_sections<S: AsRef<str>>(lines: &[S]) -> Vec<Issue> {
    DEFAULT_VALIDATOR.find_invalid_sections(lines)
}

/// `## ` headings rejected by the default rules
pub fn find_invalid_versions<S: AsRef<str>>(lines: &[S]) -> Vec<Issue> {
    DEFAULT_VALIDATOR.find_invalid_versions(lines)
}

/// validate a document against the default rules
pub fn validate_changelog(document: &Document) -> ValidationReport {
    DEFAULT_VALIDATOR.validate(document)
}
