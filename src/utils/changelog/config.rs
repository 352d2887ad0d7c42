// changelog rule configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHANGELOG_FILE_NAME: &str = "CHANGELOG.md";
pub const DEFAULT_UNRELEASED_HEADING: &str = "## [Unreleased]";
pub const DEFAULT_VERSION_PATTERN: &str =
    r"^## \[[0-9]+\.[0-9]+\.[0-9]+\] - [0-9]{4}-[0-9]{2}-[0-9]{2}$";
pub const DEFAULT_ALLOWED_SECTIONS: [&str; 6] = [
    "Added",
    "Changed",
    "Deprecated",
    "Removed",
    "Fixed",
    "Security",
];

/// configuration for changelog validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// name of the changelog file (default: "CHANGELOG.md")
    pub changelog_file_name: String,

    /// labels accepted after `### `
    pub allowed_sections: Vec<String>,

    /// the one `##` heading exempt from the version pattern
    pub unreleased_heading: String,

    /// pattern every other `##` heading must match
    pub version_pattern: String,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changelog_file_name(mut self, name: impl Into<String>) -> Self {
        self.changelog_file_name = name.into();
        self
    }

    pub fn allowed_sections(mut self, sections: Vec<String>) -> Self {
        self.allowed_sections = sections;
        self
    }

    pub fn unreleased_heading(mut self, heading: impl Into<String>) -> Self {
        self.unreleased_heading = heading.into();
        self
    }

    pub fn version_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.version_pattern = pattern.into();
        self
    }

    /// check if a section label is allowed (exact, case-sensitive)
    pub fn is_allowed_section(&self, label: &str) -> bool {
        self.allowed_sections.iter().any(|s| s == label)
    }

    /// true when the version pattern is the built-in one
    pub fn uses_default_pattern(&self) -> bool {
        self.version_pattern == DEFAULT_VERSION_PATTERN
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            changelog_file_name: DEFAULT_CHANGELOG_FILE_NAME.to_string(),
            allowed_sections: DEFAULT_ALLOWED_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            unreleased_heading: DEFAULT_UNRELEASED_HEADING.to_string(),
            version_pattern: DEFAULT_VERSION_PATTERN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allowed_sections() {
        let config = ChangelogConfig::default();
        for label in DEFAULT_ALLOWED_SECTIONS {
            assert!(config.is_allowed_section(label));
        }
        assert!(!config.is_allowed_section("added"));
        assert!(!config.is_allowed_section("Unsupported"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ChangelogConfig::new()
            .changelog_file_name("HISTORY.md")
            .allowed_sections(vec!["Features".to_string()])
            .unreleased_heading("## Unreleased");

        assert_eq!(config.changelog_file_name, "HISTORY.md");
        assert!(config.is_allowed_section("Features"));
        assert!(!config.is_allowed_section("Added"));
        assert_eq!(config.unreleased_heading, "## Unreleased");
        assert!(config.uses_default_pattern());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ChangelogConfig = toml::from_str(r#"changelog_file_name = "NEWS.md""#).unwrap();
        assert_eq!(config.changelog_file_name, "NEWS.md");
        assert_eq!(config.unreleased_heading, DEFAULT_UNRELEASED_HEADING);
        assert_eq!(config.allowed_sections.len(), 6);
    }
}
