// builder for creating changelog fixtures on disk

use crate::utils::changelog::ChangelogConfig;
use crate::utils::config::CONFIG_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// a release to be written as a `##` heading followed by its sections
#[derive(Debug, Clone)]
pub struct TestRelease {
    pub heading: String,
    pub sections: Vec<(String, Vec<String>)>, // label -> entries
}

impl TestRelease {
    /// `## [Unreleased]`
    pub fn unreleased() -> Self {
        Self::raw("## [Unreleased]")
    }

    /// `## [version] - date`
    pub fn new(version: &str, date: &str) -> Self {
        Self::raw(format!("## [{}] - {}", version, date))
    }

    /// a release with an arbitrary heading line, valid or not
    pub fn raw(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, label: impl Into<String>, entries: &[&str]) -> Self {
        self.sections.push((
            label.into(),
            entries.iter().map(|e| e.to_string()).collect(),
        ));
        self
    }

    fn render(&self, out: &mut String) {
        out.push_str(&self.heading);
        out.push_str("\n\n");
        for (label, entries) in &self.sections {
            out.push_str(&format!("### {}\n\n", label));
            for entry in entries {
                out.push_str(&format!("- {}\n", entry));
            }
            out.push('\n');
        }
    }
}

/// builder for a directory holding a changelog and optional config
pub struct TestChangelog {
    file_name: String,
    releases: Vec<TestRelease>,
    raw_content: Option<String>,
    config: Option<String>,
}

impl TestChangelog {
    pub fn new() -> Self {
        Self {
            file_name: "CHANGELOG.md".to_string(),
            releases: Vec::new(),
            raw_content: None,
            config: None,
        }
    }

    /// write the changelog under another name
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn release(mut self, release: TestRelease) -> Self {
        self.releases.push(release);
        self
    }

    /// use this text verbatim instead of rendering releases
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.raw_content = Some(content.into());
        self
    }

    /// also write a `changelint.toml` with this `[changelog]` table
    pub fn config(mut self, config: &ChangelogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        #[derive(serde::Serialize)]
        struct Wrapper<'a> {
            changelog: &'a ChangelogConfig,
        }
        self.config = Some(toml::to_string(&Wrapper { changelog: config })?);
        Ok(self)
    }

    /// render the changelog text without touching the filesystem
    pub fn render(&self) -> String {
        if let Some(content) = &self.raw_content {
            return content.clone();
        }

        let mut out = String::from("# Changelog\n\n");
        out.push_str("All notable changes to this project will be documented in this file.\n\n");
        for release in &self.releases {
            release.render(&mut out);
        }
        out
    }

    /// write everything into a fresh temporary directory
    pub fn build(self) -> Result<TestChangelogDir, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let changelog_path = temp_dir.path().join(&self.file_name);

        fs::write(&changelog_path, self.render())?;

        if let Some(config) = &self.config {
            fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config)?;
        }

        Ok(TestChangelogDir {
            changelog_path,
            temp_dir,
        })
    }
}

impl Default for TestChangelog {
    fn default() -> Self {
        Self::new()
    }
}

/// a changelog written to disk, removed when dropped
pub struct TestChangelogDir {
    changelog_path: PathBuf,
    temp_dir: TempDir,
}

impl TestChangelogDir {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn changelog_path(&self) -> &Path {
        &self.changelog_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_releases() {
        let text = TestChangelog::new()
            .release(TestRelease::unreleased().section("Added", &["new flag"]))
            .release(TestRelease::new("1.0.0", "2023-05-01"))
            .render();

        let lines: Vec<_> = text.lines().collect();
        assert!(lines.contains(&"## [Unreleased]"));
        assert!(lines.contains(&"### Added"));
        assert!(lines.contains(&"- new flag"));
        assert!(lines.contains(&"## [1.0.0] - 2023-05-01"));
    }

    #[test]
    fn test_build_writes_files() {
        let dir = TestChangelog::new()
            .file_name("HISTORY.md")
            .content("## [Unreleased]\n")
            .config(&ChangelogConfig::new().changelog_file_name("HISTORY.md"))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(dir.changelog_path(), dir.path().join("HISTORY.md"));
        assert_eq!(
            fs::read_to_string(dir.changelog_path()).unwrap(),
            "## [Unreleased]\n"
        );
        assert!(dir.path().join(CONFIG_FILE_NAME).is_file());
    }
}
