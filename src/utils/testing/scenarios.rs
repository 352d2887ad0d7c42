// pre-defined changelog scenarios

use super::changelog_builder::{TestChangelog, TestChangelogDir, TestRelease};

/// pre-defined test scenarios
pub enum TestScenario {
    /// unreleased placeholder plus one dated release, all sections allowed
    Minimal,
    /// several releases using every allowed section label
    KeepAChangelog,
    /// one unknown section and one version heading without a patch number
    BrokenHeadings,
    /// headings inside a fenced code block, which are still checked
    CodeFence,
}

impl TestScenario {
    /// build a changelog directory from a predefined scenario
    pub fn build(self) -> Result<TestChangelogDir, Box<dyn std::error::Error>> {
        self.changelog().build()
    }

    /// the builder behind a scenario, for tweaking before building
    pub fn changelog(self) -> TestChangelog {
        match self {
            TestScenario::Minimal => TestChangelog::new()
                .release(TestRelease::unreleased().section("Added", &["initial support"]))
                .release(TestRelease::new("1.0.0", "2023-05-01").section("Fixed", &["a crash"])),
            TestScenario::KeepAChangelog => TestChangelog::new()
                .release(TestRelease::unreleased())
                .release(
                    TestRelease::new("1.1.0", "2024-02-10")
                        .section("Added", &["json output"])
                        .section("Changed", &["faster startup"])
                        .section("Deprecated", &["old flag"]),
                )
                .release(
                    TestRelease::new("1.0.1", "2024-01-15")
                        .section("Removed", &["legacy mode"])
                        .section("Fixed", &["off-by-one in line numbers"])
                        .section("Security", &["bumped dependency"]),
                )
                .release(TestRelease::new("0.1.0", "2023-12-31").section("Added", &["first release"])),
            TestScenario::BrokenHeadings => TestChangelog::new()
                .release(TestRelease::unreleased().section("Broken", &["something"]))
                .release(TestRelease::raw("## [1.0] - 2023-05-01").section("Fixed", &["a bug"])),
            TestScenario::CodeFence => TestChangelog::new().content(
                "# Changelog\n\n## [Unreleased]\n\n### Added\n\n```markdown\n### Example\n```\n",
            ),
        }
    }
}
