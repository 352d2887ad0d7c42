pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, ChangelogValidator, Document, Heading, ValidationReport,
    find_invalid_sections, find_invalid_versions, load_document, validate_changelog,
};
pub use utils::config::ChangelintConfig;
pub use utils::issue::{Issue, IssueType};
pub use utils::report::{Outcome, ReportFormat, write_report};
