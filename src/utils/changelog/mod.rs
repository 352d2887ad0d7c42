// changelog heading validation

pub mod config;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::ChangelogConfig;
pub use parser::load_document;
pub use types::{Document, Heading, ValidationReport};
pub use validator::{
    ChangelogValidator, find_invalid_sections, find_invalid_versions, validate_changelog,
};
