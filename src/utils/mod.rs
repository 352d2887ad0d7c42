pub mod changelog;
pub mod config;
pub mod issue;
pub mod report;

pub mod testing;
