// changelog loading and heading extraction

use super::types::{Document, Heading};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// read a changelog file into a document
///
/// invalid UTF-8 is replaced with U+FFFD rather than rejected
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let document = Document::from_text(path, &content);
    debug!(
        "loaded {} ({} bytes, {} lines)",
        path.display(),
        content.len(),
        document.len()
    );

    Ok(document)
}

/// all heading lines with their 1-based line numbers, in document order
pub fn headings<S: AsRef<str>>(lines: &[S]) -> impl Iterator<Item = (usize, Heading<'_>)> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| Heading::classify(line.as_ref()).map(|h| (idx + 1, h)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_document_splits_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# Changelog\n\n## [Unreleased]\n### Added\n").unwrap();

        let document = load_document(file.path()).unwrap();
        assert_eq!(
            document.lines(),
            &["# Changelog", "", "## [Unreleased]", "### Added"]
        );
        assert_eq!(document.path(), file.path());
    }

    #[test]
    fn test_load_document_decodes_invalid_utf8_lossily() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"### Added\n### Fix\xffed\n").unwrap();

        let document = load_document(file.path()).unwrap();
        assert_eq!(document.lines(), &["### Added", "### Fix\u{fffd}ed"]);
    }

    #[test]
    fn test_load_document_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("CHANGELOG.md");

        match load_document(&missing) {
            Err(Error::FileReadError { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected FileReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_headings_keep_line_numbers() {
        let lines = ["# Changelog", "## [Unreleased]", "- entry", "### Added"];
        let found: Vec<_> = headings(&lines).map(|(n, h)| (n, h.line())).collect();
        assert_eq!(found, vec![(2, "## [Unreleased]"), (4, "### Added")]);
    }

    #[test]
    fn test_headings_inside_code_fence_are_still_headings() {
        let lines = ["```", "## not really a heading", "```"];
        assert_eq!(headings(&lines).count(), 1);
    }
}
