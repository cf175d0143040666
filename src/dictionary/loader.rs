//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::Dictionary;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be read
    Io { path: PathBuf, source: io::Error },
    /// The word list contained no usable words
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Load a dictionary from a newline-delimited word list
///
/// Entries are trimmed and lowercased; blank lines and entries with
/// characters other than ASCII letters are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::Empty` if no usable word remains.
///
/// # Examples
/// ```no_run
/// use wordsmush::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_words(content.lines());
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty);
    }

    info!(words = dictionary.len(), "loaded word list");
    Ok(dictionary)
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use wordsmush::dictionary::WORDS;
/// use wordsmush::dictionary::loader::words_from_slice;
///
/// let dictionary = words_from_slice(WORDS);
/// assert!(dictionary.contains("planting"));
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn word_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let dictionary = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.words(), &["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let dictionary = words_from_slice(&["crane", "it's", "", "  ", "caf\u{e9}", "slate"]);

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("slate"));
    }

    #[test]
    fn words_from_slice_empty() {
        let dictionary = words_from_slice(&[]);
        assert!(dictionary.is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let file = word_file("Cat\n\nbat \r\ncab\n");

        let dictionary = load_from_file(file.path()).unwrap();

        assert_eq!(dictionary.words(), &["cat", "bat", "cab"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = load_from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().contains("Failed to read word list"));
    }

    #[test]
    fn load_from_file_without_words_fails() {
        let file = word_file("\n  \n123\n");

        let result = load_from_file(file.path());

        assert!(matches!(result, Err(DictionaryError::Empty)));
    }
}
