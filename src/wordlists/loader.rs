//! Word list loading utilities
//!
//! Word files come in two shapes: a single comma-separated line (CSV export)
//! or one word per line. Both are accepted.

use super::WordListError;
use std::fs;
use std::path::Path;

/// Split word-file content into entries
///
/// Commas and any whitespace separate entries; empty entries are dropped.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_word_list;
///
/// assert_eq!(parse_word_list("crane,slate\nrobot"), ["crane", "slate", "robot"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<&str> {
    content
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Load raw words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/english/easy.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = parse_word_list(&content)
        .into_iter()
        .map(str::to_string)
        .collect();
    log::debug!("Read {} entries from {}", words.len(), path.display());

    Ok(words)
}

/// Convert an embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_csv_line() {
        assert_eq!(
            parse_word_list("crane,slate, irate ,"),
            ["crane", "slate", "irate"]
        );
    }

    #[test]
    fn parse_one_per_line() {
        assert_eq!(
            parse_word_list("crane\r\nslate\n\n  irate\n"),
            ["crane", "slate", "irate"]
        );
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list(" ,\n, ").is_empty());
    }

    #[test]
    fn words_from_slice_copies() {
        let words = words_from_slice(&["crane", "robot"]);
        assert_eq!(words, ["crane", "robot"]);
    }

    #[test]
    fn load_from_file_reads_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "żółwi,kotek\npiesek").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, ["żółwi", "kotek", "piesek"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
