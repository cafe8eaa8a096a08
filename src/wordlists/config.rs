//! Language configuration
//!
//! A TOML file maps language names to their per-difficulty word files and the
//! extra letters the language needs:
//!
//! ```toml
//! [languages.polish]
//! easy = "polish/easy.txt"
//! medium = "polish/medium.txt"
//! hard = "polish/hard.txt"
//! extra_letters = "ĄĆĘŁŃÓŚŹŻ"
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use super::{Alphabet, WordListError, WordSource, loader};
use crate::core::Difficulty;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown language '{name}' (configured: {known})")]
    UnknownLanguage { name: String, known: String },
}

/// Word files and extra letters for one language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageConfig {
    pub easy: PathBuf,
    pub medium: PathBuf,
    pub hard: PathBuf,
    #[serde(default)]
    pub extra_letters: String,
}

impl LanguageConfig {
    #[must_use]
    pub fn path_for(&self, difficulty: Difficulty) -> &Path {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// Top-level config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguagesConfig {
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageConfig>,
}

impl LanguagesConfig {
    /// Parse config text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML or missing fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Look up a language by name (case-insensitive)
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownLanguage` listing the configured names.
    pub fn language(&self, name: &str) -> Result<&LanguageConfig, ConfigError> {
        self.languages
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, lang)| lang)
            .ok_or_else(|| ConfigError::UnknownLanguage {
                name: name.to_string(),
                known: self
                    .languages
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Word source backed by files listed in a language config
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
    language: LanguageConfig,
}

impl FileSource {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>, language: LanguageConfig) -> Self {
        Self {
            base_dir: base_dir.into(),
            language,
        }
    }

    /// Load `config_path` and select `language` from it
    ///
    /// # Errors
    /// Returns `ConfigError` if the config is unreadable or lacks the language.
    pub fn from_config(config_path: &Path, language: &str) -> Result<Self, ConfigError> {
        let config = LanguagesConfig::load(config_path)?;
        let lang = config.language(language)?.clone();
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        log::debug!(
            "Using language '{language}' from {} (extra letters: {:?})",
            config_path.display(),
            lang.extra_letters
        );
        Ok(Self::new(base_dir, lang))
    }

    fn resolve(&self, difficulty: Difficulty) -> PathBuf {
        self.base_dir.join(self.language.path_for(difficulty))
    }
}

impl WordSource for FileSource {
    fn words(&self, difficulty: Difficulty) -> Result<Vec<String>, WordListError> {
        loader::load_from_file(self.resolve(difficulty))
    }

    fn alphabet(&self) -> Alphabet {
        Alphabet::with_extra(&self.language.extra_letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DictionarySet;

    const SAMPLE: &str = r#"
[languages.english]
easy = "english/easy.txt"
medium = "english/medium.txt"
hard = "english/hard.txt"

[languages.polish]
easy = "polish/easy.txt"
medium = "polish/medium.txt"
hard = "polish/hard.txt"
extra_letters = "ĄĆĘŁŃÓŚŹŻ"
"#;

    #[test]
    fn parse_languages() {
        let config = LanguagesConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.languages.len(), 2);

        let english = config.language("english").unwrap();
        assert_eq!(english.extra_letters, "");
        assert_eq!(
            english.path_for(Difficulty::Medium),
            Path::new("english/medium.txt")
        );

        let polish = config.language("Polish").unwrap();
        assert_eq!(polish.extra_letters, "ĄĆĘŁŃÓŚŹŻ");
    }

    #[test]
    fn unknown_language_lists_known() {
        let config = LanguagesConfig::parse(SAMPLE).unwrap();
        let err = config.language("klingon").unwrap_err();
        assert!(err.to_string().contains("english, polish"), "{err}");
    }

    #[test]
    fn missing_field_is_parse_error() {
        let result = LanguagesConfig::parse("[languages.x]\neasy = \"a.txt\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn file_source_resolves_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pl")).unwrap();
        fs::write(dir.path().join("pl/easy.txt"), "żółwi,kotek,robot").unwrap();
        fs::write(dir.path().join("pl/medium.txt"), "piesek\nkrówka").unwrap();
        fs::write(dir.path().join("pl/hard.txt"), "żyrafka").unwrap();
        let config_path = dir.path().join("languages.toml");
        fs::write(
            &config_path,
            "[languages.polish]\neasy = \"pl/easy.txt\"\nmedium = \"pl/medium.txt\"\nhard = \"pl/hard.txt\"\nextra_letters = \"ąćęłńóśźż\"\n",
        )
        .unwrap();

        let source = FileSource::from_config(&config_path, "polish").unwrap();
        assert!(source.alphabet().contains('Ż'));
        assert_eq!(source.alphabet().extra_letters().len(), 9);

        let set = DictionarySet::load(&source).unwrap();
        assert_eq!(set.get(Difficulty::Easy).words().len(), 3);
        assert_eq!(set.get(Difficulty::Medium).words().len(), 2);
        assert!(set.get(Difficulty::Hard).contains(&"ŻYRAFKA".chars().collect::<Vec<_>>()));
    }

    #[test]
    fn missing_config_is_read_error() {
        let result = FileSource::from_config(Path::new("/no/such/languages.toml"), "polish");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
