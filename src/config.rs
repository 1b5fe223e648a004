use crate::tokenizer::{Segmenter, SplitMode, TokenizerOptions};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".identok.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_separators")]
    pub separators: String,

    #[serde(default)]
    pub mode: SplitMode,

    /// Negative disables vocabulary learning
    #[serde(default = "default_vocabulary_threshold")]
    pub vocabulary_threshold: i32,

    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,

    /// Name of the compiled word list in the data directory
    #[serde(default = "default_dictionary")]
    pub dictionary: String,

    /// Additional word lists, text or `.fst`
    #[serde(default)]
    pub word_lists: Vec<PathBuf>,

    pub abbreviations: Option<PathBuf>,
    pub digit_abbreviations: Option<PathBuf>,
    pub prefixes: Option<PathBuf>,
    pub suffixes: Option<PathBuf>,
    pub vocabulary: Option<PathBuf>,
}

fn default_separators() -> String {
    "_$".to_string()
}

fn default_vocabulary_threshold() -> i32 {
    -1
}

fn default_candidate_limit() -> usize {
    Segmenter::DEFAULT_CANDIDATE_LIMIT
}

fn default_dictionary() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separators: default_separators(),
            mode: SplitMode::default(),
            vocabulary_threshold: default_vocabulary_threshold(),
            candidate_limit: default_candidate_limit(),
            dictionary: default_dictionary(),
            word_lists: Vec::new(),
            abbreviations: None,
            digit_abbreviations: None,
            prefixes: None,
            suffixes: None,
            vocabulary: None,
        }
    }
}

/// Values given on the command line; `None` leaves the file setting alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub separators: Option<String>,
    pub mode: Option<SplitMode>,
    pub vocabulary_threshold: Option<i32>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        Ok(config.apply(overrides))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // other's values override self's if they differ from defaults
        if other.separators != default_separators() {
            self.separators = other.separators;
        }
        if other.mode != SplitMode::default() {
            self.mode = other.mode;
        }
        if other.vocabulary_threshold != default_vocabulary_threshold() {
            self.vocabulary_threshold = other.vocabulary_threshold;
        }
        if other.candidate_limit != default_candidate_limit() {
            self.candidate_limit = other.candidate_limit;
        }
        if other.dictionary != default_dictionary() {
            self.dictionary = other.dictionary;
        }
        self.word_lists.extend(other.word_lists);
        self.abbreviations = other.abbreviations.or(self.abbreviations);
        self.digit_abbreviations = other.digit_abbreviations.or(self.digit_abbreviations);
        self.prefixes = other.prefixes.or(self.prefixes);
        self.suffixes = other.suffixes.or(self.suffixes);
        self.vocabulary = other.vocabulary.or(self.vocabulary);
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(separators) = overrides.separators {
            self.separators = separators;
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(threshold) = overrides.vocabulary_threshold {
            self.vocabulary_threshold = threshold;
        }
        self
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            separators: self.separators.clone(),
            mode: self.mode,
            vocabulary_threshold: usize::try_from(self.vocabulary_threshold).ok(),
            candidate_limit: self.candidate_limit,
            ..Default::default()
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "identok").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "identok").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
