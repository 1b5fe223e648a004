use super::word_list::read_terms;
use super::{
    builtin, AbbreviationDictionary, AggregatedDictionary, DictionarySet,
    DigitAbbreviationDictionary, MainDictionary, ProjectVocabulary, WordList,
};
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

impl DictionarySet {
    /// Assemble dictionaries from configuration.
    ///
    /// The main dictionary is the installed `<data_dir>/<dictionary>.fst`
    /// when present, otherwise the embedded lists; `word_lists` are added on
    /// top. Each of the remaining list paths replaces its embedded default.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut word_lists = Vec::new();

        match installed_dictionary(&config.dictionary) {
            Some(path) => {
                let tag = reserve_tag(&config.dictionary, NON_WORD_LIST_TAGS);
                word_lists.push(load_word_list(&tag, &path)?);
            }
            None => {
                log::debug!(
                    "no compiled \"{}\" dictionary installed, using embedded word lists",
                    config.dictionary
                );
                word_lists.extend(builtin::word_lists()?);
            }
        }

        for path in &config.word_lists {
            let tag = reserve_tag(&list_tag(path), BUILTIN_TAGS);
            word_lists.push(load_word_list(&tag, path)?);
        }

        let main = MainDictionary::new(word_lists).context("Failed to build main dictionary")?;

        let abbreviations = AbbreviationDictionary::new(terms_or_default(
            config.abbreviations.as_deref(),
            builtin::ABBREVIATIONS,
        )?)?;

        let digit_abbreviations = DigitAbbreviationDictionary::new(terms_or_default(
            config.digit_abbreviations.as_deref(),
            builtin::DIGIT_ABBREVIATIONS,
        )?)
        .context("Failed to build digit abbreviation dictionary")?;

        let prefixes = terms_or_default(config.prefixes.as_deref(), builtin::PREFIXES)?;
        let suffixes = terms_or_default(config.suffixes.as_deref(), builtin::SUFFIXES)?;

        let vocabulary = match &config.vocabulary {
            Some(path) => ProjectVocabulary::with_words(
                read_terms(path)
                    .with_context(|| format!("Failed to read vocabulary: {}", path.display()))?,
            ),
            None => ProjectVocabulary::new(),
        };

        Ok(Self::new(
            AggregatedDictionary::new(main, abbreviations, digit_abbreviations),
            &prefixes,
            &suffixes,
            vocabulary,
        ))
    }
}

fn installed_dictionary(name: &str) -> Option<PathBuf> {
    Config::data_dir()
        .map(|dir| dir.join(format!("{}.fst", name)))
        .filter(|path| path.exists())
}

/// Compiled lists end in `.fst`; anything else is read as text
fn load_word_list(tag: &str, path: &Path) -> Result<WordList> {
    let list = if path.extension().and_then(|s| s.to_str()) == Some("fst") {
        WordList::load_fst(tag, path)
    } else {
        WordList::from_text_file(tag, path)
    };

    list.with_context(|| format!("Failed to load word list: {}", path.display()))
}

// Tags of dictionaries that are never word lists
const NON_WORD_LIST_TAGS: &[&str] = &[
    AbbreviationDictionary::TAG,
    DigitAbbreviationDictionary::TAG,
    ProjectVocabulary::TAG,
];

const BUILTIN_TAGS: &[&str] = &[
    builtin::ENGLISH_TAG,
    builtin::PROGRAMMING_TAG,
    AbbreviationDictionary::TAG,
    DigitAbbreviationDictionary::TAG,
    ProjectVocabulary::TAG,
];

/// User lists named after a built-in tag are tagged `user-<name>`
fn reserve_tag(name: &str, reserved: &[&str]) -> String {
    if reserved.contains(&name) {
        log::debug!("word list name \"{}\" is reserved, tagging it \"user-{}\"", name, name);
        format!("user-{}", name)
    } else {
        name.to_string()
    }
}

fn list_tag(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("custom")
        .to_string()
}

fn terms_or_default(path: Option<&Path>, default: &[&str]) -> Result<Vec<String>> {
    match path {
        Some(path) => read_terms(path)
            .with_context(|| format!("Failed to read word list: {}", path.display())),
        None => Ok(default.iter().map(|term| term.to_string()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use std::fs;
    use tempfile::tempdir;

    fn config() -> Config {
        Config {
            dictionary: "identok-test-not-installed".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_config_uses_embedded_lists() {
        let set = DictionarySet::from_config(&config()).unwrap();
        assert!(set.aggregated().is_word("triangle"));
        assert!(set.aggregated().is_word("ipv6"));
    }

    #[test]
    fn test_extra_word_lists_are_tagged_by_file_stem() {
        let dir = tempdir().unwrap();
        let text = dir.path().join("project.txt");
        fs::write(&text, "frobnicate\n").unwrap();
        let compiled = dir.path().join("jargon.fst");
        WordList::build_fst_file(&["grok".to_string()], &compiled).unwrap();

        let config = Config {
            word_lists: vec![text, compiled],
            ..config()
        };
        let set = DictionarySet::from_config(&config).unwrap();

        assert_eq!(set.aggregated().tags("Frobnicate"), vec!["user-project"]);
        assert_eq!(set.aggregated().tags("grok"), vec!["jargon"]);
    }

    #[test]
    fn test_user_lists_cannot_take_builtin_tags() {
        let dir = tempdir().unwrap();
        let english = dir.path().join("en.txt");
        fs::write(&english, "frobnicate
").unwrap();

        let config = Config {
            word_lists: vec![english],
            ..config()
        };
        let set = DictionarySet::from_config(&config).unwrap();
        set.vocabulary().add("frobnicate");

        let tags: Vec<String> = set.tags("frobnicate").into_iter().collect();
        assert_eq!(tags, vec!["project", "user-en"]);

        assert_eq!(reserve_tag("en", NON_WORD_LIST_TAGS), "en");
        assert_eq!(reserve_tag("project", NON_WORD_LIST_TAGS), "user-project");
        assert_eq!(reserve_tag("jargon", BUILTIN_TAGS), "jargon");
    }

    #[test]
    fn test_list_paths_replace_defaults() {
        let dir = tempdir().unwrap();
        let prefixes = dir.path().join("prefixes.txt");
        fs::write(&prefixes, "# only one\nzz\n").unwrap();
        let vocabulary = dir.path().join("vocabulary.txt");
        fs::write(&vocabulary, "buff\n").unwrap();

        let config = Config {
            prefixes: Some(prefixes),
            vocabulary: Some(vocabulary),
            ..config()
        };
        let set = DictionarySet::from_config(&config).unwrap();

        assert!(set.prefixes().is_word("zz"));
        assert!(!set.prefixes().is_word("sub"));
        assert!(set.vocabulary().is_word("buff"));
    }

    #[test]
    fn test_invalid_digit_abbreviations_fail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("digits.txt");
        fs::write(&path, "ipv6\nhttp\n").unwrap();

        let config = Config {
            digit_abbreviations: Some(path),
            ..config()
        };
        assert!(DictionarySet::from_config(&config).is_err());
    }
}
