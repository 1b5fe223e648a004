pub mod abbreviation;
pub mod affix;
pub mod aggregated;
pub mod builtin;
pub mod loader;
pub mod vocabulary;
pub mod word_list;

pub use abbreviation::{AbbreviationDictionary, DigitAbbreviationDictionary};
pub use affix::{AffixDictionary, AffixKind};
pub use aggregated::{AggregatedDictionary, MainDictionary};
pub use vocabulary::ProjectVocabulary;
pub use word_list::WordList;

use crate::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Case-insensitive word membership.
pub trait Dictionary {
    fn is_word(&self, token: &str) -> bool;

    /// Names of the word lists that recognise `token`
    fn tags(&self, _token: &str) -> Vec<String> {
        Vec::new()
    }

    /// Truncated percentage of `tokens` that are words; 0 for no tokens
    fn percentage_known(&self, tokens: &[String]) -> usize {
        if tokens.is_empty() {
            return 0;
        }
        let known = tokens.iter().filter(|token| self.is_word(token)).count();
        100 * known / tokens.len()
    }
}

/// Every dictionary a tokenizer consults.
///
/// Built once and shared; only the project vocabulary changes afterwards.
#[derive(Debug)]
pub struct DictionarySet {
    aggregated: Arc<AggregatedDictionary>,
    prefixes: AffixDictionary,
    suffixes: AffixDictionary,
    vocabulary: ProjectVocabulary,
}

impl DictionarySet {
    pub fn new<P, S>(
        aggregated: AggregatedDictionary,
        prefixes: &[P],
        suffixes: &[S],
        vocabulary: ProjectVocabulary,
    ) -> Self
    where
        P: AsRef<str>,
        S: AsRef<str>,
    {
        let aggregated = Arc::new(aggregated);
        Self {
            prefixes: AffixDictionary::prefixes(prefixes, Arc::clone(&aggregated)),
            suffixes: AffixDictionary::suffixes(suffixes, Arc::clone(&aggregated)),
            aggregated,
            vocabulary,
        }
    }

    /// Dictionaries built from the embedded word lists
    pub fn embedded() -> Result<Self> {
        let aggregated = AggregatedDictionary::new(
            MainDictionary::new(builtin::word_lists()?)?,
            AbbreviationDictionary::new(builtin::ABBREVIATIONS)?,
            DigitAbbreviationDictionary::new(builtin::DIGIT_ABBREVIATIONS)?,
        );

        Ok(Self::new(
            aggregated,
            builtin::PREFIXES,
            builtin::SUFFIXES,
            ProjectVocabulary::new(),
        ))
    }

    pub fn aggregated(&self) -> &AggregatedDictionary {
        &self.aggregated
    }

    pub fn prefixes(&self) -> &AffixDictionary {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &AffixDictionary {
        &self.suffixes
    }

    pub fn vocabulary(&self) -> &ProjectVocabulary {
        &self.vocabulary
    }

    /// Known to the aggregated dictionary or the project vocabulary
    pub fn is_known(&self, token: &str) -> bool {
        self.aggregated.is_word(token) || self.vocabulary.is_word(token)
    }

    /// Word lists recognising `token`, including the project vocabulary
    pub fn tags(&self, token: &str) -> BTreeSet<String> {
        self.aggregated
            .tags(token)
            .into_iter()
            .chain(self.vocabulary.tags(token))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn aggregated(words: &[&str]) -> Arc<AggregatedDictionary> {
        Arc::new(aggregated_with(words, &[], &[]))
    }

    pub fn aggregated_with(
        words: &[&str],
        abbreviations: &[&str],
        digit_abbreviations: &[&str],
    ) -> AggregatedDictionary {
        AggregatedDictionary::new(
            MainDictionary::new(vec![WordList::from_words("test", words).unwrap()]).unwrap(),
            AbbreviationDictionary::new(abbreviations).unwrap(),
            DigitAbbreviationDictionary::new(digit_abbreviations).unwrap(),
        )
    }

    /// A dictionary set over the given words with no affixes or vocabulary
    pub fn dictionaries(words: &[&str]) -> Arc<DictionarySet> {
        Arc::new(DictionarySet::new(
            aggregated_with(words, &[], &[]),
            &[] as &[&str],
            &[] as &[&str],
            ProjectVocabulary::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_set() {
        let set = DictionarySet::embedded().unwrap();

        assert!(set.aggregated().is_word("Editor"));
        assert!(set.aggregated().is_word("HTML"));
        assert!(set.aggregated().is_word("utf8"));
        assert!(set.prefixes().is_word("sub"));
        assert!(set.suffixes().is_neologism("zoomable"));
        assert!(set.vocabulary().is_empty());
    }

    #[test]
    fn test_tags_include_vocabulary() {
        let set = DictionarySet::embedded().unwrap();
        set.vocabulary().add("html");

        let tags: Vec<String> = set.tags("HTML").into_iter().collect();
        assert_eq!(tags, vec!["abbreviation", "project"]);
        assert!(set.is_known("html"));
        assert!(set.tags("qwxz").is_empty());
    }
}
