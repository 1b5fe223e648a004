use super::abbreviation::{AbbreviationDictionary, DigitAbbreviationDictionary};
use super::word_list::WordList;
use super::Dictionary;
use crate::error::{Error, Result};

/// The primary word lists, queried in order.
#[derive(Debug)]
pub struct MainDictionary {
    word_lists: Vec<WordList>,
}

impl MainDictionary {
    /// At least one non-empty word list is required.
    pub fn new(word_lists: Vec<WordList>) -> Result<Self> {
        if word_lists.iter().all(WordList::is_empty) {
            return Err(Error::EmptyDictionary("main".to_string()));
        }

        for list in word_lists.iter().filter(|list| list.is_empty()) {
            log::warn!("word list \"{}\" is empty", list.tag());
        }

        Ok(Self { word_lists })
    }

    pub fn word_lists(&self) -> &[WordList] {
        &self.word_lists
    }

    /// Total entries across all lists (words present in several lists count once per list)
    pub fn len(&self) -> usize {
        self.word_lists.iter().map(WordList::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dictionary for MainDictionary {
    fn is_word(&self, token: &str) -> bool {
        self.word_lists.iter().any(|list| list.is_word(token))
    }

    fn tags(&self, token: &str) -> Vec<String> {
        self.word_lists
            .iter()
            .filter(|list| list.is_word(token))
            .map(|list| list.tag().to_string())
            .collect()
    }
}

/// Union of the main dictionary and both abbreviation dictionaries: the
/// answer to "is this a known word at all".
#[derive(Debug)]
pub struct AggregatedDictionary {
    words: MainDictionary,
    abbreviations: AbbreviationDictionary,
    digit_abbreviations: DigitAbbreviationDictionary,
}

impl AggregatedDictionary {
    pub fn new(
        words: MainDictionary,
        abbreviations: AbbreviationDictionary,
        digit_abbreviations: DigitAbbreviationDictionary,
    ) -> Self {
        Self {
            words,
            abbreviations,
            digit_abbreviations,
        }
    }

    pub fn words(&self) -> &MainDictionary {
        &self.words
    }

    pub fn abbreviations(&self) -> &AbbreviationDictionary {
        &self.abbreviations
    }

    pub fn digit_abbreviations(&self) -> &DigitAbbreviationDictionary {
        &self.digit_abbreviations
    }
}

impl Dictionary for AggregatedDictionary {
    fn is_word(&self, token: &str) -> bool {
        self.words.is_word(token)
            || self.abbreviations.is_word(token)
            || self.digit_abbreviations.is_word(token)
    }

    fn tags(&self, token: &str) -> Vec<String> {
        let mut tags = self.words.tags(token);
        tags.extend(self.abbreviations.tags(token));
        tags.extend(self.digit_abbreviations.tags(token));
        tags
    }
}
