use super::{
    contains_digit, BoundaryTokenizer, DigitSplitter, PrefixConcatenator, Segmenter,
};
use crate::dictionary::{builtin, Dictionary, DictionarySet};
use crate::TaggedToken;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// When the segmenter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Segment every unrecognised word
    Aggressive,
    /// Segment only identifiers that the other stages left as a single word
    #[default]
    Conservative,
}

#[derive(Debug, Clone)]
pub struct TokenizerOptions {
    pub separators: String,
    pub mode: SplitMode,
    /// Tokens at least this many characters long are added to the project
    /// vocabulary; `None` disables learning
    pub vocabulary_threshold: Option<usize>,
    pub candidate_limit: usize,
    pub concatenation_prefixes: Vec<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            separators: String::new(),
            mode: SplitMode::default(),
            vocabulary_threshold: None,
            candidate_limit: Segmenter::DEFAULT_CANDIDATE_LIMIT,
            concatenation_prefixes: builtin::CONCATENATION_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        }
    }
}

/// Splits identifier names into word tokens.
///
/// ```no_run
/// use identok::{DictionarySet, IdentifierTokenizer, TokenizerOptions};
/// use std::sync::Arc;
///
/// let dictionaries = Arc::new(DictionarySet::embedded().unwrap());
/// let tokenizer = IdentifierTokenizer::new(dictionaries, TokenizerOptions::default());
/// assert_eq!(tokenizer.tokenize("HTMLEditorKit"), vec!["HTML", "Editor", "Kit"]);
/// ```
pub struct IdentifierTokenizer {
    dictionaries: Arc<DictionarySet>,
    boundary: BoundaryTokenizer,
    digits: DigitSplitter,
    segmenter: Segmenter,
    prefixes: PrefixConcatenator,
    mode: SplitMode,
    vocabulary_threshold: Option<usize>,
}

impl IdentifierTokenizer {
    pub fn new(dictionaries: Arc<DictionarySet>, options: TokenizerOptions) -> Self {
        Self {
            boundary: BoundaryTokenizer::new(&options.separators, Arc::clone(&dictionaries)),
            digits: DigitSplitter::new(Arc::clone(&dictionaries)),
            segmenter: Segmenter::new(Arc::clone(&dictionaries), options.candidate_limit),
            prefixes: PrefixConcatenator::new(&options.concatenation_prefixes),
            mode: options.mode,
            vocabulary_threshold: options.vocabulary_threshold,
            dictionaries,
        }
    }

    pub fn dictionaries(&self) -> &DictionarySet {
        &self.dictionaries
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Run every stage and learn the resulting tokens
    pub fn tokenize(&self, identifier: &str) -> Vec<String> {
        let tokens = self.split(identifier);
        self.learn(&tokens);
        tokens
    }

    /// Separators and lower→upper case transitions only
    pub fn naive_tokenize(&self, identifier: &str) -> Vec<String> {
        self.boundary.naive_tokenize(identifier)
    }

    /// Like [`tokenize`](Self::tokenize), naming the word lists that know
    /// each token. Tags reflect the vocabulary before this call's tokens
    /// are learned.
    pub fn tokenize_tagged(&self, identifier: &str) -> Vec<TaggedToken> {
        let tokens = self.split(identifier);
        let tagged = self.tag(&tokens);
        self.learn(&tokens);
        tagged
    }

    pub fn naive_tokenize_tagged(&self, identifier: &str) -> Vec<TaggedToken> {
        self.tag(&self.naive_tokenize(identifier))
    }

    /// Tokenize a batch. Results are in input order.
    ///
    /// Runs in parallel unless vocabulary learning is enabled, in which case
    /// identifiers are processed in order so each sees what its
    /// predecessors taught.
    pub fn tokenize_all<S>(&self, identifiers: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        if self.vocabulary_threshold.is_some() {
            identifiers
                .iter()
                .map(|identifier| self.tokenize(identifier.as_ref()))
                .collect()
        } else {
            identifiers
                .par_iter()
                .map(|identifier| self.tokenize(identifier.as_ref()))
                .collect()
        }
    }

    pub fn tokenize_all_tagged<S>(&self, identifiers: &[S]) -> Vec<Vec<TaggedToken>>
    where
        S: AsRef<str> + Sync,
    {
        if self.vocabulary_threshold.is_some() {
            identifiers
                .iter()
                .map(|identifier| self.tokenize_tagged(identifier.as_ref()))
                .collect()
        } else {
            identifiers
                .par_iter()
                .map(|identifier| self.tokenize_tagged(identifier.as_ref()))
                .collect()
        }
    }

    /// Rejoin detached prefixes such as `sub` with the following token
    pub fn prefix_concatenation(&self, tokens: &[String]) -> Vec<String> {
        self.prefixes.concatenate(tokens)
    }

    fn split(&self, identifier: &str) -> Vec<String> {
        self.warn_unexpected_characters(identifier);

        let fragments = self.boundary.naive_tokenize(identifier);
        let last = fragments.len().saturating_sub(1);

        let mut words = Vec::with_capacity(fragments.len());
        for (index, fragment) in fragments.iter().enumerate() {
            if contains_digit(fragment) {
                for piece in self.digits.split(fragment, index == last) {
                    words.extend(self.boundary.split_on_upper_lower(&piece));
                }
            } else {
                words.extend(self.boundary.split_on_upper_lower(fragment));
            }
        }

        match self.mode {
            SplitMode::Aggressive => words
                .into_iter()
                .flat_map(|word| {
                    if self.needs_segmenting(&word) {
                        self.segmenter.split(&word)
                    } else {
                        vec![word]
                    }
                })
                .collect(),
            SplitMode::Conservative => {
                if words.len() == 1 && self.needs_segmenting(&words[0]) {
                    self.segmenter.split(&words[0])
                } else {
                    words
                }
            }
        }
    }

    fn needs_segmenting(&self, word: &str) -> bool {
        word.chars().count() > 1
            && !contains_digit(word)
            && !self.dictionaries.aggregated().is_word(word)
    }

    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| TaggedToken::new(token, self.dictionaries.tags(token)))
            .collect()
    }

    fn learn(&self, tokens: &[String]) {
        let Some(threshold) = self.vocabulary_threshold else {
            return;
        };
        let vocabulary = self.dictionaries.vocabulary();
        for token in tokens.iter().filter(|t| t.chars().count() >= threshold) {
            vocabulary.add(token);
        }
    }

    fn warn_unexpected_characters(&self, identifier: &str) {
        for c in identifier
            .chars()
            .filter(|&c| !c.is_alphanumeric() && !self.boundary.is_separator(c))
        {
            log::warn!("unexpected character {:?} in identifier \"{}\"", c, identifier);
        }
    }
}
