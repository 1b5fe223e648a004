use super::Dictionary;
use dashmap::DashSet;

/// Words learned while tokenizing a project.
///
/// The set only ever grows. It is shared between tokenizer calls (and
/// threads) through `&self`; `DashSet` does the locking.
#[derive(Debug, Default)]
pub struct ProjectVocabulary {
    words: DashSet<String>,
}

impl ProjectVocabulary {
    pub const TAG: &'static str = "project";

    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the vocabulary, e.g. from a list of project-specific terms
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocabulary = Self::new();
        for word in words {
            vocabulary.add(word.as_ref());
        }
        vocabulary
    }

    pub fn add(&self, word: &str) {
        let word = word.trim().to_lowercase();
        if !word.is_empty() {
            self.words.insert(word);
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Share of tokens at least `min_len` characters long that are known,
    /// as a truncated percentage of all tokens.
    pub fn percentage_known_min_len(&self, tokens: &[String], min_len: usize) -> usize {
        if tokens.is_empty() {
            return 0;
        }
        100 * self.count_known_min_len(tokens, min_len) / tokens.len()
    }

    /// Like [`percentage_known_min_len`](Self::percentage_known_min_len),
    /// with the raw hit count added as a bonus.
    pub fn weighted_percentage_known_min_len(&self, tokens: &[String], min_len: usize) -> usize {
        let hits = self.count_known_min_len(tokens, min_len);
        hits + self.percentage_known_min_len(tokens, min_len)
    }

    fn count_known_min_len(&self, tokens: &[String], min_len: usize) -> usize {
        tokens
            .iter()
            .filter(|token| token.chars().count() >= min_len && self.is_word(token))
            .count()
    }
}

impl Dictionary for ProjectVocabulary {
    fn is_word(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    fn tags(&self, token: &str) -> Vec<String> {
        if self.is_word(token) {
            vec![Self::TAG.to_string()]
        } else {
            Vec::new()
        }
    }
}
