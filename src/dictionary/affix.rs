use super::aggregated::AggregatedDictionary;
use super::Dictionary;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

/// A list of prefixes or suffixes, used to recognise concatenative
/// neologisms such as `unzoom` or `zoomable`.
///
/// The dictionary holds a shared handle on the aggregated dictionary so it
/// can test whether what remains after removing an affix is a known word.
pub struct AffixDictionary {
    kind: AffixKind,
    set: HashSet<String>,
    longest: usize,
    dictionary: Arc<AggregatedDictionary>,
}

impl AffixDictionary {
    pub fn prefixes<I, S>(prefixes: I, dictionary: Arc<AggregatedDictionary>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(AffixKind::Prefix, prefixes, dictionary)
    }

    pub fn suffixes<I, S>(suffixes: I, dictionary: Arc<AggregatedDictionary>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(AffixKind::Suffix, suffixes, dictionary)
    }

    fn new<I, S>(kind: AffixKind, entries: I, dictionary: Arc<AggregatedDictionary>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: HashSet<String> = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        let longest = set.iter().map(|entry| entry.chars().count()).max().unwrap_or(0);

        Self {
            kind,
            set,
            longest,
            dictionary,
        }
    }

    pub fn kind(&self) -> AffixKind {
        self.kind
    }

    pub fn longest_entry_len(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Known affixes attached to `token`, shortest first, lower-cased.
    /// An affix never covers the whole token.
    pub fn affixes_of(&self, token: &str) -> Vec<String> {
        let chars: Vec<char> = token.to_lowercase().chars().collect();
        let max = self.longest.min(chars.len().saturating_sub(1));

        (1..=max)
            .map(|n| match self.kind {
                AffixKind::Prefix => chars[..n].iter().collect::<String>(),
                AffixKind::Suffix => chars[chars.len() - n..].iter().collect::<String>(),
            })
            .filter(|affix| self.set.contains(affix))
            .collect()
    }

    /// Remove `affix` from the matching end of `token`
    pub fn strip<'a>(&self, token: &'a str, affix: &str) -> &'a str {
        match self.kind {
            AffixKind::Prefix => token.strip_prefix(affix).unwrap_or(token),
            AffixKind::Suffix => token.strip_suffix(affix).unwrap_or(token),
        }
    }

    /// `true` when removing a single known affix leaves a known word
    pub fn is_neologism(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.affixes_of(&lower)
            .iter()
            .any(|affix| self.dictionary.is_word(self.strip(&lower, affix)))
    }
}

impl Dictionary for AffixDictionary {
    fn is_word(&self, token: &str) -> bool {
        self.set.contains(&token.to_lowercase())
    }
}

impl std::fmt::Debug for AffixDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffixDictionary")
            .field("kind", &self.kind)
            .field("entries", &self.set.len())
            .field("longest", &self.longest)
            .finish()
    }
}
