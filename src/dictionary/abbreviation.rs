use super::word_list::WordList;
use super::Dictionary;
use crate::error::{Error, Result};
use aho_corasick::AhoCorasick;
use std::collections::HashMap;
use std::ops::Range;

/// Plain abbreviations such as `html` or `osgi`.
#[derive(Debug)]
pub struct AbbreviationDictionary {
    list: WordList,
}

impl AbbreviationDictionary {
    pub const TAG: &'static str = "abbreviation";

    pub fn new<I, S>(abbreviations: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            list: WordList::from_words(Self::TAG, abbreviations)?,
        })
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Dictionary for AbbreviationDictionary {
    fn is_word(&self, token: &str) -> bool {
        self.list.is_word(token)
    }

    fn tags(&self, token: &str) -> Vec<String> {
        if self.is_word(token) {
            vec![Self::TAG.to_string()]
        } else {
            Vec::new()
        }
    }
}

/// Abbreviations that contain digits, e.g. `ipv6`, `utf8`, `ds9`.
///
/// Besides membership, this dictionary can locate its entries inside a
/// larger fragment, which the digit splitter uses to keep such
/// abbreviations intact.
pub struct DigitAbbreviationDictionary {
    list: WordList,
    entries: Vec<String>,
    matcher: AhoCorasick,
}

impl DigitAbbreviationDictionary {
    pub const TAG: &'static str = "digit-abbreviation";

    /// Every entry must contain at least one ASCII digit.
    pub fn new<I, S>(abbreviations: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for abbreviation in abbreviations {
            let entry = abbreviation.as_ref().trim().to_lowercase();
            if entry.is_empty() {
                continue;
            }
            if !entry.chars().any(|c| c.is_ascii_digit()) {
                return Err(Error::MissingDigit(entry));
            }
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&entries)?;
        let list = WordList::from_words(Self::TAG, &entries)?;

        Ok(Self {
            list,
            entries,
            matcher,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Byte ranges of known entries found in `fragment`, ordered by offset.
    ///
    /// Only the first occurrence of each entry is reported. When two entries
    /// start at the same offset the longer one wins, and a hit that overlaps
    /// an earlier hit is dropped so the ranges partition cleanly.
    pub fn find_known_spans(&self, fragment: &str) -> Vec<Range<usize>> {
        let mut first_seen: HashMap<usize, Range<usize>> = HashMap::new();
        for hit in self.matcher.find_overlapping_iter(fragment) {
            first_seen
                .entry(hit.pattern().as_usize())
                .or_insert(hit.start()..hit.end());
        }

        let mut hits: Vec<Range<usize>> = first_seen.into_values().collect();
        hits.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut spans = Vec::with_capacity(hits.len());
        let mut cursor = 0;
        for hit in hits {
            if hit.start < cursor {
                log::debug!(
                    "ignoring overlapping digit abbreviation \"{}\" in \"{}\"",
                    &fragment[hit.clone()],
                    fragment
                );
                continue;
            }
            cursor = hit.end;
            spans.push(hit);
        }

        spans
    }

    /// Known entries occurring in `fragment`, lower-cased, in occurrence order
    pub fn find_known_substrings(&self, fragment: &str) -> Vec<String> {
        self.find_known_spans(fragment)
            .into_iter()
            .map(|span| fragment[span].to_lowercase())
            .collect()
    }
}

impl Dictionary for DigitAbbreviationDictionary {
    fn is_word(&self, token: &str) -> bool {
        self.list.is_word(token)
    }

    fn tags(&self, token: &str) -> Vec<String> {
        if self.is_word(token) {
            vec![Self::TAG.to_string()]
        } else {
            Vec::new()
        }
    }
}

impl std::fmt::Debug for DigitAbbreviationDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitAbbreviationDictionary")
            .field("entries", &self.entries)
            .finish()
    }
}
