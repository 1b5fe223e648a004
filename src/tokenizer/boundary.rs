use super::split_at;
use crate::dictionary::{Dictionary, DictionarySet};
use std::sync::Arc;

/// Splits identifiers on separator characters and case transitions.
pub struct BoundaryTokenizer {
    separators: Vec<char>,
    dictionaries: Arc<DictionarySet>,
}

impl BoundaryTokenizer {
    /// Every character of `separators` is a separator. An empty string
    /// disables separator splitting.
    pub fn new(separators: &str, dictionaries: Arc<DictionarySet>) -> Self {
        Self {
            separators: separators.chars().collect(),
            dictionaries,
        }
    }

    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Split on separator runs, then before each lower→upper transition
    pub fn naive_tokenize(&self, identifier: &str) -> Vec<String> {
        self.split_on_separators(identifier)
            .into_iter()
            .flat_map(split_on_lower_upper)
            .collect()
    }

    /// Fragments between runs of separators; never empty
    pub fn split_on_separators<'a>(&self, identifier: &'a str) -> Vec<&'a str> {
        identifier
            .split(|c| self.is_separator(c))
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    /// Peel a run of capitals off the following word: `HTMLEditor` becomes
    /// `HTML`, `Editor`.
    ///
    /// The split goes either before the last capital of the run or after
    /// it, whichever leaves more known words; ties favour the former.
    pub fn split_on_upper_lower(&self, fragment: &str) -> Vec<String> {
        let dictionary = self.dictionaries.aggregated();
        if dictionary.digit_abbreviations().is_word(fragment)
            || dictionary.abbreviations().is_word(fragment)
        {
            return vec![fragment.to_string()];
        }

        let chars: Vec<char> = fragment.chars().collect();
        let boundary = chars
            .windows(2)
            .position(|pair| pair[0].is_uppercase() && pair[1].is_lowercase());

        match boundary {
            Some(b) if b > 0 => {
                let camel = split_at(&chars, b);
                let alternate = split_at(&chars, b + 1);
                if dictionary.percentage_known(&alternate) > dictionary.percentage_known(&camel) {
                    alternate
                } else {
                    camel
                }
            }
            _ => vec![fragment.to_string()],
        }
    }
}

/// Split before every uppercase character that follows a lowercase one
pub fn split_on_lower_upper(fragment: &str) -> Vec<String> {
    let chars: Vec<char> = fragment.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    // (start, end) pairs
    let mut bounds = vec![0];
    for (i, pair) in chars.windows(2).enumerate() {
        if pair[0].is_lowercase() && pair[1].is_uppercase() {
            bounds.push(i + 1);
            bounds.push(i + 1);
        }
    }
    bounds.push(chars.len());

    let pairs = bounds.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        log::warn!(
            "unbalanced case boundaries in \"{}\", dropping {:?}",
            fragment,
            pairs.remainder()
        );
    }

    pairs
        .map(|pair| chars[pair[0]..pair[1]].iter().collect())
        .collect()
}
