use super::collect;
use crate::dictionary::{Dictionary, DictionarySet};
use std::cmp::Reverse;
use std::sync::Arc;

/// Shortest substring the segmenter will accept as a component word
const MIN_COMPONENT_LEN: usize = 3;

/// Fragments this short never trigger the sliding-window search
const MIN_FALLBACK_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    Unsplit,
    Split(Vec<String>),
}

// Caps the number of complete candidates one `segment` call may produce
// across every generation pass. Once spent, each pass finishes only the
// branch in progress.
struct Budget {
    remaining: usize,
    produced: usize,
}

impl Budget {
    fn new(limit: usize) -> Self {
        Self {
            remaining: limit,
            produced: 0,
        }
    }

    fn spend(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        self.produced += 1;
    }

    fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Splits single-case fragments with no orthographic cue, such as
/// `redobuff`, by searching for dictionary words.
///
/// Candidate splits are generated from both ends of the fragment, tidied,
/// scored and the best of each direction compared. When neither direction
/// finds anything, a sliding window peels characters off each end and
/// searches again.
pub struct Segmenter {
    dictionaries: Arc<DictionarySet>,
    candidate_limit: usize,
}

impl Segmenter {
    pub const DEFAULT_CANDIDATE_LIMIT: usize = 4096;

    pub fn new(dictionaries: Arc<DictionarySet>, candidate_limit: usize) -> Self {
        Self {
            dictionaries,
            candidate_limit: candidate_limit.max(1),
        }
    }

    /// Tokens for `fragment`; never empty for a non-empty fragment
    pub fn split(&self, fragment: &str) -> Vec<String> {
        match self.segment(fragment) {
            SplitOutcome::Unsplit => vec![fragment.to_string()],
            SplitOutcome::Split(tokens) => tokens,
        }
    }

    pub fn segment(&self, fragment: &str) -> SplitOutcome {
        let chars: Vec<char> = fragment.chars().collect();
        if chars.is_empty() || self.is_neologism(fragment) {
            return SplitOutcome::Unsplit;
        }

        let mut budget = Budget::new(self.candidate_limit);
        let tokens = self.search(&chars, &mut budget);
        if budget.is_exhausted() {
            log::debug!(
                "candidate budget spent on \"{}\" ({} candidates)",
                fragment,
                budget.produced
            );
        }

        if tokens.len() > 1 {
            SplitOutcome::Split(tokens)
        } else {
            SplitOutcome::Unsplit
        }
    }

    // Best split of `chars`, every generation pass drawing on `budget`
    fn search(&self, chars: &[char], budget: &mut Budget) -> Vec<String> {
        let fragment = collect(chars);

        let mut forward = self.split_forwards(chars, 0, budget);
        let mut backward = self.split_backwards(chars, chars.len(), budget);
        self.cleanup(&mut forward);
        self.cleanup(&mut backward);

        let (mut best_forward, mut forward_score) = self.find_best(forward);
        let (mut best_backward, mut backward_score) = self.find_best(backward);

        if best_forward == best_backward
            && best_forward.len() == 1
            && forward_score == 0
            && chars.len() >= MIN_FALLBACK_LEN
        {
            log::debug!(
                "no split found from either end of \"{}\", trying sliding window",
                fragment
            );
            let (forward, backward) = self.sliding_candidates(chars, budget);
            (best_forward, forward_score) = self.find_best(forward);
            (best_backward, backward_score) = self.find_best(backward);

            if forward_score == 0 {
                best_forward = vec![fragment.clone()];
            }
            if backward_score == 0 {
                best_backward = vec![fragment];
            }
        }

        if best_forward == best_backward || forward_score > backward_score {
            best_forward
        } else {
            if forward_score == backward_score {
                log::debug!(
                    "cannot choose between {:?} and {:?}, taking the latter",
                    best_forward,
                    best_backward
                );
            }
            best_backward
        }
    }

    // Seed each direction with every prefix (resp. suffix) of up to half
    // the fragment already consumed, and pool the results
    fn sliding_candidates(
        &self,
        chars: &[char],
        budget: &mut Budget,
    ) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
        let len = chars.len();
        let mut forward = Vec::new();
        let mut backward = Vec::new();

        for i in 0..(len / 2).saturating_sub(1) {
            let prefix = collect(&chars[..=i]);
            for mut candidate in self.split_forwards(chars, i + 1, budget) {
                candidate.insert(0, prefix.clone());
                forward.push(candidate);
            }

            let suffix = collect(&chars[len - i - 1..]);
            for mut candidate in self.split_backwards(chars, len - i - 1, budget) {
                candidate.push(suffix.clone());
                backward.push(candidate);
            }
        }

        self.cleanup(&mut forward);
        self.cleanup(&mut backward);
        (forward, backward)
    }

    fn is_component(&self, candidate: &[char]) -> bool {
        if candidate.len() < MIN_COMPONENT_LEN {
            return false;
        }
        self.dictionaries.is_known(&collect(candidate))
    }

    /// Every split of `chars[start..]` built from known words, read left
    /// to right. Unrecognised remainders become a single token.
    fn split_forwards(&self, chars: &[char], start: usize, budget: &mut Budget) -> Vec<Vec<String>> {
        let ends: Vec<usize> = (start + MIN_COMPONENT_LEN..=chars.len())
            .filter(|&end| self.is_component(&chars[start..end]))
            .collect();

        if ends.is_empty() {
            budget.spend();
            return vec![remainder(&chars[start..])];
        }

        let mut candidates = Vec::new();
        for end in ends {
            if budget.is_exhausted() && !candidates.is_empty() {
                log::trace!("candidate budget exhausted at offset {}", start);
                break;
            }
            let word = collect(&chars[start..end]);
            for mut tail in self.split_forwards(chars, end, budget) {
                tail.insert(0, word.clone());
                candidates.push(tail);
            }
        }

        candidates
    }

    /// Mirror of [`split_forwards`](Self::split_forwards), matching words
    /// that end at `end` and working towards the start.
    fn split_backwards(&self, chars: &[char], end: usize, budget: &mut Budget) -> Vec<Vec<String>> {
        let starts: Vec<usize> = (0..=end.saturating_sub(MIN_COMPONENT_LEN))
            .rev()
            .filter(|&start| self.is_component(&chars[start..end]))
            .collect();

        if starts.is_empty() {
            budget.spend();
            return vec![remainder(&chars[..end])];
        }

        let mut candidates = Vec::new();
        for start in starts {
            if budget.is_exhausted() && !candidates.is_empty() {
                log::trace!("candidate budget exhausted at offset {}", end);
                break;
            }
            let word = collect(&chars[start..end]);
            for mut head in self.split_backwards(chars, start, budget) {
                head.push(word.clone());
                candidates.push(head);
            }
        }

        candidates
    }

    fn cleanup(&self, candidates: &mut [Vec<String>]) {
        for candidate in candidates.iter_mut().filter(|c| c.len() > 1) {
            *candidate = self.merge_adjacent(candidate);
        }
    }

    // Undo obvious oversplitting: grow a chain of adjacent tokens while
    // the concatenation is a word or a neologism
    fn merge_adjacent(&self, tokens: &[String]) -> Vec<String> {
        let dictionary = self.dictionaries.aggregated();
        let mut merged: Vec<String> = Vec::with_capacity(tokens.len());
        let mut chain = String::new();
        let mut chaining = false;

        for (j, pair) in tokens.windows(2).enumerate() {
            if !chaining {
                chain = pair[0].clone();
                merged.push(pair[0].clone());
                chaining = true;
            }

            chain.push_str(&pair[1]);
            if dictionary.is_word(&chain) || self.is_neologism(&chain) {
                merged.pop();
                merged.push(chain.clone());
            } else {
                chaining = false;
                if j == tokens.len() - 2 {
                    merged.push(pair[1].clone());
                }
            }
        }

        merged
    }

    /// A known word wearing a known prefix and/or suffix, e.g. `zoomable`
    fn is_neologism(&self, token: &str) -> bool {
        let prefixes = self.dictionaries.prefixes();
        let suffixes = self.dictionaries.suffixes();

        if prefixes.is_neologism(token) || suffixes.is_neologism(token) {
            return true;
        }

        let lower = token.to_lowercase();
        let found_suffixes = suffixes.affixes_of(&lower);
        if found_suffixes.is_empty() {
            return false;
        }

        let dictionary = self.dictionaries.aggregated();
        prefixes.affixes_of(&lower).iter().any(|prefix| {
            let stem = prefixes.strip(&lower, prefix);
            found_suffixes.iter().any(|suffix| {
                suffix.len() < stem.len() && dictionary.is_word(suffixes.strip(stem, suffix))
            })
        })
    }

    // 1000 / token count when every token is a dictionary word, otherwise 0
    fn parsimony_score(&self, tokens: &[String]) -> usize {
        let dictionary = self.dictionaries.aggregated();
        let mut total_len = 0;
        let mut known_len = 0;

        for token in tokens {
            let len = token.chars().count();
            total_len += len;
            if dictionary.is_word(token) {
                known_len += len;
            }
        }

        if total_len == 0 {
            return 0;
        }
        1000 * (known_len / total_len) / tokens.len()
    }

    /// Percentage of known tokens, plus one point per vocabulary hit
    fn weighted_score(&self, tokens: &[String]) -> usize {
        if tokens.is_empty() {
            return 0;
        }

        let dictionary = self.dictionaries.aggregated();
        let vocabulary = self.dictionaries.vocabulary();
        let mut known = 0;
        let mut vocabulary_hits = 0;

        for token in tokens {
            let in_vocabulary = vocabulary.is_word(token);
            if in_vocabulary || dictionary.is_word(token) {
                known += 1;
                if in_vocabulary {
                    vocabulary_hits += 1;
                }
            }
        }

        vocabulary_hits + 100 * known / tokens.len()
    }

    /// The most parsimonious candidate, then the best weighted score,
    /// then the fewest tokens. Returns it with its weighted score.
    fn find_best(&self, candidates: Vec<Vec<String>>) -> (Vec<String>, usize) {
        let scored: Vec<(Vec<String>, usize, usize)> = candidates
            .into_iter()
            .map(|candidate| {
                let parsimony = self.parsimony_score(&candidate);
                let weighted = self.weighted_score(&candidate);
                (candidate, parsimony, weighted)
            })
            .collect();

        let rank = |(candidate, parsimony, weighted): &(Vec<String>, usize, usize)| {
            (*parsimony, *weighted, Reverse(candidate.len()))
        };
        let Some(top) = scored.iter().map(rank).max() else {
            return (Vec::new(), 0);
        };

        let mut best = scored
            .into_iter()
            .filter(|entry| rank(entry) == top)
            .map(|(candidate, _, _)| candidate);

        let chosen = best.next().unwrap_or_default();
        let rivals: Vec<Vec<String>> = best.filter(|c| *c != chosen).collect();
        if !rivals.is_empty() {
            log::debug!("unable to pick best split between {:?} and {:?}", chosen, rivals);
        }

        let (_, weighted, _) = top;
        (chosen, weighted)
    }
}

fn remainder(chars: &[char]) -> Vec<String> {
    if chars.is_empty() {
        Vec::new()
    } else {
        vec![collect(chars)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::test_support::aggregated_with;
    use crate::dictionary::ProjectVocabulary;

    fn segmenter(words: &[&str]) -> Segmenter {
        segmenter_with(words, &[], &[], ProjectVocabulary::new())
    }

    fn segmenter_with(
        words: &[&str],
        prefixes: &[&str],
        suffixes: &[&str],
        vocabulary: ProjectVocabulary,
    ) -> Segmenter {
        let dictionaries =
            DictionarySet::new(aggregated_with(words, &[], &[]), prefixes, suffixes, vocabulary);
        Segmenter::new(Arc::new(dictionaries), Segmenter::DEFAULT_CANDIDATE_LIMIT)
    }

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_splits_compound() {
        let segmenter = segmenter(&["redo", "buff", "red"]);
        assert_eq!(segmenter.split("Redobuff"), vec!["Redo", "buff"]);
        assert_eq!(
            segmenter.segment("redobuff"),
            SplitOutcome::Split(strings(&["redo", "buff"]))
        );
    }

    #[test]
    fn test_unknown_fragment_is_unsplit() {
        let segmenter = segmenter(&["redo"]);
        assert_eq!(segmenter.segment("qwxz"), SplitOutcome::Unsplit);
        assert_eq!(segmenter.split("ds"), vec!["ds"]);
        assert_eq!(segmenter.segment(""), SplitOutcome::Unsplit);
    }

    #[test]
    fn test_neologism_is_unsplit() {
        let segmenter = segmenter_with(
            &["zoom", "able"],
            &["un"],
            &["able"],
            ProjectVocabulary::new(),
        );

        assert_eq!(segmenter.segment("zoomable"), SplitOutcome::Unsplit);
        assert_eq!(segmenter.segment("unzoomable"), SplitOutcome::Unsplit);
    }

    #[test]
    fn test_sliding_window_fallback() {
        let segmenter = segmenter(&["file"]);
        assert_eq!(segmenter.split("zzfilezz"), vec!["zz", "file", "zz"]);
    }

    #[test]
    fn test_tie_goes_to_backward() {
        let segmenter = segmenter(&["abc", "cde"]);
        assert_eq!(segmenter.split("abcde"), vec!["ab", "cde"]);
    }

    #[test]
    fn test_vocabulary_words_are_components() {
        let vocabulary = ProjectVocabulary::with_words(["jdk"]);
        let segmenter = segmenter_with(&["loader"], &[], &[], vocabulary);
        assert_eq!(segmenter.split("jdkloader"), vec!["jdk", "loader"]);
    }

    #[test]
    fn test_cleanup_merges_known_concatenations() {
        let segmenter = segmenter(&["foot", "ball", "football", "game"]);

        assert_eq!(
            segmenter.merge_adjacent(&strings(&["foot", "ball", "game"])),
            strings(&["football", "game"])
        );
        assert_eq!(
            segmenter.merge_adjacent(&strings(&["game", "foot", "ball"])),
            strings(&["game", "football"])
        );
    }

    #[test]
    fn test_scores() {
        let segmenter = segmenter_with(
            &["redo", "buff"],
            &[],
            &[],
            ProjectVocabulary::with_words(["buff"]),
        );

        assert_eq!(segmenter.parsimony_score(&strings(&["redo", "buff"])), 500);
        assert_eq!(segmenter.parsimony_score(&strings(&["red", "obuff"])), 0);
        assert_eq!(segmenter.weighted_score(&strings(&["redo", "buff"])), 101);
        assert_eq!(segmenter.weighted_score(&strings(&["xx", "buff", "yy"])), 34);
        assert_eq!(segmenter.weighted_score(&[]), 0);
    }

    #[test]
    fn test_find_best_prefers_parsimony_then_fewest_tokens() {
        let segmenter = segmenter(&["abc", "def", "abcdef"]);
        let best = segmenter.find_best(vec![
            strings(&["abc", "def"]),
            strings(&["abcdef"]),
            strings(&["ab", "cdef"]),
        ]);
        assert_eq!(best, (strings(&["abcdef"]), 100));
        assert_eq!(segmenter.find_best(Vec::new()), (Vec::new(), 0));
    }

    fn repetitive_segmenter(limit: usize) -> Segmenter {
        let dictionaries = DictionarySet::new(
            aggregated_with(&["aaa", "aaaa", "aaaaa"], &[], &[]),
            &[] as &[&str],
            &[] as &[&str],
            ProjectVocabulary::new(),
        );
        Segmenter::new(Arc::new(dictionaries), limit)
    }

    #[test]
    fn test_candidate_budget_covers_sliding_window() {
        // unknown end characters force the sliding-window search
        let fragment = format!("b{}b", "a".repeat(40));
        let chars: Vec<char> = fragment.chars().collect();
        let segmenter = repetitive_segmenter(64);

        let mut budget = Budget::new(64);
        let tokens = segmenter.search(&chars, &mut budget);
        assert_eq!(tokens.concat(), fragment);

        // past the limit each generation pass completes a single branch:
        // forward, backward and two per sliding seed
        let passes = 2 + 2 * (chars.len() / 2 - 1);
        assert!(budget.is_exhausted());
        assert!(
            budget.produced <= 64 + passes,
            "{} candidates produced",
            budget.produced
        );
    }

    #[test]
    fn test_long_repetitive_fragment_is_split() {
        let segmenter = repetitive_segmenter(Segmenter::DEFAULT_CANDIDATE_LIMIT);
        let fragment = format!("b{}b", "a".repeat(80));

        let tokens = segmenter.split(&fragment);
        assert!(tokens.len() > 1);
        assert_eq!(tokens.concat(), fragment);
    }
}
