use super::{collect, contains_digit, digit_runs};
use crate::dictionary::{Dictionary, DictionarySet};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;

lazy_static! {
    static ref TRAILING_DIGITS: Regex = Regex::new(r"^[a-zA-Z]+[0-9]+$").unwrap();
    static ref LEADING_DIGITS: Regex = Regex::new(r"^[0-9]+[a-zA-Z]+$").unwrap();
    static ref EMBEDDED_DIGITS: Regex = Regex::new(r"^.+[0-9]+.+$").unwrap();
    static ref LETTER_DIGIT_LETTER: Regex = Regex::new(r"^[A-Za-z][0-9][A-Za-z]$").unwrap();
    // "file2string", "peer4peer"
    static ref TEXT_SPEAK: Regex = Regex::new(r"^[a-zA-Z]+(2|4)[a-zA-Z]+$").unwrap();
}

/// Splits fragments that mix letters and digits.
pub struct DigitSplitter {
    dictionaries: Arc<DictionarySet>,
}

impl DigitSplitter {
    pub fn new(dictionaries: Arc<DictionarySet>) -> Self {
        Self { dictionaries }
    }

    /// Split a digit-bearing fragment. `is_last` marks the final fragment of
    /// the identifier, where trailing digits are split off.
    pub fn split(&self, fragment: &str, is_last: bool) -> Vec<String> {
        if let Some(tokens) = self.split_on_known_abbreviations(fragment) {
            return tokens;
        }

        if TRAILING_DIGITS.is_match(fragment) {
            return if is_last {
                digit_runs(fragment)
            } else {
                vec![fragment.to_string()]
            };
        }

        if LEADING_DIGITS.is_match(fragment) {
            return digit_runs(fragment);
        }

        if EMBEDDED_DIGITS.is_match(fragment) {
            return self.split_embedded(fragment, is_last);
        }

        vec![fragment.to_string()]
    }

    // Keep digit abbreviations such as "ipv6" intact and emit what
    // surrounds them as separate pieces
    fn split_on_known_abbreviations(&self, fragment: &str) -> Option<Vec<String>> {
        let spans = self
            .dictionaries
            .aggregated()
            .digit_abbreviations()
            .find_known_spans(fragment);

        if spans.is_empty() {
            return None;
        }
        if spans.len() == 1 && spans[0] == (0..fragment.len()) {
            return Some(vec![fragment.to_string()]);
        }

        let mut tokens = Vec::with_capacity(spans.len() * 2 + 1);
        let mut cursor = 0;
        for span in spans {
            if span.start > cursor {
                tokens.push(fragment[cursor..span.start].to_string());
            }
            cursor = span.end;
            tokens.push(fragment[span].to_string());
        }
        if cursor < fragment.len() {
            tokens.push(fragment[cursor..].to_string());
        }

        Some(tokens)
    }

    fn split_embedded(&self, fragment: &str, is_last: bool) -> Vec<String> {
        if LETTER_DIGIT_LETTER.is_match(fragment) {
            return vec![fragment.to_string()];
        }

        let chars: Vec<char> = fragment.chars().collect();
        let conventional = match upper_lower_boundary(&chars) {
            Some(b) => self.split_at_boundary(&chars, b, is_last),
            None => self.split_mixed(fragment),
        };

        if TEXT_SPEAK.is_match(fragment) {
            let text_speak = split_text_speak(fragment);
            let dictionary = self.dictionaries.aggregated();
            if dictionary.percentage_known(&text_speak) >= dictionary.percentage_known(&conventional)
            {
                return text_speak;
            }
        }

        conventional
    }

    fn split_at_boundary(&self, chars: &[char], b: usize, is_last: bool) -> Vec<String> {
        let dictionary = self.dictionaries.aggregated();
        let (head, tail) = (collect(&chars[..b]), collect(&chars[b..]));
        let (first, second) = if dictionary.is_word(&head) || dictionary.is_word(&tail) {
            (head, tail)
        } else {
            (collect(&chars[..=b]), collect(&chars[b + 1..]))
        };

        if contains_digit(&first) {
            let mut tokens = self.split(&first, false);
            tokens.push(second);
            tokens
        } else {
            let mut tokens = vec![first];
            tokens.extend(self.split(&second, is_last));
            tokens
        }
    }

    /// Bind each digit run of an `LDLDL...` fragment to a neighbouring
    /// letter run. Digits bind left unless the letter run they precede
    /// starts a known word after a known word.
    fn split_mixed(&self, fragment: &str) -> Vec<String> {
        let dictionary = self.dictionaries.aggregated();
        let runs = digit_runs(fragment);
        let n = runs.len();

        if n == 2 {
            return vec![runs.concat()];
        }

        let join = |a: usize, b: usize| format!("{}{}", runs[a], runs[b]);
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < n {
            if i + 2 < n {
                if dictionary.is_word(&runs[i + 2]) {
                    tokens.push(join(i, i + 1));
                    i += 2;
                } else if dictionary.is_word(&runs[i]) {
                    tokens.push(runs[i].clone());
                    tokens.push(join(i + 1, i + 2));
                    // bind everything that follows to the right
                    let mut base = i + 3;
                    i += 4;
                    while base < n {
                        if i < n {
                            tokens.push(join(base, i));
                        } else {
                            tokens.push(runs[base].clone());
                        }
                        base += 2;
                        i += 2;
                    }
                } else {
                    tokens.push(join(i, i + 1));
                    i += 2;
                }
            } else {
                if i + 1 < n {
                    tokens.push(join(i, i + 1));
                } else {
                    tokens.push(runs[i].clone());
                }
                i += 2;
            }
        }

        tokens
    }
}

/// Index of an uppercase character that starts a lowercase word and follows
/// another capital, e.g. the `T` of `G3FTriangle`. A match at index 0
/// (an ordinary capitalised word) means there is no usable boundary.
fn upper_lower_boundary(chars: &[char]) -> Option<usize> {
    chars
        .windows(2)
        .enumerate()
        .find(|(i, pair)| {
            pair[0].is_uppercase()
                && pair[1].is_lowercase()
                && (*i == 0 || chars[i - 1].is_uppercase())
        })
        .map(|(i, _)| i)
        .filter(|&b| b > 0)
}

// Only called on fragments matching TEXT_SPEAK, which hold a single digit
fn split_text_speak(fragment: &str) -> Vec<String> {
    match fragment.find('2').or_else(|| fragment.find('4')) {
        Some(at) => vec![
            fragment[..at].to_string(),
            fragment[at..at + 1].to_string(),
            fragment[at + 1..].to_string(),
        ],
        None => vec![fragment.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::test_support::aggregated_with;
    use crate::dictionary::{DictionarySet, ProjectVocabulary};

    fn splitter(words: &[&str], digit_abbreviations: &[&str]) -> DigitSplitter {
        let dictionaries = DictionarySet::new(
            aggregated_with(words, &[], digit_abbreviations),
            &[] as &[&str],
            &[] as &[&str],
            ProjectVocabulary::new(),
        );
        DigitSplitter::new(Arc::new(dictionaries))
    }

    #[test]
    fn test_known_digit_abbreviations() {
        let splitter = splitter(&["address"], &["ipv6", "utf8"]);

        assert_eq!(splitter.split("ipv6", true), vec!["ipv6"]);
        assert_eq!(splitter.split("IPv6Address", true), vec!["IPv6", "Address"]);
        assert_eq!(splitter.split("toUTF8", false), vec!["to", "UTF8"]);
        assert_eq!(
            splitter.split("ipv6ToUtf8Now", true),
            vec!["ipv6", "To", "Utf8", "Now"]
        );
    }

    #[test]
    fn test_trailing_digits_split_only_when_last() {
        let splitter = splitter(&["area"], &[]);

        assert_eq!(splitter.split("value42", true), vec!["value", "42"]);
        assert_eq!(splitter.split("value42", false), vec!["value42"]);
    }

    #[test]
    fn test_leading_digits() {
        let splitter = splitter(&["area"], &[]);
        assert_eq!(splitter.split("2nd", false), vec!["2", "nd"]);
    }

    #[test]
    fn test_letter_digit_letter_kept_whole() {
        let splitter = splitter(&["area"], &[]);
        assert_eq!(splitter.split("G3F", false), vec!["G3F"]);
    }

    #[test]
    fn test_upper_lower_boundary_after_digits() {
        let splitter = splitter(&["triangle"], &[]);
        assert_eq!(splitter.split("G3FTriangle", true), vec!["G3F", "Triangle"]);
    }

    #[test]
    fn test_text_speak() {
        let splitter = splitter(&["file", "string"], &[]);
        assert_eq!(splitter.split("file2string", true), vec!["file", "2", "string"]);
    }

    #[test]
    fn test_mixed_string_binding() {
        let splitter = splitter(&["abc", "def"], &[]);

        // two runs are rejoined
        assert_eq!(splitter.split_mixed("x1"), vec!["x1"]);
        // a known word after the digits binds them left
        assert_eq!(splitter.split("xyz9def", true), vec!["xyz9", "def"]);
        // a known word before unknown letters binds the digits right
        assert_eq!(splitter.split("abc3xy5qq", true), vec!["abc", "3xy", "5qq"]);
    }

    #[test]
    fn test_upper_lower_boundary_requires_capital_run() {
        let chars: Vec<char> = "G3FTriangle".chars().collect();
        assert_eq!(upper_lower_boundary(&chars), Some(3));

        let chars: Vec<char> = "Area3Triangle".chars().collect();
        assert_eq!(upper_lower_boundary(&chars), None);
    }
}
