pub mod boundary;
pub mod digits;
pub mod engine;
pub mod prefix;
pub mod segmenter;

pub use boundary::BoundaryTokenizer;
pub use digits::DigitSplitter;
pub use engine::{IdentifierTokenizer, SplitMode, TokenizerOptions};
pub use prefix::PrefixConcatenator;
pub use segmenter::{Segmenter, SplitOutcome};

pub(crate) fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Split `chars` in two at `at`
pub(crate) fn split_at(chars: &[char], at: usize) -> Vec<String> {
    vec![collect(&chars[..at]), collect(&chars[at..])]
}

/// Break text into alternating runs of ASCII digits and everything else
pub(crate) fn digit_runs(text: &str) -> Vec<String> {
    let mut runs: Vec<String> = Vec::new();
    let mut previous: Option<bool> = None;

    for c in text.chars() {
        let is_digit = c.is_ascii_digit();
        match runs.last_mut() {
            Some(run) if previous == Some(is_digit) => run.push(c),
            _ => runs.push(c.to_string()),
        }
        previous = Some(is_digit);
    }

    runs
}
