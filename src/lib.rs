pub mod cli;
pub mod config;
pub mod dict;
pub mod dictionary;
pub mod error;
pub mod tokenizer;

pub use config::Config;
pub use dictionary::{Dictionary, DictionarySet};
pub use error::{Error, Result};
pub use tokenizer::{IdentifierTokenizer, SplitMode, TokenizerOptions};

use serde::Serialize;
use std::collections::BTreeSet;

/// A token and the names of the word lists that recognise it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub content: String,
    pub word_lists: BTreeSet<String>,
}

impl TaggedToken {
    pub fn new(content: impl Into<String>, word_lists: BTreeSet<String>) -> Self {
        Self {
            content: content.into(),
            word_lists,
        }
    }

    pub fn is_known(&self) -> bool {
        !self.word_lists.is_empty()
    }
}

impl std::fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)?;
        if !self.word_lists.is_empty() {
            let tags: Vec<&str> = self.word_lists.iter().map(String::as_str).collect();
            write!(f, " [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}
