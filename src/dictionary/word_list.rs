use crate::error::{Error, Result};
use fst::{Set, SetBuilder};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// A named set of lower-cased words backed by an FST.
pub struct WordList {
    tag: String,
    set: Set<Vec<u8>>,
}

impl WordList {
    /// Build an in-memory word list. Entries are trimmed and lower-cased.
    pub fn from_words<I, S>(tag: impl Into<String>, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = Set::from_iter(normalise(words))?;

        Ok(Self {
            tag: tag.into(),
            set,
        })
    }

    /// Read a plain-text word list (one term per line, `#` comments)
    pub fn from_text_file(tag: impl Into<String>, path: &Path) -> Result<Self> {
        let terms = read_terms(path)?;
        Self::from_words(tag, terms)
    }

    /// Load a word list previously compiled with [`WordList::build_fst_file`]
    pub fn load_fst(tag: impl Into<String>, path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Set::new(bytes)?;

        Ok(Self {
            tag: tag.into(),
            set,
        })
    }

    /// Compile a word list to an FST file on disk
    pub fn build_fst_file(words: &[String], output_path: &Path) -> Result<usize> {
        let sorted_words = normalise(words);

        let file = File::create(output_path).map_err(|source| Error::Io {
            path: output_path.to_path_buf(),
            source,
        })?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer)?;

        for word in &sorted_words {
            builder.insert(word.as_bytes())?;
        }

        builder.finish()?;

        Ok(sorted_words.len())
    }

    pub fn is_word(&self, token: &str) -> bool {
        self.set.contains(token.to_lowercase().as_bytes())
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl std::fmt::Debug for WordList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList")
            .field("tag", &self.tag)
            .field("entries", &self.set.len())
            .finish()
    }
}

/// Read the terms of a word-list file.
///
/// One term per line. A `#` starts a comment, either on its own line or at
/// the end of a term; blank lines are skipped.
pub fn read_terms(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_terms(&content))
}

pub fn parse_terms(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let payload = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };
            let payload = payload.trim();
            if payload.is_empty() {
                None
            } else {
                Some(payload.to_string())
            }
        })
        .collect()
}

// FST keys must be inserted in lexicographic order without duplicates
fn normalise<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted_words: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    sorted_words.sort();
    sorted_words.dedup();
    sorted_words
}
