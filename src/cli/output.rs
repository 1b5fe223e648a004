use crate::TaggedToken;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Tokens {
    Plain(Vec<String>),
    Tagged(Vec<TaggedToken>),
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenizedIdentifier {
    pub identifier: String,
    pub tokens: Tokens,
}

pub fn print_results(
    results: &[TokenizedIdentifier],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                println!("{}", format_text(result, colored_output));
            }
            Ok(())
        }
        OutputFormat::Json => print_json(results),
    }
}

fn print_json(results: &[TokenizedIdentifier]) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("Failed to serialize tokens")?;
    println!("{}", json);
    Ok(())
}

/// `identifier → tok·tok·tok`, with word-list names for tagged tokens
pub fn format_text(result: &TokenizedIdentifier, colored_output: bool) -> String {
    let separator = if colored_output {
        "·".dimmed().to_string()
    } else {
        "·".to_string()
    };

    let tokens: Vec<String> = match &result.tokens {
        Tokens::Plain(tokens) => tokens
            .iter()
            .map(|token| {
                if colored_output {
                    token.green().to_string()
                } else {
                    token.clone()
                }
            })
            .collect(),
        Tokens::Tagged(tokens) => tokens
            .iter()
            .map(|token| format_tagged(token, colored_output))
            .collect(),
    };

    if colored_output {
        format!(
            "{} {} {}",
            result.identifier.bold(),
            "→".dimmed(),
            tokens.join(&separator)
        )
    } else {
        format!("{} → {}", result.identifier, tokens.join(&separator))
    }
}

fn format_tagged(token: &TaggedToken, colored_output: bool) -> String {
    if !colored_output {
        return token.to_string();
    }

    if token.is_known() {
        let tags: Vec<&str> = token.word_lists.iter().map(String::as_str).collect();
        format!(
            "{}{}",
            token.content.green(),
            format!("[{}]", tags.join(",")).dimmed()
        )
    } else {
        token.content.yellow().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_plain_text_line() {
        let result = TokenizedIdentifier {
            identifier: "HTMLEditorKit".to_string(),
            tokens: Tokens::Plain(vec!["HTML".into(), "Editor".into(), "Kit".into()]),
        };

        assert_eq!(format_text(&result, false), "HTMLEditorKit → HTML·Editor·Kit");
    }

    #[test]
    fn test_tagged_text_line() {
        let tags: BTreeSet<String> = ["en".to_string()].into_iter().collect();
        let result = TokenizedIdentifier {
            identifier: "fooBar".to_string(),
            tokens: Tokens::Tagged(vec![
                TaggedToken::new("foo", BTreeSet::new()),
                TaggedToken::new("Bar", tags),
            ]),
        };

        assert_eq!(format_text(&result, false), "fooBar → foo·Bar [en]");
    }

    #[test]
    fn test_json_shape() {
        let result = TokenizedIdentifier {
            identifier: "fooBar".to_string(),
            tokens: Tokens::Plain(vec!["foo".into(), "Bar".into()]),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["identifier"], "fooBar");
        assert_eq!(json["tokens"][1], "Bar");
    }
}
