use std::collections::HashSet;

/// Rejoins detached prefixes with the token that follows them,
/// e.g. `sub`, `Menu` becomes `subMenu`.
#[derive(Debug, Clone)]
pub struct PrefixConcatenator {
    prefixes: HashSet<String>,
}

impl PrefixConcatenator {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|prefix| prefix.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_prefix(&self, token: &str) -> bool {
        self.prefixes.contains(&token.to_lowercase())
    }

    pub fn concatenate(&self, tokens: &[String]) -> Vec<String> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut tokens = tokens.iter();

        while let Some(token) = tokens.next() {
            if self.is_prefix(token) {
                if let Some(next) = tokens.next() {
                    output.push(format!("{}{}", token, next));
                    continue;
                }
            }
            output.push(token.clone());
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_concatenates_prefix_with_next_token() {
        let concatenator = PrefixConcatenator::new(["pre", "sub"]);

        assert_eq!(
            concatenator.concatenate(&strings(&["add", "sub", "Menu"])),
            strings(&["add", "subMenu"])
        );
        assert_eq!(
            concatenator.concatenate(&strings(&["PRE", "LOAD", "data"])),
            strings(&["PRELOAD", "data"])
        );
    }

    #[test]
    fn test_trailing_prefix_is_kept() {
        let concatenator = PrefixConcatenator::new(["pre", "sub"]);

        assert_eq!(
            concatenator.concatenate(&strings(&["menu", "sub"])),
            strings(&["menu", "sub"])
        );
        assert!(concatenator.concatenate(&[]).is_empty());
    }
}
