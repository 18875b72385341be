//! Include/exclude name filtering.
//!
//! Filters arrive as comma-separated token lists. A token prefixed with `-`
//! excludes; anything else includes. Tokens made of only word characters are
//! literal exact matches; every other token is additionally compiled as a
//! regular expression anchored at the start of the candidate name. An empty
//! include list, or one holding only `/`, means include everything.

use busgraph_error::{Error, Result};
use regex::Regex;

/// One filter token: the raw text plus an optional compiled regex.
///
/// The raw text always participates as an exact match, even for regex
/// tokens; the regex only applies to tokens containing non-word characters.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    regex: Option<Regex>,
}

impl Pattern {
    fn compile(token: &str) -> Result<Self> {
        let is_word = !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        let regex = if is_word {
            None
        } else {
            let anchored = format!("^(?:{token})");
            let regex = Regex::new(&anchored).map_err(|e| {
                Error::pattern_invalid(token)
                    .with_operation("filter::parse")
                    .set_source(e)
            })?;
            Some(regex)
        };
        Ok(Self {
            raw: token.to_string(),
            regex,
        })
    }

    fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        if name == self.raw {
            return true;
        }
        self.regex.as_ref().is_some_and(|re| re.is_match(name))
    }
}

/// A parsed include/exclude filter over node or topic names.
#[derive(Debug, Clone)]
pub struct NameFilter {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
}

impl NameFilter {
    /// Parse a comma-separated filter string.
    ///
    /// Fails fast with a `PatternInvalid` error on the first token that does
    /// not compile; no partial filter is ever returned.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for token in spec.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Some(rest) = token.strip_prefix('-') {
                excludes.push(Pattern::compile(rest)?);
            } else {
                includes.push(Pattern::compile(token)?);
            }
        }

        if includes.is_empty() || (includes.len() == 1 && includes[0].raw == "/") {
            includes = vec![Pattern::compile(".*")?];
        }

        Ok(Self { includes, excludes })
    }

    /// A filter that keeps everything.
    pub fn include_all() -> Self {
        Self::parse("").expect("the universal filter always compiles")
    }

    /// True if the name matches an include pattern and no exclude pattern.
    pub fn keeps(&self, name: &str) -> bool {
        matches_any(name, &self.includes) && !matches_any(name, &self.excludes)
    }
}

fn matches_any(name: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|p| p.matches(name))
}
