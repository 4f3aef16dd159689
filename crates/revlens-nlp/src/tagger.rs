//! Rule-based multi-label theme assignment.

use regex::Regex;
use revlens_core::{ThemeRule, FALLBACK_THEME};

use crate::error::NlpError;

struct CompiledRule {
    name: String,
    patterns: Vec<Regex>,
}

/// Assigns themes to review text by whole-word keyword matching.
///
/// Rules are an explicit ordered list: themes are tested in configuration
/// order and appear in that order in the output, so rule order is part of
/// the contract. Each theme short-circuits on its first matching phrase.
/// Matching is on word boundaries — keyword "card" matches "this card is
/// great" but not "cardboard".
pub struct ThemeTagger {
    rules: Vec<CompiledRule>,
}

impl ThemeTagger {
    /// Compile a tagger from an ordered rule list.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::ThemeRule`] if a phrase fails to compile. Phrases
    /// are regex-escaped before compilation, so this only fires for phrases
    /// long enough to exceed the regex size limit.
    pub fn new(rules: &[ThemeRule]) -> Result<Self, NlpError> {
        let compiled = rules
            .iter()
            .map(|rule| {
                let patterns = rule
                    .phrases
                    .iter()
                    .map(|phrase| {
                        Regex::new(&format!(r"\b{}\b", regex::escape(&phrase.to_lowercase())))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CompiledRule {
                    name: rule.name.clone(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>, NlpError>>()?;

        Ok(Self { rules: compiled })
    }

    /// Assign themes to one review text.
    ///
    /// Output is never empty: zero rule matches yield the `["Other"]`
    /// sentinel. A review can carry any number of themes; each theme appears
    /// at most once.
    #[must_use]
    pub fn assign(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut themes: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.patterns.iter().any(|p| p.is_match(&lowered)))
            .map(|rule| rule.name.clone())
            .collect();

        if themes.is_empty() {
            themes.push(FALLBACK_THEME.to_string());
        }
        themes
    }
}
