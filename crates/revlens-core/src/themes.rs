//! Theme-rule configuration: an ordered list of (theme, keyword phrases).
//!
//! The order of rules in the file is the order themes are tested and the
//! order they appear in a review's theme list, so it is part of the
//! configuration contract, not an implementation detail.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One theme and the keyword phrases that trigger it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRule {
    pub name: String,
    pub phrases: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRulesFile {
    pub themes: Vec<ThemeRule>,
}

/// Built-in default theme rules for banking-app reviews.
///
/// Used when no themes file is supplied. Deployments are expected to tune
/// these after inspecting per-bank keyword rankings.
#[must_use]
pub fn default_theme_rules() -> Vec<ThemeRule> {
    let rule = |name: &str, phrases: &[&str]| ThemeRule {
        name: name.to_string(),
        phrases: phrases.iter().map(ToString::to_string).collect(),
    };

    vec![
        rule(
            "Account Access Issues",
            &[
                "login",
                "password",
                "signin",
                "otp",
                "2fa",
                "auth",
                "authenticate",
                "authen",
            ],
        ),
        rule(
            "Transaction Performance",
            &[
                "transfer",
                "delay",
                "pending",
                "failed",
                "refund",
                "processing",
                "timeout",
            ],
        ),
        rule(
            "App Performance & Stability",
            &["slow", "crash", "crashes", "freeze", "bug", "lag", "error"],
        ),
        rule(
            "Customer Support",
            &[
                "support",
                "customer service",
                "agent",
                "help",
                "ticket",
                "call center",
                "respond",
            ],
        ),
        rule(
            "Card & Payments",
            &["card", "atm", "payment", "pos", "charge", "decline"],
        ),
        rule(
            "UX & Features",
            &[
                "interface",
                "ui",
                "feature",
                "navigation",
                "design",
                "experience",
                "toggle",
            ],
        ),
    ]
}

/// Load and validate theme rules from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_theme_rules(path: &Path) -> Result<Vec<ThemeRule>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ThemesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: ThemeRulesFile = serde_yaml::from_str(&content)?;
    validate_theme_rules(&file.themes)?;

    Ok(file.themes)
}

fn validate_theme_rules(rules: &[ThemeRule]) -> Result<(), ConfigError> {
    if rules.is_empty() {
        return Err(ConfigError::Validation(
            "theme rules file defines no themes".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for rule in rules {
        if rule.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme name must be non-empty".to_string(),
            ));
        }

        if !seen.insert(rule.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate theme name: '{}'",
                rule.name
            )));
        }

        if rule.phrases.is_empty() {
            return Err(ConfigError::Validation(format!(
                "theme '{}' has no keyword phrases",
                rule.name
            )));
        }

        if rule.phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "theme '{}' has an empty keyword phrase",
                rule.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid() {
        let rules = default_theme_rules();
        assert!(validate_theme_rules(&rules).is_ok());
        assert_eq!(rules.len(), 6);
    }

    #[test]
    fn default_rule_order_starts_with_account_access() {
        let rules = default_theme_rules();
        assert_eq!(rules[0].name, "Account Access Issues");
        assert_eq!(rules[5].name, "UX & Features");
    }

    #[test]
    fn validate_rejects_empty_rule_set() {
        let err = validate_theme_rules(&[]).unwrap_err();
        assert!(err.to_string().contains("no themes"));
    }

    #[test]
    fn validate_rejects_empty_theme_name() {
        let rules = vec![ThemeRule {
            name: "  ".to_string(),
            phrases: vec!["card".to_string()],
        }];
        let err = validate_theme_rules(&rules).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_theme_names() {
        let rules = vec![
            ThemeRule {
                name: "Cards".to_string(),
                phrases: vec!["card".to_string()],
            },
            ThemeRule {
                name: "cards".to_string(),
                phrases: vec!["atm".to_string()],
            },
        ];
        let err = validate_theme_rules(&rules).unwrap_err();
        assert!(err.to_string().contains("duplicate theme name"));
    }

    #[test]
    fn validate_rejects_theme_without_phrases() {
        let rules = vec![ThemeRule {
            name: "Cards".to_string(),
            phrases: vec![],
        }];
        let err = validate_theme_rules(&rules).unwrap_err();
        assert!(err.to_string().contains("no keyword phrases"));
    }

    #[test]
    fn parses_yaml_rule_file() {
        let yaml = "themes:\n  - name: Customer Support\n    phrases: [support, 'customer service']\n  - name: Card & Payments\n    phrases: [card, atm]\n";
        let file: ThemeRulesFile = serde_yaml::from_str(yaml).unwrap();
        assert!(validate_theme_rules(&file.themes).is_ok());
        assert_eq!(file.themes[0].name, "Customer Support");
        assert_eq!(file.themes[1].phrases, vec!["card", "atm"]);
    }
}
