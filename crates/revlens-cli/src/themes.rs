//! `themes` command: tag reviews with configurable keyword rules.

use std::path::Path;

use revlens_core::{default_theme_rules, load_theme_rules, AppConfig, ThemeRule};
use revlens_nlp::{tag_reviews, ThemeTagger};

use crate::io;

pub(crate) fn run_themes(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    themes_config: Option<&Path>,
) -> anyhow::Result<()> {
    let records = io::read_reviews(input)?;
    tracing::info!(reviews = records.len(), "loaded review table");

    let rules = resolve_rules(config, themes_config)?;
    let tagger = ThemeTagger::new(&rules)?;
    let tagged = tag_reviews(&tagger, records);
    io::write_reviews(output, &tagged)?;

    println!(
        "tagged {} reviews against {} themes -> {}",
        tagged.len(),
        rules.len(),
        output.display()
    );
    Ok(())
}

/// Pick the theme rule set: an explicit `--themes-config` file wins, then
/// the configured path if it exists, then the built-in defaults.
fn resolve_rules(
    config: &AppConfig,
    themes_config: Option<&Path>,
) -> anyhow::Result<Vec<ThemeRule>> {
    if let Some(path) = themes_config {
        return Ok(load_theme_rules(path)?);
    }

    if config.themes_path.exists() {
        return Ok(load_theme_rules(&config.themes_path)?);
    }

    tracing::info!("no theme rules file found, using built-in defaults");
    Ok(default_theme_rules())
}
