//! `aggregate` command: per-(bank, theme) review counts.

use std::path::Path;

use revlens_nlp::count_themes;

use crate::io;

pub(crate) fn run_aggregate(input: &Path, output: &Path) -> anyhow::Result<()> {
    let records = io::read_reviews(input)?;
    tracing::info!(reviews = records.len(), "loaded review table");

    let counts = count_themes(&records);
    io::write_theme_counts(output, &counts)?;

    println!(
        "aggregated {} reviews into {} (bank, theme) rows -> {}",
        records.len(),
        counts.len(),
        output.display()
    );
    Ok(())
}
