//! CSV helpers shared by the command handlers.

use std::path::Path;

use anyhow::Context;

use revlens_core::ReviewRecord;
use revlens_nlp::{RankedTerm, ThemeCount};

/// Read a review table from a CSV file with headers.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row fails to
/// deserialize into a [`ReviewRecord`].
pub(crate) fn read_reviews(path: &Path) -> anyhow::Result<Vec<ReviewRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ReviewRecord =
            row.with_context(|| format!("reading review row from {}", path.display()))?;
        records.push(record);
    }

    Ok(records)
}

/// Write a review table, derived columns included, to a CSV file.
pub(crate) fn write_reviews(path: &Path, records: &[ReviewRecord]) -> anyhow::Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write one bank's ranked terms as a (term, score) CSV.
pub(crate) fn write_terms(path: &Path, terms: &[RankedTerm]) -> anyhow::Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    for term in terms {
        writer.serialize(term)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write aggregation rows as a (bank_name, themes, n_reviews) CSV.
pub(crate) fn write_theme_counts(path: &Path, rows: &[ThemeCount]) -> anyhow::Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["bank_name", "themes", "n_reviews"])?;
    for row in rows {
        let n_reviews = row.n_reviews.to_string();
        writer.write_record([row.bank_name.as_str(), row.theme.as_str(), n_reviews.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

/// Turn a bank name into a filesystem-safe file stem.
pub(crate) fn file_stem_for(bank_name: &str) -> String {
    let stem: String = bank_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if stem.chars().all(|c| c == '_') {
        "bank".to_string()
    } else {
        stem
    }
}
