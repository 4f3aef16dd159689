//! Review and bank record types shared across the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Theme assigned when no configured keyword phrase matches a review.
pub const FALLBACK_THEME: &str = "Other";

/// Three-way sentiment polarity of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// One customer review, as read from the tabular source.
///
/// The pipeline never rewrites the source fields; scoring and tagging only
/// fill in the trailing `Option` fields. `themes` is stored in CSV as a
/// `;`-joined list so records round-trip through the same schema at every
/// stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub bank_name: String,
    #[serde(default)]
    pub bank_code: String,
    /// Review body. A missing column value deserializes as the empty string.
    #[serde(default)]
    pub review_text: String,
    pub rating: i16,
    pub review_date: NaiveDate,
    pub review_year: i32,
    pub review_month: u32,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub thumbs_up: i64,
    #[serde(default)]
    pub text_length: i64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub sentiment_label: Option<SentimentLabel>,
    #[serde(default)]
    pub sentiment_score: Option<f32>,
    #[serde(default, with = "themes_field")]
    pub themes: Option<Vec<String>>,
}

impl ReviewRecord {
    /// Assigned themes, or the `["Other"]` fallback if tagging has not run.
    #[must_use]
    pub fn themes_or_fallback(&self) -> Vec<String> {
        match &self.themes {
            Some(themes) if !themes.is_empty() => themes.clone(),
            _ => vec![FALLBACK_THEME.to_string()],
        }
    }
}

/// Serde adapter storing `themes` as a single `;`-joined CSV field.
mod themes_field {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        themes: &Option<Vec<String>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match themes {
            Some(list) => serializer.serialize_str(&list.join(";")),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let joined = raw.unwrap_or_default();
        if joined.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(
            joined
                .split(';')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ReviewRecord {
        ReviewRecord {
            bank_name: "Awash Bank".to_string(),
            bank_code: "AWB".to_string(),
            review_text: "Great app, love it!".to_string(),
            rating: 5,
            review_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            review_year: 2024,
            review_month: 3,
            user_name: "user1".to_string(),
            thumbs_up: 2,
            text_length: 19,
            source: "play_store".to_string(),
            sentiment_label: None,
            sentiment_score: None,
            themes: None,
        }
    }

    #[test]
    fn sentiment_label_display_is_lowercase() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(SentimentLabel::Neutral.to_string(), "neutral");
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }

    #[test]
    fn themes_or_fallback_defaults_to_other() {
        let record = sample_record();
        assert_eq!(record.themes_or_fallback(), vec!["Other".to_string()]);
    }

    #[test]
    fn themes_or_fallback_keeps_assigned_themes() {
        let mut record = sample_record();
        record.themes = Some(vec!["Customer Support".to_string()]);
        assert_eq!(
            record.themes_or_fallback(),
            vec!["Customer Support".to_string()]
        );
    }

    #[test]
    fn themes_round_trip_through_csv() {
        let mut record = sample_record();
        record.themes = Some(vec![
            "Customer Support".to_string(),
            "Card & Payments".to_string(),
        ]);

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(&record).unwrap();
        let bytes = writer.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let parsed: ReviewRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(
            parsed.themes,
            Some(vec![
                "Customer Support".to_string(),
                "Card & Payments".to_string()
            ])
        );
    }

    #[test]
    fn empty_themes_field_deserializes_as_none() {
        let csv_data = "bank_name,bank_code,review_text,rating,review_date,review_year,review_month,user_name,thumbs_up,text_length,source,sentiment_label,sentiment_score,themes\n\
                        Awash Bank,AWB,ok,3,2024-03-15,2024,3,u,0,2,play_store,,,\n";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let parsed: ReviewRecord = reader.deserialize().next().unwrap().unwrap();
        assert!(parsed.themes.is_none());
        assert!(parsed.sentiment_label.is_none());
        assert!(parsed.sentiment_score.is_none());
    }
}
