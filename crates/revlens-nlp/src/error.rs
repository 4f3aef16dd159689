use thiserror::Error;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("lemmatizer error: {0}")]
    Lemmatizer(String),

    #[error("invalid theme rule: {0}")]
    ThemeRule(#[from] regex::Error),
}
