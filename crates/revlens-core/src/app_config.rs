use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Postgres connection string; only required by the db-facing commands.
    pub database_url: Option<String>,
    pub env: Environment,
    pub log_level: String,
    pub themes_path: PathBuf,
    /// Base URL of the external binary sentiment classifier, if configured.
    pub classifier_url: Option<String>,
    /// Base URL of the external lemmatizer service, if configured.
    pub lemmatizer_url: Option<String>,
    pub classifier_batch_size: usize,
    /// Scores with magnitude below this are reclassified to neutral by the
    /// model backend.
    pub sentiment_neutral_band: f32,
    /// Lexicon scores above `+threshold` are positive, below `-threshold`
    /// negative.
    pub lexicon_threshold: f32,
    pub keyword_top_n: usize,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("themes_path", &self.themes_path)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[redacted]"),
            )
            .field("classifier_url", &self.classifier_url)
            .field("lemmatizer_url", &self.lemmatizer_url)
            .field("classifier_batch_size", &self.classifier_batch_size)
            .field("sentiment_neutral_band", &self.sentiment_neutral_band)
            .field("lexicon_threshold", &self.lexicon_threshold)
            .field("keyword_top_n", &self.keyword_top_n)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
