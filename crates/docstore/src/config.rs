/// Primary document store configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Cloud project hosting the database. `None` leaves the primary store
    /// unconfigured and every read is served by the relational mirror.
    pub project_id: Option<String>,
    /// Database name (default: `(default)`).
    pub database: String,
    /// REST API root (default: `https://firestore.googleapis.com/v1`).
    pub base_url: String,
    /// OAuth2 bearer token sent with every request, if set.
    pub access_token: Option<String>,
    /// API key appended as `?key=`, if set.
    pub api_key: Option<String>,
}

impl FirestoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                |
    /// |--------------------------|----------------------------------------|
    /// | `FIRESTORE_PROJECT_ID`   | unset (primary store disabled)         |
    /// | `FIRESTORE_DATABASE`     | `(default)`                            |
    /// | `FIRESTORE_BASE_URL`     | `https://firestore.googleapis.com/v1`  |
    /// | `FIRESTORE_ACCESS_TOKEN` | unset                                  |
    /// | `FIRESTORE_API_KEY`      | unset                                  |
    pub fn from_env() -> Self {
        Self {
            project_id: non_empty_var("FIRESTORE_PROJECT_ID"),
            database: non_empty_var("FIRESTORE_DATABASE").unwrap_or_else(|| "(default)".into()),
            base_url: non_empty_var("FIRESTORE_BASE_URL")
                .unwrap_or_else(|| "https://firestore.googleapis.com/v1".into()),
            access_token: non_empty_var("FIRESTORE_ACCESS_TOKEN"),
            api_key: non_empty_var("FIRESTORE_API_KEY"),
        }
    }

    /// Configuration with no project set.
    pub fn disabled() -> Self {
        Self {
            project_id: None,
            database: "(default)".into(),
            base_url: "https://firestore.googleapis.com/v1".into(),
            access_token: None,
            api_key: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
