use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefixError {
    #[error("No Git repositories found")]
    NoRepository,
    #[error("No active prefixes found in settings.")]
    NoActivePrefixes,
    #[error("Selected prefix not found.")]
    SelectedPrefixNotFound,
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to (de)serialize settings: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Failed to build prefix pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Command error: {0}")]
    Command(String),
    #[error("Settings error: {0}")]
    Settings(String),
}

impl PrefixError {
    /// Conditions that end an invocation without touching the commit message and are
    /// shown to the user as-is.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::NoRepository | Self::NoActivePrefixes | Self::SelectedPrefixNotFound
        )
    }
}
