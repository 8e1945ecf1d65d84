use std::{
    fs::{File, create_dir_all},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::prefix::{DisplayStyle, PrefixEntry, PrefixError, RewriteOptions, active_entries};

/// Settings as stored on disk
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PrefixConfig {
    #[serde(rename = "commitMessagePrefixes")]
    pub prefixes: Vec<PrefixEntry>,
    pub label_style: DisplayStyle,
    #[serde(rename = "includeEmojiInCommitMessage")]
    pub include_emoji: bool,
    pub append_emoji_to_end: bool,
}

impl PrefixConfig {
    pub fn active_prefixes(&self) -> Vec<PrefixEntry> {
        active_entries(&self.prefixes)
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions::new(self.include_emoji, self.append_emoji_to_end)
    }

    /// Apply the command line overrides for a single invocation. Flags can only turn the emoji
    /// options on.
    pub fn with_overrides(
        mut self,
        label_style: Option<DisplayStyle>,
        include_emoji: bool,
        append_emoji_to_end: bool,
    ) -> Self {
        if let Some(label_style) = label_style {
            self.label_style = label_style;
        }
        self.include_emoji |= include_emoji;
        self.append_emoji_to_end |= append_emoji_to_end;
        self
    }
}

/// Where the prefix settings come from
pub trait ConfigSource {
    fn load(&self) -> Result<PrefixConfig, PrefixError>;
}

/// Settings read from a JSON file
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `path` when given, the default location otherwise
    pub fn resolve(path: Option<&str>) -> Result<Self, PrefixError> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(Self::default_path()?)),
        }
    }

    /// `~/.config/commit-prefix/settings.json`
    pub fn default_path() -> Result<PathBuf, PrefixError> {
        dirs::home_dir()
            .map(|home| home.join(".config").join("commit-prefix").join("settings.json"))
            .ok_or_else(|| {
                PrefixError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Home directory not found",
                ))
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the settings, creating the parent directory when needed
    pub fn save(&self, config: &PrefixConfig) -> Result<(), PrefixError> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent)?;
        }

        let mut file = File::create(&self.path)?;
        file.write_all(serde_json::to_string_pretty(config)?.as_bytes())?;
        file.write_all(b"\n")?;
        info!(path = ?self.path, "Settings saved");
        Ok(())
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<PrefixConfig, PrefixError> {
        if !self.path.exists() {
            debug!(path = ?self.path, "Settings file not found, using defaults");
            return Ok(PrefixConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(PrefixConfig::default());
        }

        let config: PrefixConfig = serde_json::from_str(&content)?;
        debug!(
            path = ?self.path,
            prefixes = config.prefixes.len(),
            "Settings loaded"
        );
        Ok(config)
    }
}
