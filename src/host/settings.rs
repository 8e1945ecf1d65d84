use tracing::info;

use super::config::{FileConfigSource, PrefixConfig};
use crate::{prefix::PrefixError, tools::cli::CliExecutor};

/// Opens the place where the user edits the prefix settings
pub trait SettingsOpener {
    async fn open(&self) -> Result<(), PrefixError>;
}

/// Opens the settings file in the user's editor, creating it first if needed
#[derive(Debug, Clone)]
pub struct EditorSettingsOpener {
    source: FileConfigSource,
    editor: String,
}

impl EditorSettingsOpener {
    /// Use `$VISUAL`, then `$EDITOR`, then `vi`
    pub fn new(source: FileConfigSource) -> Self {
        let editor = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .ok()
            .filter(|editor| !editor.trim().is_empty())
            .unwrap_or_else(|| "vi".to_string());
        Self::with_editor(source, editor)
    }

    pub fn with_editor(source: FileConfigSource, editor: impl Into<String>) -> Self {
        Self {
            source,
            editor: editor.into(),
        }
    }
}

impl SettingsOpener for EditorSettingsOpener {
    async fn open(&self) -> Result<(), PrefixError> {
        if !self.source.exists() {
            self.source.save(&PrefixConfig::default())?;
        }

        // The editor may carry its own arguments, e.g. `code --wait`
        let mut parts = self.editor.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| PrefixError::Settings("No editor configured".to_string()))?;
        let path = self.source.path().to_string_lossy().to_string();
        let args: Vec<&str> = parts.chain(std::iter::once(path.as_str())).collect();

        info!(%program, %path, "Opening prefix settings");
        CliExecutor::new()
            .run_interactive(program, &args)
            .await
            .map_err(|e| PrefixError::Command(e.to_string()))
    }
}
