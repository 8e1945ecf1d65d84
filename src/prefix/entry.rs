use serde::{Deserialize, Serialize};

/// A configured commit prefix the user can apply to the pending message
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrefixEntry {
    pub label: String,
    pub prefix: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub main: bool,
}

fn default_active() -> bool {
    true
}

impl PrefixEntry {
    pub fn new(label: &str, prefix: &str, emoji: &str) -> Self {
        Self {
            label: label.to_string(),
            prefix: prefix.to_string(),
            emoji: emoji.to_string(),
            active: true,
            main: false,
        }
    }

    pub fn main(mut self, main: bool) -> Self {
        self.main = main;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The text shown in the picklist for this entry
    pub fn display_label(&self, style: DisplayStyle) -> String {
        match style {
            DisplayStyle::Fancy => format!("{} {}", self.emoji, self.label),
            DisplayStyle::Default => self.label.clone(),
        }
    }

    /// The text that leads a message carrying this entry, e.g. `✨ feat:` or `feat:`
    pub fn leading_text(&self, options: RewriteOptions) -> String {
        if options.emoji_leads() {
            self.with_emoji()
        } else {
            self.prefix.clone()
        }
    }

    /// `emoji + " " + prefix`, regardless of the options in effect
    pub fn with_emoji(&self) -> String {
        format!("{} {}", self.emoji, self.prefix)
    }
}

/// Keep only the entries eligible for selection and prefix detection, in configuration order.
pub fn active_entries(entries: &[PrefixEntry]) -> Vec<PrefixEntry> {
    entries.iter().filter(|entry| entry.active).cloned().collect()
}

/// How entries are labeled in the picklist
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Emoji in front of the label
    Fancy,
    #[default]
    #[serde(other)]
    Default,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    pub include_emoji: bool,
    pub append_emoji_to_end: bool,
}

impl RewriteOptions {
    pub fn new(include_emoji: bool, append_emoji_to_end: bool) -> Self {
        Self {
            include_emoji,
            append_emoji_to_end,
        }
    }

    /// Whether the emoji is written in front of the prefix
    pub fn emoji_leads(&self) -> bool {
        self.include_emoji && !self.append_emoji_to_end
    }
}
