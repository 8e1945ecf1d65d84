//! This module contains the sample prefix table written by `init`.

use super::entry::PrefixEntry;

/// Conventional commit types with their gitmoji: `(label, prefix, emoji, main)`.
pub static CONVENTIONAL: &[(&str, &str, &str, bool)] = &[
    ("Feature", "feat:", "✨", true),
    ("Fix", "fix:", "🐛", true),
    ("Docs", "docs:", "📝", true),
    ("Refactor", "refactor:", "♻️", true),
    ("Chore", "chore:", "🔧", true),
    ("Style", "style:", "🎨", false),
    ("Performance", "perf:", "⚡️", false),
    ("Test", "test:", "✅", false),
    ("Build", "build:", "📦️", false),
    ("CI", "ci:", "👷", false),
    ("Revert", "revert:", "⏪️", false),
];

pub fn conventional_prefixes() -> Vec<PrefixEntry> {
    CONVENTIONAL
        .iter()
        .map(|(label, prefix, emoji, main)| PrefixEntry::new(label, prefix, emoji).main(*main))
        .collect()
}
