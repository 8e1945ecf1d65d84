use regex::Regex;
use tracing::trace;

use super::{
    emoji::{strip_trailing_emoji, trailing_emoji_regex},
    entry::{PrefixEntry, RewriteOptions},
    errors::PrefixError,
};

/// Rewrites a commit message so that it carries exactly one configured prefix.
///
/// Any prefix previously applied by one of the active entries is removed before the selected one
/// is written, so applying the same selection twice leaves the message as it was after the first
/// application.
#[derive(Debug)]
pub struct MessageRewriter {
    options: RewriteOptions,
    leading: Option<Regex>,
    trailing: Regex,
}

impl MessageRewriter {
    pub fn new(active: &[PrefixEntry], options: RewriteOptions) -> Result<Self, PrefixError> {
        let patterns = comparison_patterns(active, options);
        trace!(?patterns, "Leading prefix patterns");

        let leading = if patterns.is_empty() {
            None
        } else {
            let alternation = patterns
                .iter()
                .map(|pattern| regex::escape(pattern))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"^(?:{})\s*", alternation))?)
        };

        let trailing = trailing_emoji_regex(active.iter().map(|entry| entry.emoji.as_str()))?;

        Ok(Self {
            options,
            leading,
            trailing,
        })
    }

    /// Produce the new message for `selected`, replacing whatever prefix `current` carries.
    pub fn rewrite(&self, current: &str, selected: &PrefixEntry) -> String {
        let mut remaining = self.strip_prefix(current);

        if self.options.append_emoji_to_end {
            remaining = strip_trailing_emoji(&self.trailing, remaining);
        }

        let new_prefix = selected.leading_text(self.options);
        let separator = if new_prefix.is_empty()
            || new_prefix.ends_with(char::is_whitespace)
            || remaining.is_empty()
        {
            ""
        } else {
            " "
        };

        if self.options.append_emoji_to_end {
            let space = if remaining.is_empty() { "" } else { " " };
            format!(
                "{}{}{}{}{}",
                new_prefix, separator, remaining, space, selected.emoji
            )
        } else {
            format!("{}{}{}", new_prefix, separator, remaining)
        }
    }

    /// Remove the first configured prefix found at the start of the message
    fn strip_prefix<'t>(&self, message: &'t str) -> &'t str {
        let stripped = match &self.leading {
            Some(regex) => match regex.find(message) {
                Some(found) => &message[found.end()..],
                None => message,
            },
            None => message,
        };

        stripped.trim_start()
    }
}

/// Rewrite `current` in one call, see [`MessageRewriter`].
pub fn rewrite_message(
    current: &str,
    active: &[PrefixEntry],
    selected: &PrefixEntry,
    options: RewriteOptions,
) -> Result<String, PrefixError> {
    Ok(MessageRewriter::new(active, options)?.rewrite(current, selected))
}

/// The texts recognized as a previously applied prefix, in configuration order. Each entry
/// contributes the rendering for the current options first, then its other rendering.
fn comparison_patterns(active: &[PrefixEntry], options: RewriteOptions) -> Vec<String> {
    let mut patterns = vec![];

    for entry in active {
        let primary = entry.leading_text(options);
        let alternate = if entry.emoji.is_empty() {
            None
        } else if options.emoji_leads() {
            Some(entry.prefix.clone())
        } else {
            Some(entry.with_emoji())
        };

        for pattern in std::iter::once(primary).chain(alternate) {
            if !pattern.is_empty() && !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
    }

    patterns
}
