use std::io::{BufRead, Write};

use tracing::debug;

use crate::prefix::{PickerState, Picklist, PicklistItem, PrefixError};

/// The surface the user selects a picklist item from. `None` means the user cancelled.
pub trait Picker {
    fn pick(&mut self, picklist: &Picklist) -> Result<Option<PicklistItem>, PrefixError>;
}

/// Selects an item by label without asking, for hooks and scripts
#[derive(Debug, Clone)]
pub struct LabelPicker {
    label: String,
}

impl LabelPicker {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Picker for LabelPicker {
    fn pick(&mut self, picklist: &Picklist) -> Result<Option<PicklistItem>, PrefixError> {
        debug!(label = %self.label, "Selecting by label");
        picklist
            .find(&self.label)
            .cloned()
            .map(Some)
            .ok_or(PrefixError::SelectedPrefixNotFound)
    }
}

/// Line-based picklist on a terminal.
///
/// A listed number picks the numbered item, any other text (including a number that is not
/// listed) becomes the query and an empty line clears the query, or cancels when there is none.
/// End of input cancels.
pub struct TerminalPicker<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl TerminalPicker<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Picker for TerminalPicker<R, W> {
    fn pick(&mut self, picklist: &Picklist) -> Result<Option<PicklistItem>, PrefixError> {
        let mut query = String::new();
        let mut state = PickerState::default();

        loop {
            let items = picklist.visible_items(&query);
            writeln!(self.writer, "Select Commit Prefix")?;
            write!(self.writer, "{}", render_items(&items))?;
            write!(
                self.writer,
                "Select a commit message prefix (listed number to pick, text to filter, empty to {})\n> ",
                if state == PickerState::Collapsed { "cancel" } else { "clear" }
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                debug!("Input closed, cancelling");
                return Ok(None);
            }

            let input = line.trim();
            if input.is_empty() {
                if state == PickerState::Collapsed {
                    debug!("Picker cancelled");
                    return Ok(None);
                }
                query.clear();
                state.on_query_change(&query);
                continue;
            }

            if let Ok(number) = input.parse::<usize>() {
                let selected = items
                    .into_iter()
                    .filter(PicklistItem::is_selectable)
                    .nth(number.wrapping_sub(1));
                if let Some(item) = selected {
                    return Ok(Some(item));
                }
            }

            query = input.to_string();
            state.on_query_change(&query);
            debug!(%query, ?state, "Query changed");
        }
    }
}

/// Numbered listing of the items; the separator is drawn as a rule.
pub fn render_items(items: &[PicklistItem]) -> String {
    let mut output = String::new();
    let mut number = 0;

    for item in items {
        if !item.is_selectable() {
            output.push_str("  ────────────\n");
            continue;
        }

        number += 1;
        let description = item.description();
        if description.is_empty() {
            output.push_str(&format!("  {:>2}. {}\n", number, item.label()));
        } else {
            output.push_str(&format!("  {:>2}. {}  {}\n", number, item.label(), description));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::{DisplayStyle, PrefixEntry, SETTINGS_LABEL, Selection};

    fn picklist() -> Picklist {
        Picklist::build(
            &[
                PrefixEntry::new("Feature", "feat:", "✨").main(true),
                PrefixEntry::new("Fix", "fix:", "🐛"),
                PrefixEntry::new("Chore", "chore:", "🔧").main(true),
            ],
            DisplayStyle::Default,
        )
    }

    fn pick(input: &str) -> (Option<PicklistItem>, String) {
        let mut output = Vec::new();
        let item = TerminalPicker::new(input.as_bytes(), &mut output)
            .pick(&picklist())
            .expect("pick item");

        (item, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn test_render_items() {
        let rendered = render_items(&picklist().default_view());

        assert_eq!(
            rendered,
            format!(
                "   1. Feature  feat:\n   2. Chore  chore:\n  ────────────\n   3. {}  ⚙\n",
                SETTINGS_LABEL
            )
        );
    }

    #[test]
    fn test_pick_by_number() {
        let (item, _) = pick("2\n");

        assert_eq!(
            Selection::from(item.as_ref()),
            Selection::Prefix(PrefixEntry::new("Chore", "chore:", "🔧").main(true))
        );
    }

    #[test]
    fn test_secondary_items_after_typing() {
        let (item, output) = pick("fix\n1\n");

        assert_eq!(item.map(|item| item.label().to_string()), Some("Fix".to_string()));
        // The first listing is collapsed, the second one expanded and filtered
        let listings: Vec<&str> = output.split("Select Commit Prefix").collect();
        assert!(!listings[1].contains("Fix"));
        assert!(listings[2].contains("1. Fix"));
    }

    #[test]
    fn test_clear_query_collapses() {
        let (item, output) = pick("x\n\n\n");

        assert!(item.is_none());
        assert_eq!(output.matches("Select Commit Prefix").count(), 3);
        assert!(output.contains("empty to clear"));
    }

    #[test]
    fn test_settings_item() {
        let (item, _) = pick("3\n");

        assert_eq!(Selection::from(item.as_ref()), Selection::OpenSettings);
    }

    #[test]
    fn test_cancel() {
        assert!(pick("\n").0.is_none());
        assert!(pick("").0.is_none());
    }

    #[test]
    fn test_unlisted_number_becomes_query() {
        let picklist = Picklist::build(
            &[
                PrefixEntry::new("Feature", "feat:", "✨").main(true),
                PrefixEntry::new("Release 2", "release2:", "🚀"),
            ],
            DisplayStyle::Default,
        );
        let mut output = Vec::new();

        let item = TerminalPicker::new("2\n1\n".as_bytes(), &mut output)
            .pick(&picklist)
            .expect("pick item");
        assert_eq!(Selection::from(item.as_ref()), Selection::OpenSettings);

        // Unlisted numbers filter; once nothing but the settings item is listed, `2` matches `Release 2`
        let item = TerminalPicker::new("9\n0\n2\n1\n".as_bytes(), &mut output)
            .pick(&picklist)
            .expect("pick item");
        assert_eq!(
            item.map(|item| item.label().to_string()),
            Some("Release 2".to_string())
        );
    }

    #[test]
    fn test_label_picker() {
        let picklist = picklist();

        let item = LabelPicker::new("Fix").pick(&picklist).expect("pick by label");
        assert_eq!(item.map(|item| item.label().to_string()), Some("Fix".to_string()));

        let item = LabelPicker::new(SETTINGS_LABEL)
            .pick(&picklist)
            .expect("pick settings");
        assert_eq!(item, Some(PicklistItem::OpenSettings));

        let missing = LabelPicker::new("Docs").pick(&picklist);
        assert!(matches!(missing, Err(PrefixError::SelectedPrefixNotFound)));
    }
}
