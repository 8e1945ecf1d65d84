use super::entry::{DisplayStyle, PrefixEntry};

/// Label of the fixed item that opens the prefix settings
pub static SETTINGS_LABEL: &str = "Open prefix settings";

/// Description shown next to the settings item
pub static SETTINGS_DESCRIPTION: &str = "⚙";

/// A selectable prefix as shown in the picklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixItem {
    pub label: String,
    pub description: String,
    pub entry: PrefixEntry,
}

/// One row of the picklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PicklistItem {
    Prefix(PrefixItem),
    Separator,
    OpenSettings,
}

impl PicklistItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Prefix(item) => &item.label,
            Self::Separator => "",
            Self::OpenSettings => SETTINGS_LABEL,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Prefix(item) => &item.description,
            Self::Separator => "",
            Self::OpenSettings => SETTINGS_DESCRIPTION,
        }
    }

    /// Items shown whatever the user has typed
    pub fn always_show(&self) -> bool {
        matches!(self, Self::OpenSettings)
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, Self::Separator)
    }

    /// Case-insensitive match of the query against the label or the description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() || self.always_show() {
            return true;
        }

        match self {
            Self::Prefix(item) => {
                item.label.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
            }
            _ => false,
        }
    }
}

/// The two states of an open picklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerState {
    /// Main items only
    #[default]
    Collapsed,
    /// Main and secondary items
    Expanded,
}

impl PickerState {
    pub fn for_query(query: &str) -> Self {
        if query.trim().is_empty() {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }

    /// Transition on a query change event
    pub fn on_query_change(&mut self, query: &str) {
        *self = Self::for_query(query);
    }
}

/// What the user did with the picklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Prefix(PrefixEntry),
    OpenSettings,
    NoSelection,
}

impl From<Option<&PicklistItem>> for Selection {
    fn from(item: Option<&PicklistItem>) -> Self {
        match item {
            Some(PicklistItem::Prefix(item)) => Selection::Prefix(item.entry.clone()),
            Some(PicklistItem::OpenSettings) => Selection::OpenSettings,
            Some(PicklistItem::Separator) | None => Selection::NoSelection,
        }
    }
}

/// Two-tier list of the active prefixes: main items are always visible, secondary items only
/// once the user starts typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picklist {
    main_items: Vec<PicklistItem>,
    secondary_items: Vec<PicklistItem>,
    settings_item: PicklistItem,
}

impl Picklist {
    /// Build the picklist from the configured entries; inactive entries are dropped.
    pub fn build(entries: &[PrefixEntry], style: DisplayStyle) -> Self {
        let (main_items, secondary_items): (Vec<_>, Vec<_>) = entries
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| {
                PicklistItem::Prefix(PrefixItem {
                    label: entry.display_label(style),
                    description: entry.prefix.clone(),
                    entry: entry.clone(),
                })
            })
            .partition(|item| match item {
                PicklistItem::Prefix(item) => item.entry.main,
                _ => false,
            });

        Self {
            main_items,
            secondary_items,
            settings_item: PicklistItem::OpenSettings,
        }
    }

    pub fn main_items(&self) -> &[PicklistItem] {
        &self.main_items
    }

    pub fn secondary_items(&self) -> &[PicklistItem] {
        &self.secondary_items
    }

    /// Main items, separator, settings item
    pub fn default_view(&self) -> Vec<PicklistItem> {
        self.main_items
            .iter()
            .cloned()
            .chain([PicklistItem::Separator, self.settings_item.clone()])
            .collect()
    }

    /// Main items, secondary items, separator, settings item
    pub fn expanded_view(&self) -> Vec<PicklistItem> {
        self.main_items
            .iter()
            .chain(self.secondary_items.iter())
            .cloned()
            .chain([PicklistItem::Separator, self.settings_item.clone()])
            .collect()
    }

    pub fn view(&self, state: PickerState) -> Vec<PicklistItem> {
        match state {
            PickerState::Collapsed => self.default_view(),
            PickerState::Expanded => self.expanded_view(),
        }
    }

    /// The items visible for a query: the view for its state, filtered by the query. The
    /// separator is kept only when a prefix item precedes it.
    pub fn visible_items(&self, query: &str) -> Vec<PicklistItem> {
        let mut visible: Vec<PicklistItem> = vec![];
        for item in self.view(PickerState::for_query(query)) {
            match item {
                PicklistItem::Separator => {
                    if visible.iter().any(|item| matches!(item, PicklistItem::Prefix(_))) {
                        visible.push(item);
                    }
                }
                item if item.matches(query) => visible.push(item),
                _ => {}
            }
        }

        visible
    }

    /// Look up an item by entry label or display label, including the settings item.
    pub fn find(&self, label: &str) -> Option<&PicklistItem> {
        let label = label.trim();
        if label == SETTINGS_LABEL {
            return Some(&self.settings_item);
        }

        self.main_items
            .iter()
            .chain(self.secondary_items.iter())
            .find(|item| match item {
                PicklistItem::Prefix(item) => item.entry.label == label || item.label == label,
                _ => false,
            })
    }
}
