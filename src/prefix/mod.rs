pub mod defaults;
mod emoji;
mod entry;
pub mod errors;
mod picklist;
mod rewrite;
pub use entry::{DisplayStyle, PrefixEntry, RewriteOptions, active_entries};
pub use errors::PrefixError;
pub use picklist::{
    PickerState, Picklist, PicklistItem, PrefixItem, SETTINGS_DESCRIPTION, SETTINGS_LABEL,
    Selection,
};
pub use rewrite::{MessageRewriter, rewrite_message};
