//! Integration points with the environment around the prefix core: where the settings live,
//! where the commit message lives, and how the user picks an item.

mod config;
mod picker;
mod repository;
mod settings;
mod surface;
pub use config::{ConfigSource, FileConfigSource, PrefixConfig};
pub use picker::{LabelPicker, Picker, TerminalPicker, render_items};
pub use repository::{GitRepository, Repository};
pub use settings::{EditorSettingsOpener, SettingsOpener};
pub use surface::{ErrorSurface, StderrSurface};
