//! Apply configured commit prefixes such as `feat:` or `fix:` to a pending git commit message.
//!
//! The [`prefix`] module holds the picklist and the message rewriter; [`host`] connects them to
//! the settings file, the repository and the terminal.

pub mod cli;
pub mod host;
pub mod prefix;
pub mod tools;
