//! Typing-time auto-formatting for plain-text code editors.
//!
//! The host editor hands every proposed change to [`format_edit`] (or a configured
//! [`CompletionEngine`]) and applies the returned text and cursor instead of its own
//! default insertion.

pub mod editor;
pub mod error;
pub mod helpers;
pub mod state;

pub use editor::{
    AppliedEdit, Bracket, Completion, CompletionEngine, EditRange, EditWarning, EditorSession,
    FormattedEdit, Scenario, format_edit,
};
pub use error::{Error, Result};
pub use state::{ConfigManager, EngineSettings};
