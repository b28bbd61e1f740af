//! The completion engine: classify an edit, build its completion, splice it in.

pub mod completion;
pub mod format;
pub mod scenario;
pub mod session;

pub use completion::Completion;
pub use format::{CompletionEngine, EditRange, EditWarning, FormattedEdit, format_edit};
pub use scenario::{Bracket, EditContext, Scenario, classify};
pub use session::{AppliedEdit, EditorSession};
