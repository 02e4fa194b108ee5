pub mod collection;
pub mod context;
pub mod edit_session;
pub mod label;
pub mod progress;

pub use collection::{Collection, ItemError};
pub use context::AppContext;
pub use edit_session::{EditError, EditSession};
pub use progress::{ProgressState, percent};
