pub mod app_state;
pub mod directory_actor;

pub use app_state::{AppState, DirectoryView, DispatchOutcome, UiEvent};
pub use directory_actor::{DirectoryArgs, DirectoryHandle};
