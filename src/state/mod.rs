//! In-memory view-state for the client task list.

pub mod edit;
pub mod task_list;

pub use edit::EditState;
pub use task_list::TaskList;
