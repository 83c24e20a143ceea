//! Domain model module declarations.

pub mod priority;
pub mod task;
pub mod todo;
