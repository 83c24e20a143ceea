#![forbid(unsafe_code)]

//! `todo-keeper` — a single-user to-do list.
//!
//! The crate has two persistence paths that do not talk to each other:
//! a client-side [`state::TaskList`] mirrored into a key-value
//! [`storage::StoragePort`], and a small create/list HTTP API in
//! [`api`] backed by a `SQLite` table.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod session;
pub mod state;
pub mod storage;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
