//! shelfctl - terminal client for the school library REST backend
//!
//! Mirrors the backend's books and students collections into local list
//! controllers and projects their state onto the terminal. The remote store
//! is the source of truth; single-record operations patch the local mirror
//! from the server's response instead of refetching the whole list.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
