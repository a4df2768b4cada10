//! DormHub terminal front-end.
//!
//! Renders the role dashboards as tables and interactive menus over the
//! typed client. The `dormhub` binary parses [`Cli`] and calls
//! [`Cli::execute`].

pub mod commands;
pub mod context;
pub mod output;

pub use commands::Cli;
pub use context::AppContext;
