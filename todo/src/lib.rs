//! Terminal todo list library.

pub mod animation;
pub mod app;
pub mod config;
pub mod ui;
