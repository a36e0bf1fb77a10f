pub mod commands;
pub mod config;
pub mod data_provider;
pub mod engine;
pub mod feed;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod tui;
