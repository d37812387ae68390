pub mod catalog;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod details;
pub mod error;
pub mod formatting;
pub mod layout_constants;
pub mod listing;
pub mod supabase;
pub mod tui;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod fixtures;

#[cfg(feature = "development")]
pub mod dev;
