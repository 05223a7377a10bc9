pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod icons;
pub mod responsive;
