pub mod config;
pub mod models;
pub mod error;
pub mod search;
pub mod catalog;
pub mod theme;
