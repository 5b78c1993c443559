pub mod app;
pub mod config;
pub mod content;
pub mod fetch;
pub mod health;
