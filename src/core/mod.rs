pub mod config;
pub mod date_index;
pub mod models;
pub mod render;
pub mod services;
