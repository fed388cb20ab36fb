pub mod analytics;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod focus;
pub mod formatter;
pub mod habit;
pub mod kv_store;
pub mod logging;
pub mod messages;
pub mod mood;
pub mod mood_store;
pub mod task;
pub mod validation;
pub mod view;
