// src/utils/mod.rs
pub mod constants;
pub mod db_connect;
pub mod env;
pub mod progress_config;
