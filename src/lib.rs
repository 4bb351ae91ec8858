// src/lib.rs
pub mod keywords;
pub mod models;
pub mod seeder;
pub mod seo;
pub mod slug;
pub mod taxonomy;
pub mod utils;
