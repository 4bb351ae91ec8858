// src/keywords/mod.rs
pub mod catalog;
pub mod import;
pub mod matrix;
pub mod stats;

pub use import::{parse_keyword_markdown, read_keyword_file, seed_keywords, ParsedKeyword};
pub use matrix::{generate, KeywordMatrix, KeywordShape, KeywordShapeConfig, MatrixReport};
pub use stats::KeywordStats;
