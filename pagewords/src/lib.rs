// src/lib.rs
pub mod cli;
pub mod core;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::count::count_fragments;
pub use crate::core::select::partition_top_words;
pub use crate::core::tokenizer::words;
pub use extract::text_fragments;
pub use fetch::fetch_page;
pub use models::WordFrequencies;
