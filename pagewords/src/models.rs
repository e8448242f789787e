// src/models.rs
pub mod word_frequencies;

pub use word_frequencies::WordFrequencies;
