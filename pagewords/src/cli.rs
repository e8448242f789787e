// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::time::Duration;

use crate::core::count::count_fragments;
use crate::core::select::partition_top_words;
use crate::extract::text_fragments;
use crate::fetch::fetch_page;
use crate::utils::print_top_words;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Url of the page to fetch (or a path to a saved page with --file)
    pub page: String,

    /// Number of top words to print
    #[arg(short, long, default_value = "25")]
    pub top: usize,

    /// Read the page from a local html file instead of fetching it
    #[arg(short, long)]
    pub file: bool,

    /// Http request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

/// Runs the whole pipeline: fetch, extract, count, partition, print.
///
/// # Errors
///
/// This function may return an error if:
/// * The url is invalid or uses a scheme other than http/https
/// * The page cannot be fetched or read
/// * The response body is not valid text
pub fn run(args: Args) -> Result<()> {
    let html = if args.file {
        fs::read_to_string(&args.page)
            .with_context(|| format!("Failed to read page file: {}", args.page))?
    } else {
        fetch_page(&args.page, Duration::from_secs(args.timeout))?
    };

    let fragments = text_fragments(&html);
    let mut frequencies = count_fragments(&fragments);
    partition_top_words(&mut frequencies.words, &frequencies.counts, args.top);
    print_top_words(&frequencies, args.top);

    Ok(())
}
