//! Indeed Job Scraper
//!
//! Fetches Indeed search result pages for a location, keeps the listings
//! whose title or summary mentions a search term, and prints them.

use clap::Parser;
use common::build_query_url;
use log::info;
use std::io;
use std::time::Instant;

mod cli;
mod config;
mod error;
mod export;
mod extract;
mod fetch;
mod filter;
mod logger;
mod prompt;
mod report;
mod salary;

use cli::Args;
use fetch::HttpPageSource;

fn main() -> anyhow::Result<()> {
    let started = Instant::now();
    let args = Args::parse();
    logger::init(args.verbose);

    // Saved before any request so an interrupted run keeps its parameters
    let params = config::resolve(&args.config, args.search_parameters())?;
    let base_url = build_query_url(&params);
    info!("Base query: {}", base_url);

    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();
    let search_term = prompt::read_search_term(&mut input, &mut stdout)?;
    let pages = prompt::read_page_count(&mut input, &mut stdout)?;

    let progress = fetch::progress_bar(pages);
    let jobs = fetch::scrape_pages(&HttpPageSource, &base_url, pages, &progress)?;
    progress.finish_and_clear();

    let matches = filter::filter_jobs(jobs, &search_term);
    report::write_jobs(&mut stdout, &matches)?;

    if let Some(path) = &args.output {
        export::save_jobs(path, &matches)?;
        println!("💾 Saved {} jobs to {:?}", matches.len(), path);
    }

    report::write_summary(&mut stdout, matches.len(), &search_term, started.elapsed())?;
    Ok(())
}
