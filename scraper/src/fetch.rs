//! Sequential page fetching.

use common::{page_url, JobRecord};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::error::ScrapeError;
use crate::extract::parse_listings;

/// Somewhere result pages come from.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Fetches pages over HTTP, one blocking request (and connection) per page.
pub struct HttpPageSource;

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let http_error = |source: reqwest::Error| ScrapeError::Http {
            url: url.to_string(),
            source,
        };

        let response = reqwest::blocking::get(url)
            .and_then(|resp| resp.error_for_status())
            .map_err(http_error)?;

        response.text().map_err(http_error)
    }
}

/// Progress bar with one tick per result page.
pub fn progress_bar(pages: usize) -> ProgressBar {
    let bar = ProgressBar::new(pages as u64);
    let template = "{bar:40} {pos}/{len} pages [{elapsed_precise}]";
    if let Ok(style) = ProgressStyle::with_template(template) {
        bar.set_style(style);
    }
    bar
}

/// Fetches pages `0..pages` of `base_url` in order and concatenates their
/// listings. The first failing page aborts the whole scrape.
pub fn scrape_pages<S: PageSource + ?Sized>(
    source: &S,
    base_url: &str,
    pages: usize,
    progress: &ProgressBar,
) -> Result<Vec<JobRecord>, ScrapeError> {
    let mut jobs = Vec::new();

    for page in 0..pages {
        let url = page_url(base_url, page);
        debug!("Fetching page {}: {}", page, url);

        let html = source.fetch(&url)?;
        let found = parse_listings(&html).map_err(|source| ScrapeError::Extract { page, source })?;
        info!("Page {} ({} bytes): {} listings", page, html.len(), found.len());

        jobs.extend(found);
        progress.inc(1);
    }

    info!("Total jobs found: {}", jobs.len());
    Ok(jobs)
}
