//! Listing extraction from Indeed search result pages.
//!
//! The class names below are whatever the site currently emits; they carry no
//! version and break silently when the markup changes.

use common::{JobRecord, SITE_ROOT};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::error::ExtractError;

const LISTING_CLASS: &str = "jobsearch-SerpJobCard";
const TITLE_CLASS: &str = "title";
const SUMMARY_CLASS: &str = "summary";
const COMPANY_CLASS: &str = "company";
const LOCATION_CLASS: &str = "location";
const SALARY_CLASS: &str = "salaryText";

struct Selectors {
    listing: Selector,
    title: Selector,
    summary: Selector,
    company: Selector,
    location: Selector,
    salary: Selector,
    link: Selector,
}

fn class_selector(class: &str) -> Selector {
    Selector::parse(&format!(".{}", class)).expect("marker class is a valid selector")
}

// Defined once, reused for every page
static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    listing: class_selector(LISTING_CLASS),
    title: class_selector(TITLE_CLASS),
    summary: class_selector(SUMMARY_CLASS),
    company: class_selector(COMPANY_CLASS),
    location: class_selector(LOCATION_CLASS),
    salary: class_selector(SALARY_CLASS),
    link: Selector::parse("a").expect("anchor selector is valid"),
});

/// Extracts every listing block of a result page, in document order.
pub fn parse_listings(html: &str) -> Result<Vec<JobRecord>, ExtractError> {
    let document = Html::parse_document(html);
    let selectors = &*SELECTORS;

    document
        .select(&selectors.listing)
        .enumerate()
        .map(|(listing, block)| parse_listing(selectors, block, listing))
        .collect()
}

fn parse_listing(
    selectors: &Selectors,
    block: ElementRef<'_>,
    listing: usize,
) -> Result<JobRecord, ExtractError> {
    let required = |selector: &Selector, class: &'static str| {
        first_text(block, selector).ok_or(ExtractError::MissingField { listing, class })
    };

    let title = required(&selectors.title, TITLE_CLASS)?;
    let summary = required(&selectors.summary, SUMMARY_CLASS)?;
    let company = required(&selectors.company, COMPANY_CLASS)?;
    let location = required(&selectors.location, LOCATION_CLASS)?;
    let salary = first_text(block, &selectors.salary);

    let href = block
        .select(&selectors.link)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .ok_or(ExtractError::MissingLink { listing })?;

    Ok(JobRecord {
        title,
        company,
        location,
        summary,
        salary,
        url: format!("{}{}", SITE_ROOT, href),
    })
}

/// Trimmed text of the first descendant matching `selector`.
fn first_text(block: ElementRef<'_>, selector: &Selector) -> Option<String> {
    block
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
