use thiserror::Error;

/// A listing block that lacks one of the markers every listing must carry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("listing {listing} has no `.{class}` element")]
    MissingField { listing: usize, class: &'static str },

    #[error("listing {listing} has no link")]
    MissingLink { listing: usize },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to extract jobs from page {page}")]
    Extract {
        page: usize,
        #[source]
        source: ExtractError,
    },
}
