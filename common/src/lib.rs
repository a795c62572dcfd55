//! Shared data model for the Indeed job scraper.
//!
//! Holds the search parameters a run is configured with, the job records
//! extracted from result pages, and the query builder that turns the former
//! into a search URL.

use serde::{Deserialize, Serialize};
use std::fmt;

mod query;

pub use query::{PAGE_SIZE, SITE_ROOT, build_query_url, page_url};

/// A single listing extracted from a search result page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub summary: String,
    /// `None` when the listing shows no salary at all.
    pub salary: Option<String>,
    pub url: String,
}

/// Employment type accepted by the `jt` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    FullTime,
    PartTime,
    Commission,
    Temporary,
    Contract,
    Internship,
    /// Unrecognised value, passed to the site unchanged.
    Other(String),
}

impl JobType {
    pub fn as_str(&self) -> &str {
        match self {
            JobType::FullTime => "fulltime",
            JobType::PartTime => "parttime",
            JobType::Commission => "commission",
            JobType::Temporary => "temporary",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
            JobType::Other(value) => value,
        }
    }
}

impl From<String> for JobType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "fulltime" => JobType::FullTime,
            "parttime" => JobType::PartTime,
            "commission" => JobType::Commission,
            "temporary" => JobType::Temporary,
            "contract" => JobType::Contract,
            "internship" => JobType::Internship,
            _ => JobType::Other(value),
        }
    }
}

impl From<&str> for JobType {
    fn from(value: &str) -> Self {
        JobType::from(value.to_string())
    }
}

impl From<JobType> for String {
    fn from(value: JobType) -> Self {
        match value {
            JobType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority accepted by the `explvl` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    /// Unrecognised value, passed to the site unchanged.
    Other(String),
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ExperienceLevel::Entry => "entry_level",
            ExperienceLevel::Mid => "mid_level",
            ExperienceLevel::Senior => "senior_level",
            ExperienceLevel::Other(value) => value,
        }
    }
}

impl From<String> for ExperienceLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "entry_level" => ExperienceLevel::Entry,
            "mid_level" => ExperienceLevel::Mid,
            "senior_level" => ExperienceLevel::Senior,
            _ => ExperienceLevel::Other(value),
        }
    }
}

impl From<&str> for ExperienceLevel {
    fn from(value: &str) -> Self {
        ExperienceLevel::from(value.to_string())
    }
}

impl From<ExperienceLevel> for String {
    fn from(value: ExperienceLevel) -> Self {
        match value {
            ExperienceLevel::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one search. Every field but `sort_by_date` may be absent,
/// in which case it is left out of the query.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub radius: Option<u32>,
    #[serde(default)]
    pub salary: Option<u64>,
    #[serde(default)]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub exp_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub sort_by_date: bool,
}

impl SearchParameters {
    /// Overlays `newer` on top of `self`: present values in `newer` win,
    /// gaps are filled from `self`. Empty text counts as a gap. The sort flag
    /// always comes from `newer`.
    pub fn merged_with(self, newer: SearchParameters) -> SearchParameters {
        SearchParameters {
            location: newer.location.filter(|l| !l.is_empty()).or(self.location),
            radius: newer.radius.or(self.radius),
            salary: newer.salary.or(self.salary),
            job_type: newer
                .job_type
                .filter(|jt| !jt.as_str().is_empty())
                .or(self.job_type),
            exp_level: newer
                .exp_level
                .filter(|lvl| !lvl.as_str().is_empty())
                .or(self.exp_level),
            sort_by_date: newer.sort_by_date,
        }
    }
}
