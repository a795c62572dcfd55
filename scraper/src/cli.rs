use clap::{ArgAction, Parser};
use common::{ExperienceLevel, JobType, SearchParameters};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Scrape Indeed search results and filter them by keyword.
///
/// Options not given on the command line are taken from the parameters saved
/// by the previous run.
#[derive(Parser, Debug)]
#[command(name = "indeed-scraper", version, about, long_about = None)]
pub struct Args {
    /// City, state, or zipcode
    pub location: String,

    /// Radius from location
    #[arg(short, long)]
    pub radius: Option<u32>,

    /// Desired salary
    #[arg(short, long)]
    pub salary: Option<u64>,

    /// fulltime, parttime, commission, temporary, contract, internship
    #[arg(short = 'j', long = "job_type")]
    pub job_type: Option<String>,

    /// entry_level, mid_level, senior_level
    #[arg(short = 'e', long = "exp_lvl")]
    pub exp_lvl: Option<String>,

    /// Sort by date (most recent first)
    #[arg(long)]
    pub sort: bool,

    /// Where the last-used search parameters are kept
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Also save the matching jobs to this JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Search parameters as given on the command line, before merging with
    /// saved ones. Empty values are treated as not given.
    pub fn search_parameters(&self) -> SearchParameters {
        SearchParameters {
            location: non_empty(Some(self.location.as_str())).map(str::to_string),
            radius: self.radius,
            salary: self.salary,
            job_type: non_empty(self.job_type.as_deref()).map(JobType::from),
            exp_level: non_empty(self.exp_lvl.as_deref()).map(ExperienceLevel::from),
            sort_by_date: self.sort,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
