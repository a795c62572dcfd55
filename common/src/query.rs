//! Search URL construction.

use crate::{ExperienceLevel, JobType, SearchParameters};

/// Scheme and host of the job site; listing links are relative to this.
pub const SITE_ROOT: &str = "https://www.indeed.com";

/// Listings per result page, used for the `start` offset.
pub const PAGE_SIZE: usize = 10;

/// Builds the base search URL for `params`.
///
/// Components are appended in a fixed order (salary, location, radius, job
/// type, experience level, sort) and only when present. Empty text and zero
/// amounts count as absent. Without a location the site root is returned
/// with a placeholder query.
pub fn build_query_url(params: &SearchParameters) -> String {
    let Some(location) = non_empty(params.location.as_deref()) else {
        return format!("{}/?sq=1", SITE_ROOT);
    };

    let mut url = format!("{}/jobs?q=", SITE_ROOT);

    if let Some(salary) = params.salary.filter(|&salary| salary > 0) {
        url.push_str(&format!("${}", salary));
    }
    url.push_str(&format!("&l={}", urlencoding::encode(location)));
    if let Some(radius) = params.radius.filter(|&radius| radius > 0) {
        url.push_str(&format!("&radius={}", radius));
    }
    if let Some(job_type) = non_empty(params.job_type.as_ref().map(JobType::as_str)) {
        url.push_str(&format!("&jt={}", job_type));
    }
    if let Some(exp_level) = non_empty(params.exp_level.as_ref().map(ExperienceLevel::as_str)) {
        url.push_str(&format!("&explvl={}", exp_level));
    }
    if params.sort_by_date {
        url.push_str("&sort=date");
    }

    url
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// URL of the zero-based result page `index` for a base query.
pub fn page_url(base_url: &str, index: usize) -> String {
    format!("{}&start={}", base_url, index * PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn austin() -> SearchParameters {
        SearchParameters {
            location: Some("Austin, TX".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_location_only_has_no_optional_tokens() {
        let url = build_query_url(&austin());

        assert_eq!(url, "https://www.indeed.com/jobs?q=&l=Austin%2C%20TX");
        for token in ["$", "&radius=", "&jt=", "&explvl=", "&sort="] {
            assert!(!url.contains(token), "unexpected {token} in {url}");
        }
    }

    #[test]
    fn test_all_parameters_in_fixed_order() {
        let params = SearchParameters {
            radius: Some(25),
            salary: Some(80000),
            job_type: Some(JobType::FullTime),
            exp_level: Some(ExperienceLevel::Mid),
            sort_by_date: true,
            ..austin()
        };

        assert_eq!(
            build_query_url(&params),
            "https://www.indeed.com/jobs?q=$80000&l=Austin%2C%20TX&radius=25&jt=fulltime&explvl=mid_level&sort=date"
        );
    }

    #[test]
    fn test_location_encoding_is_reversible() {
        let url = build_query_url(&austin());
        let encoded = url.split("&l=").nth(1).unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), "Austin, TX");
    }

    #[test]
    fn test_unrecognised_values_pass_through() {
        let params = SearchParameters {
            job_type: Some(JobType::from("seasonal")),
            exp_level: Some(ExperienceLevel::from("principal")),
            ..austin()
        };
        let url = build_query_url(&params);
        assert!(url.ends_with("&jt=seasonal&explvl=principal"));
    }

    #[test]
    fn test_missing_location_falls_back_to_site_root() {
        let params = SearchParameters {
            radius: Some(10),
            sort_by_date: true,
            ..Default::default()
        };
        assert_eq!(build_query_url(&params), "https://www.indeed.com/?sq=1");
    }

    #[test]
    fn test_empty_location_falls_back_to_site_root() {
        let params = SearchParameters {
            location: Some(String::new()),
            salary: Some(50000),
            ..Default::default()
        };
        assert_eq!(build_query_url(&params), "https://www.indeed.com/?sq=1");
    }

    #[test]
    fn test_zero_amounts_are_omitted() {
        let params = SearchParameters {
            salary: Some(0),
            radius: Some(0),
            ..austin()
        };
        assert_eq!(build_query_url(&params), build_query_url(&austin()));
    }

    #[test]
    fn test_empty_job_type_and_level_are_omitted() {
        let params = SearchParameters {
            job_type: Some(JobType::from("")),
            exp_level: Some(ExperienceLevel::from("")),
            ..austin()
        };

        let url = build_query_url(&params);

        assert!(!url.contains("&jt="), "unexpected jt in {url}");
        assert!(!url.contains("&explvl="), "unexpected explvl in {url}");
    }

    #[test]
    fn test_page_offsets() {
        let base = build_query_url(&austin());
        assert_eq!(page_url(&base, 0), format!("{base}&start=0"));
        assert_eq!(page_url(&base, 1), format!("{base}&start=10"));
        assert_eq!(page_url(&base, 7), format!("{base}&start=70"));
    }
}
