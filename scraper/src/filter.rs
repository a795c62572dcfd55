use common::JobRecord;

/// Keeps the jobs whose title or summary contains `term`, ignoring case.
/// Order is preserved.
pub fn filter_jobs(jobs: Vec<JobRecord>, term: &str) -> Vec<JobRecord> {
    let needle = term.to_lowercase();
    jobs.into_iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&needle)
                || job.summary.to_lowercase().contains(&needle)
        })
        .collect()
}
