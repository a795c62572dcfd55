use anyhow::Context;
use common::JobRecord;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::salary::salary_floor;

#[derive(Serialize)]
struct ExportedJob<'a> {
    #[serde(flatten)]
    job: &'a JobRecord,
    salary_min: Option<i64>,
}

/// Saves `jobs` as a pretty-printed JSON array, creating the parent
/// directory when needed.
pub fn save_jobs(path: &Path, jobs: &[JobRecord]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {:?}", dir))?;
    }

    let exported: Vec<_> = jobs
        .iter()
        .map(|job| ExportedJob {
            job,
            salary_min: job.salary.as_deref().and_then(salary_floor),
        })
        .collect();

    let json_output = serde_json::to_string_pretty(&exported)?;
    fs::write(path, json_output).with_context(|| format!("Failed to write {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_saves_jobs_with_salary_floor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("jobs.json");
        let jobs = vec![
            JobRecord {
                title: "Rust Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                summary: "Systems work".to_string(),
                salary: Some("$90,000 - $110,000 a year".to_string()),
                url: "https://www.indeed.com/a".to_string(),
            },
            JobRecord {
                title: "Go Engineer".to_string(),
                company: "Initech".to_string(),
                location: "Austin, TX".to_string(),
                summary: "Services".to_string(),
                salary: None,
                url: "https://www.indeed.com/b".to_string(),
            },
        ];

        save_jobs(&path, &jobs).unwrap();

        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved[0]["title"], "Rust Engineer");
        assert_eq!(saved[0]["salary_min"], 90000);
        assert_eq!(saved[1]["salary"], Value::Null);
        assert_eq!(saved[1]["salary_min"], Value::Null);

        let records: Vec<JobRecord> = serde_json::from_value(saved).unwrap();
        assert_eq!(records, jobs);
    }
}
