//! Terminal rendering of matched jobs.

use common::JobRecord;
use std::io::{self, Write};
use std::time::Duration;

const SEPARATOR_WIDTH: usize = 60;

/// Writes every job as a numbered block followed by a separator.
pub fn write_jobs<W: Write>(out: &mut W, jobs: &[JobRecord]) -> io::Result<()> {
    let separator = "*".repeat(SEPARATOR_WIDTH);

    for (i, job) in jobs.iter().enumerate() {
        writeln!(out, "\n[{}]\n", i + 1)?;
        writeln!(out, "Title: {}", job.title)?;
        writeln!(out, "Company: {}", job.company)?;
        writeln!(out, "Location: {}", job.location)?;
        if let Some(salary) = &job.salary {
            writeln!(out, "Salary: {}", salary)?;
        }
        writeln!(out, "\nSummary: {}\n", job.summary)?;
        writeln!(out, "URL: {}\n", job.url)?;
        writeln!(out, "{}", separator)?;
        writeln!(out, "{}", separator)?;
    }

    Ok(())
}

/// Writes the closing line: how many jobs matched and how long the run took.
pub fn write_summary<W: Write>(
    out: &mut W,
    matched: usize,
    term: &str,
    elapsed: Duration,
) -> io::Result<()> {
    if matched > 0 {
        writeln!(
            out,
            "\nReturned {} jobs containing '{}' in {:.4} secs",
            matched,
            term,
            elapsed.as_secs_f64()
        )
    } else {
        writeln!(
            out,
            "\nNo jobs found containing '{}' in {:.4} secs",
            term,
            elapsed.as_secs_f64()
        )
    }
}
