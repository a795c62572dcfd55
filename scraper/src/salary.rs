use regex::Regex;
use std::sync::LazyLock;

// Numbers that may have thousands separators (e.g. "50,000" or "50000")
static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d{1,3}(?:,\d{3})+|\d+)").expect("amount pattern is valid"));

/// Lower bound of a salary text such as `"$50,000 - $70,000 a year"`.
///
/// Returns the first amount of at least 1000, which skips hourly figures and
/// stray digits.
pub fn salary_floor(salary: &str) -> Option<i64> {
    AMOUNT
        .captures_iter(salary)
        .filter_map(|cap| cap.get(1))
        .filter_map(|amount| {
            amount
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse::<i64>()
                .ok()
        })
        .find(|&amount| amount >= 1000)
}
