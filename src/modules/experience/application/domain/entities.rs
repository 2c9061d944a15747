// src/modules/experience/application/domain/entities.rs

use chrono::NaiveDate;

/// Split the stored newline-separated `achievements` text into an ordered
/// list, trimming each line and dropping empty ones.
pub fn achievements_list(achievements: &str) -> Vec<String> {
    achievements
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A position with no end date is ongoing.
pub fn is_current(end_date: Option<NaiveDate>) -> bool {
    end_date.is_none()
}

/// `"Mar 2021 - Aug 2023"`, or `"Mar 2021 - Present"` while ongoing.
pub fn duration(start_date: NaiveDate, end_date: Option<NaiveDate>) -> String {
    let start = start_date.format("%b %Y");
    match end_date {
        Some(end) => format!("{} - {}", start, end.format("%b %Y")),
        None => format!("{} - Present", start),
    }
}
