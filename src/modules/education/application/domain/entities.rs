// src/modules/education/application/domain/entities.rs

use chrono::NaiveDate;

/// Studies with no end date are ongoing.
pub fn is_current(end_date: Option<NaiveDate>) -> bool {
    end_date.is_none()
}

/// Year-only granularity: `"2019 - 2023"`, or `"2019 - Present"` while
/// still enrolled.
pub fn duration(start_date: NaiveDate, end_date: Option<NaiveDate>) -> String {
    let start = start_date.format("%Y");
    match end_date {
        Some(end) => format!("{} - {}", start, end.format("%Y")),
        None => format!("{} - Present", start),
    }
}
