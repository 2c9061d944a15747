// src/modules/certificate/application/domain/entities.rs

use chrono::NaiveDate;

/// `"Jan 2023"`, or `"Jan 2023 - Expires Jun 2024"` when an expiry date
/// is set.
pub fn date_display(issue_date: NaiveDate, expiry_date: Option<NaiveDate>) -> String {
    let issue = issue_date.format("%b %Y");
    match expiry_date {
        Some(expiry) => format!("{} - Expires {}", issue, expiry.format("%b %Y")),
        None => issue.to_string(),
    }
}

/// Time-dependent: callers pass the current date at evaluation time, so
/// the result is never stale.
pub fn is_expired(expiry_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    match expiry_date {
        Some(expiry) => expiry < today,
        None => false,
    }
}
