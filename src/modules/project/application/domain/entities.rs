// src/modules/project/application/domain/entities.rs

use std::collections::BTreeSet;

/// Split the stored comma-separated `technologies` text into an ordered
/// list. Segments are trimmed; empty and whitespace-only segments are
/// dropped, so an empty source yields an empty list.
pub fn tech_list(technologies: &str) -> Vec<String> {
    technologies
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

/// Union of `tech_list` over many projects' raw technology strings.
/// Dedup is exact-string (case-sensitive), output lexicographic.
pub fn distinct_technologies<I, S>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = BTreeSet::new();
    for source in sources {
        set.extend(tech_list(source.as_ref()));
    }
    set.into_iter().collect()
}
