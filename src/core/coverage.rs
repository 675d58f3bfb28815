use super::scanner::OccurrenceSet;

/// Targets never found, in input order with duplicates kept.
///
/// Only membership testing uses set semantics: a target listed twice and never
/// found is reported twice.
pub fn report(targets: &[String], found: &OccurrenceSet<'_>) -> Vec<String> {
    targets
        .iter()
        .filter(|target| !found.contains(target))
        .cloned()
        .collect()
}
