use std::collections::BTreeSet;

use super::model::ProducerColumn;

/// Pick the canonical producer column from the sheet headers.
///
/// `productoras_normalizadas` wins over `productoras_consolidadas` when both
/// are present; `None` when neither is.
pub fn select_producer_column<S: AsRef<str>>(headers: &[S]) -> Option<ProducerColumn> {
    [ProducerColumn::Normalized, ProducerColumn::Consolidated]
        .into_iter()
        .find(|col| headers.iter().any(|h| h.as_ref() == col.column_name()))
}

/// Split a raw producer field into trimmed, non-empty, distinct names.
pub fn parse_producers(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
