use crate::filter::filter_items;
use crate::selection::Selection;
use chrono::DateTime;
use hazard_catalog::AlertRecord;

/// Alerts admitted by the selection, newest-first order as supplied by the
/// dataset (original relative order is preserved).
pub fn visible_alerts(alerts: &[AlertRecord], selection: &Selection) -> Vec<AlertRecord> {
    filter_items(alerts, selection)
        .into_iter()
        .cloned()
        .collect()
}

/// Short display form of an RFC 3339 timestamp, e.g. "Jul 12, 8:30 AM".
/// A timestamp that does not parse is shown raw rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%b %-d, %-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}
