use crate::selection::Selection;
use hazard_catalog::{AlertRecord, RiskLocation};

/// Anything tagged with exactly one category id.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for RiskLocation {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for AlertRecord {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Filter a dataset through the shared selection predicate, preserving the
/// original relative order. Total over any dataset/selection pair.
pub fn filter_items<'a, T: Categorized>(items: &'a [T], selection: &Selection) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selection.admits(item.category()))
        .collect()
}
