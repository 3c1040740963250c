use crate::selection::Selection;
use hazard_catalog::{catalog, color_for, label_for, TrendRow};

/// One bar series of the historical trend chart: a category with one value
/// per month row.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub id: String,
    pub label: String,
    pub color: String,
    pub values: Vec<u32>,
}

/// Which categories the chart shows: the selection in insertion order when
/// one is active, otherwise the full catalog in catalog order. Mirrors the
/// map and alert list semantics: an empty selection means everything.
pub fn visible_categories(selection: &Selection) -> Vec<String> {
    if selection.is_empty() {
        catalog().into_iter().map(|e| e.id.to_string()).collect()
    } else {
        selection.ids().to_vec()
    }
}

pub fn chart_series(rows: &[TrendRow], selection: &Selection) -> Vec<ChartSeries> {
    visible_categories(selection)
        .into_iter()
        .map(|id| ChartSeries {
            label: label_for(&id),
            color: color_for(&id).to_string(),
            values: rows.iter().map(|row| row.count(&id)).collect(),
            id,
        })
        .collect()
}

pub fn months(rows: &[TrendRow]) -> Vec<String> {
    rows.iter().map(|row| row.month.clone()).collect()
}

/// Tallest bar across the visible series; the renderer scales against it.
pub fn max_value(series: &[ChartSeries]) -> u32 {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .max()
        .unwrap_or(0)
}

/// True when the visible series contain any data at all. A selection that
/// matches nothing must surface an explicit empty state, not a blank chart.
pub fn has_data(series: &[ChartSeries]) -> bool {
    max_value(series) > 0
}
