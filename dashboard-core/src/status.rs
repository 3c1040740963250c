use crate::chart::{chart_series, max_value};
use crate::filter::filter_items;
use crate::selection::Selection;
use hazard_catalog::{AlertRecord, RiskLevel, RiskLocation, TrendRow};

/// Headline numbers for the status cards, all derived from the filtered
/// datasets so the cards agree with the map, chart and alert list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub active_alerts: usize,
    pub severe_alerts: usize,
    pub high_risk_zones: usize,
    pub monitored_areas: usize,
}

/// Month-over-month change of total event counts for the visible
/// categories, from the last two trend rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendDelta {
    pub pct: f64,
    pub rising: bool,
}

pub fn summarize(
    locations: &[RiskLocation],
    alerts: &[AlertRecord],
    selection: &Selection,
) -> StatusSummary {
    let visible_alerts = filter_items(alerts, selection);
    let visible_locations = filter_items(locations, selection);

    StatusSummary {
        active_alerts: visible_alerts.len(),
        severe_alerts: visible_alerts
            .iter()
            .filter(|a| a.level == RiskLevel::Severe)
            .count(),
        high_risk_zones: visible_locations
            .iter()
            .filter(|l| l.risk >= RiskLevel::High)
            .count(),
        monitored_areas: visible_locations.len(),
    }
}

pub fn month_over_month(rows: &[TrendRow], selection: &Selection) -> Option<TrendDelta> {
    if rows.len() < 2 {
        return None;
    }
    let series = chart_series(rows, selection);
    if max_value(&series) == 0 {
        return None;
    }

    let total_at = |index: usize| -> u32 {
        series
            .iter()
            .map(|s| s.values.get(index).copied().unwrap_or(0))
            .sum()
    };
    let previous = total_at(rows.len() - 2);
    let latest = total_at(rows.len() - 1);
    if previous == 0 {
        return None;
    }

    let pct = (latest as f64 - previous as f64) / previous as f64 * 100.0;
    Some(TrendDelta {
        pct: pct.abs(),
        rising: latest >= previous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, category: &str, level: RiskLevel) -> AlertRecord {
        AlertRecord {
            id: id.into(),
            title: format!("{category} warning"),
            location: "somewhere".into(),
            timestamp: "2024-07-12T08:30:00Z".into(),
            level,
            category: category.into(),
        }
    }

    fn location(id: &str, category: &str, risk: RiskLevel) -> RiskLocation {
        RiskLocation {
            id: id.into(),
            name: format!("{id} zone"),
            lat: 20.0,
            lng: 78.0,
            risk,
            category: category.into(),
        }
    }

    #[test]
    fn counts_follow_the_selection() {
        let locations = vec![
            location("l1", "flood", RiskLevel::Severe),
            location("l2", "flood", RiskLevel::Medium),
            location("l3", "earthquake", RiskLevel::High),
        ];
        let alerts = vec![
            alert("a1", "flood", RiskLevel::Severe),
            alert("a2", "earthquake", RiskLevel::Low),
        ];

        let all = summarize(&locations, &alerts, &Selection::new());
        assert_eq!(all.active_alerts, 2);
        assert_eq!(all.severe_alerts, 1);
        assert_eq!(all.high_risk_zones, 2);
        assert_eq!(all.monitored_areas, 3);

        let floods = summarize(&locations, &alerts, &Selection::new().toggle("flood"));
        assert_eq!(floods.active_alerts, 1);
        assert_eq!(floods.severe_alerts, 1);
        assert_eq!(floods.high_risk_zones, 1);
        assert_eq!(floods.monitored_areas, 2);
    }

    #[test]
    fn no_match_summarizes_to_zero() {
        let locations = vec![location("l1", "flood", RiskLevel::High)];
        let alerts = vec![alert("a1", "flood", RiskLevel::High)];
        let summary = summarize(&locations, &alerts, &Selection::new().toggle("drought"));
        assert_eq!(summary, StatusSummary::default());
    }

    fn rows() -> Vec<TrendRow> {
        serde_json::from_str(
            r#"[
                {"month":"Nov","flood":5,"drought":4},
                {"month":"Dec","flood":3,"drought":3}
            ]"#,
        )
        .expect("rows")
    }

    #[test]
    fn month_over_month_tracks_visible_totals() {
        let delta = month_over_month(&rows(), &Selection::new()).expect("delta");
        assert!(!delta.rising);
        assert!((delta.pct - 33.333).abs() < 0.01);

        let delta = month_over_month(&rows(), &Selection::new().toggle("drought")).expect("delta");
        assert!(!delta.rising);
        assert!((delta.pct - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn month_over_month_needs_data() {
        assert!(month_over_month(&[], &Selection::new()).is_none());
        assert!(month_over_month(&rows(), &Selection::new().toggle("cyclone")).is_none());
    }
}
