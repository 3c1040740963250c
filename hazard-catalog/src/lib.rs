use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Severe,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Severe => "Severe",
        }
    }
}

/// One entry of the fixed category catalog. The set is configuration,
/// defined once at startup; there are no mutation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const FALLBACK_COLOR: &str = "#6b7280";

pub fn catalog() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry {
            id: "earthquake",
            label: "Earthquake",
            color: "#8b5cf6",
        },
        CategoryEntry {
            id: "flood",
            label: "Flood",
            color: "#3b82f6",
        },
        CategoryEntry {
            id: "cyclone",
            label: "Cyclone",
            color: "#f59e0b",
        },
        CategoryEntry {
            id: "landslide",
            label: "Landslide",
            color: "#ef4444",
        },
        CategoryEntry {
            id: "drought",
            label: "Drought",
            color: "#d97706",
        },
        CategoryEntry {
            id: "heatwave",
            label: "Heatwave",
            color: "#dc2626",
        },
    ]
}

pub fn entry(id: &str) -> Option<CategoryEntry> {
    catalog().into_iter().find(|e| e.id == id)
}

pub fn color_for(id: &str) -> &'static str {
    entry(id).map(|e| e.color).unwrap_or(FALLBACK_COLOR)
}

/// Display label for a category id. Data points and the catalog are
/// maintained independently, so an id missing from the catalog still gets
/// a readable label derived from the raw id.
pub fn label_for(id: &str) -> String {
    if let Some(e) = entry(id) {
        return e.label.to_string();
    }
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => "Unknown".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskLocation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub risk: RiskLevel,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: String,
    pub title: String,
    pub location: String,
    pub timestamp: String,
    pub level: RiskLevel,
    pub category: String,
}

/// One month of historical counts. Counts are keyed by category id so rows
/// survive catalog drift without a schema change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendRow {
    pub month: String,
    #[serde(flatten)]
    pub counts: BTreeMap<String, u32>,
}

impl TrendRow {
    pub fn count(&self, category: &str) -> u32 {
        self.counts.get(category).copied().unwrap_or(0)
    }
}

pub fn validate_location(location: &RiskLocation) -> Result<(), String> {
    if location.id.trim().is_empty() {
        return Err("id is required".into());
    }
    if location.name.trim().is_empty() {
        return Err("name is required".into());
    }
    if !(-90.0..=90.0).contains(&location.lat) {
        return Err(format!("lat {} out of range", location.lat));
    }
    if !(-180.0..=180.0).contains(&location.lng) {
        return Err(format!("lng {} out of range", location.lng));
    }
    if location.category.trim().is_empty() {
        return Err("category is required".into());
    }
    Ok(())
}

pub fn validate_alert(alert: &AlertRecord) -> Result<(), String> {
    if alert.id.trim().is_empty() {
        return Err("id is required".into());
    }
    if alert.title.trim().is_empty() {
        return Err("title is required".into());
    }
    if alert.timestamp.trim().is_empty() {
        return Err("timestamp is required".into());
    }
    if alert.category.trim().is_empty() {
        return Err("category is required".into());
    }
    Ok(())
}
