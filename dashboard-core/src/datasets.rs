use hazard_catalog::{validate_alert, validate_location, AlertRecord, RiskLocation, TrendRow};

const LOCATIONS_JSON: &str = include_str!("../data/locations.json");
const ALERTS_JSON: &str = include_str!("../data/alerts.json");
const TRENDS_JSON: &str = include_str!("../data/trends.json");

/// The static datasets the views render. Sourcing is an external concern;
/// this module only knows how to load and validate the embedded documents.
#[derive(Clone, Debug, Default)]
pub struct Datasets {
    pub locations: Vec<RiskLocation>,
    pub alerts: Vec<AlertRecord>,
    pub trends: Vec<TrendRow>,
}

pub fn load_builtin() -> Result<Datasets, String> {
    let locations: Vec<RiskLocation> =
        serde_json::from_str(LOCATIONS_JSON).map_err(|e| format!("locations: {e}"))?;
    for (index, location) in locations.iter().enumerate() {
        validate_location(location).map_err(|e| format!("locations[{index}]: {e}"))?;
    }

    let alerts: Vec<AlertRecord> =
        serde_json::from_str(ALERTS_JSON).map_err(|e| format!("alerts: {e}"))?;
    for (index, alert) in alerts.iter().enumerate() {
        validate_alert(alert).map_err(|e| format!("alerts[{index}]: {e}"))?;
    }

    let trends: Vec<TrendRow> =
        serde_json::from_str(TRENDS_JSON).map_err(|e| format!("trends: {e}"))?;

    Ok(Datasets {
        locations,
        alerts,
        trends,
    })
}
