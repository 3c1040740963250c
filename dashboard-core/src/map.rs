use crate::filter::filter_items;
use crate::selection::Selection;
use hazard_catalog::{color_for, RiskLocation};

/// A location placed on the map canvas. Coordinates are percentages of the
/// canvas, produced by the illustrative equirectangular mapping; this is a
/// rendering aid, not a geospatial projection.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPin {
    pub location: RiskLocation,
    pub x_pct: f64,
    pub y_pct: f64,
    pub color: &'static str,
}

pub fn project(lat: f64, lng: f64) -> (f64, f64) {
    let x = (lng + 180.0) / 360.0 * 100.0;
    let y = (90.0 - lat) / 180.0 * 100.0;
    (x, y)
}

/// Pins for every location admitted by the selection, in dataset order.
/// Pin color comes from the catalog, with the fallback color for ids the
/// catalog does not know.
pub fn map_pins(locations: &[RiskLocation], selection: &Selection) -> Vec<MapPin> {
    filter_items(locations, selection)
        .into_iter()
        .map(|location| {
            let (x_pct, y_pct) = project(location.lat, location.lng);
            MapPin {
                color: color_for(&location.category),
                location: location.clone(),
                x_pct,
                y_pct,
            }
        })
        .collect()
}
