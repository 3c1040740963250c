use dashboard_core::alerts::visible_alerts;
use dashboard_core::chart::{chart_series, has_data};
use dashboard_core::datasets::load_builtin;
use dashboard_core::map::map_pins;
use dashboard_core::selection::{Selection, SelectionModel};
use dashboard_core::status::summarize;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn empty_selection_shows_the_full_datasets() {
    let data = load_builtin().expect("load");
    let selection = Selection::new();

    assert_eq!(map_pins(&data.locations, &selection).len(), data.locations.len());
    assert_eq!(visible_alerts(&data.alerts, &selection).len(), data.alerts.len());

    let summary = summarize(&data.locations, &data.alerts, &selection);
    assert_eq!(summary.active_alerts, data.alerts.len());
    assert_eq!(summary.monitored_areas, data.locations.len());
}

#[test]
fn one_toggle_filters_every_view_the_same_way() {
    let data = load_builtin().expect("load");
    let selection = Selection::new().toggle("flood");

    let pins = map_pins(&data.locations, &selection);
    assert!(!pins.is_empty());
    assert!(pins.iter().all(|pin| pin.location.category == "flood"));

    let alerts = visible_alerts(&data.alerts, &selection);
    assert!(!alerts.is_empty());
    assert!(alerts.iter().all(|alert| alert.category == "flood"));

    let summary = summarize(&data.locations, &data.alerts, &selection);
    assert_eq!(summary.active_alerts, alerts.len());
    assert_eq!(summary.monitored_areas, pins.len());

    let series = chart_series(&data.trends, &selection);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].id, "flood");
    assert!(has_data(&series));
}

#[test]
fn toggling_back_restores_the_unfiltered_views() {
    let data = load_builtin().expect("load");
    let selection = Selection::new().toggle("flood").toggle("flood");

    assert!(selection.is_empty());
    assert_eq!(map_pins(&data.locations, &selection).len(), data.locations.len());
    assert_eq!(visible_alerts(&data.alerts, &selection).len(), data.alerts.len());
}

#[test]
fn selection_with_no_matching_data_empties_every_view() {
    let data = load_builtin().expect("load");
    // Valid toggle of an id no data point carries.
    let selection = Selection::new().toggle("asteroid");

    assert!(map_pins(&data.locations, &selection).is_empty());
    assert!(visible_alerts(&data.alerts, &selection).is_empty());
    assert!(!has_data(&chart_series(&data.trends, &selection)));

    let summary = summarize(&data.locations, &data.alerts, &selection);
    assert_eq!(summary.active_alerts, 0);
    assert_eq!(summary.monitored_areas, 0);
}

#[test]
fn subscribers_see_each_applied_selection_in_order() {
    let observed: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let mut model = SelectionModel::new();

    let sink = Rc::clone(&observed);
    model.subscribe(move |selection| {
        sink.borrow_mut().push(selection.ids().to_vec());
    });

    model.toggle("flood");
    model.toggle("cyclone");
    model.toggle("flood");

    let observed = observed.borrow();
    assert_eq!(observed.len(), 3);
    assert_eq!(observed[0], vec!["flood".to_string()]);
    assert_eq!(
        observed[1],
        vec!["flood".to_string(), "cyclone".to_string()]
    );
    assert_eq!(observed[2], vec!["cyclone".to_string()]);
}

#[test]
fn off_catalog_alert_stays_visible_until_filtered() {
    let data = load_builtin().expect("load");

    // The built-in feed carries a tsunami record the catalog does not know.
    let unfiltered = visible_alerts(&data.alerts, &Selection::new());
    assert!(unfiltered.iter().any(|alert| alert.category == "tsunami"));

    let floods_only = visible_alerts(&data.alerts, &Selection::new().toggle("flood"));
    assert!(floods_only.iter().all(|alert| alert.category == "flood"));

    // Toggling the off-catalog id itself is accepted and matches its records.
    let tsunami_only = visible_alerts(&data.alerts, &Selection::new().toggle("tsunami"));
    assert_eq!(tsunami_only.len(), 1);
    assert_eq!(tsunami_only[0].category, "tsunami");
}
