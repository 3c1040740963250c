use serde::{Deserialize, Serialize};

/// The set of category ids a user has chosen to view. Membership is unique;
/// insertion order is preserved so chips and chart series keep a stable
/// order across re-renders. An empty selection means "all categories
/// visible", never "show nothing".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            let id = id.into();
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    /// Flip membership of `id`, returning the new selection. Toggling the
    /// same id twice restores the prior value. Ids outside the catalog are
    /// accepted; they simply never match any data point.
    pub fn toggle(&self, id: &str) -> Selection {
        let mut next = self.clone();
        if let Some(pos) = next.ids.iter().position(|existing| existing == id) {
            next.ids.remove(pos);
        } else {
            next.ids.push(id.to_string());
        }
        next
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The shared inclusion predicate: a data point tagged `category` is
    /// visible iff the selection is empty or contains the category. Every
    /// derived view filters through this, which is what keeps map, chart,
    /// alert list and status cards consistent for the same selection.
    pub fn admits(&self, category: &str) -> bool {
        self.is_empty() || self.contains(category)
    }
}

type Subscriber = Box<dyn Fn(&Selection)>;

/// Owns the current selection and the subscriber list. `toggle` applies the
/// new value before any subscriber runs, so no callback can observe a
/// half-updated selection.
#[derive(Default)]
pub struct SelectionModel {
    current: Selection,
    subscribers: Vec<Subscriber>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&Selection) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn toggle(&mut self, id: &str) -> Selection {
        self.current = self.current.toggle(id);
        let snapshot = self.current.clone();
        for subscriber in &self.subscribers {
            subscriber(&snapshot);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn toggle_adds_then_removes() {
        let selection = Selection::new().toggle("flood");
        assert!(selection.contains("flood"));
        assert_eq!(selection.len(), 1);

        let selection = selection.toggle("flood");
        assert!(!selection.contains("flood"));
        assert!(selection.is_empty());
    }

    #[test]
    fn double_toggle_is_identity() {
        let start = Selection::from_ids(["earthquake", "drought"]);
        let round_trip = start.toggle("flood").toggle("flood");
        assert_eq!(round_trip, start);
    }

    #[test]
    fn membership_stays_unique() {
        let selection = Selection::from_ids(["flood", "flood", "drought"]);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.ids(), ["flood", "drought"]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let selection = Selection::new()
            .toggle("drought")
            .toggle("flood")
            .toggle("earthquake")
            .toggle("drought");
        assert_eq!(selection.ids(), ["flood", "earthquake"]);
    }

    #[test]
    fn empty_selection_admits_everything() {
        let selection = Selection::new();
        assert!(selection.admits("flood"));
        assert!(selection.admits("not-a-category"));
    }

    #[test]
    fn non_empty_selection_admits_members_only() {
        let selection = Selection::from_ids(["flood"]);
        assert!(selection.admits("flood"));
        assert!(!selection.admits("earthquake"));
    }

    #[test]
    fn unknown_id_is_accepted_as_member() {
        let selection = Selection::new().toggle("not-a-category");
        assert!(selection.contains("not-a-category"));
        assert!(!selection.admits("flood"));
    }

    #[test]
    fn model_notifies_with_fully_applied_value() {
        let seen: Rc<RefCell<Vec<Selection>>> = Rc::new(RefCell::new(Vec::new()));
        let mut model = SelectionModel::new();

        let sink = Rc::clone(&seen);
        model.subscribe(move |selection| sink.borrow_mut().push(selection.clone()));
        let sink = Rc::clone(&seen);
        model.subscribe(move |selection| sink.borrow_mut().push(selection.clone()));

        let returned = model.toggle("flood");
        assert_eq!(returned, Selection::from_ids(["flood"]));
        assert_eq!(model.current(), &returned);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|s| s == &returned));
    }

    #[test]
    fn model_toggle_back_notifies_empty() {
        let seen: Rc<RefCell<Vec<Selection>>> = Rc::new(RefCell::new(Vec::new()));
        let mut model = SelectionModel::new();
        let sink = Rc::clone(&seen);
        model.subscribe(move |selection| sink.borrow_mut().push(selection.clone()));

        model.toggle("flood");
        model.toggle("flood");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_empty());
    }
}
