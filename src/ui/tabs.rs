/// Tab selection state machine.
///
/// One state per rover, starting on the first rover in declared order.
/// The selection deliberately lives outside the store: data arrivals
/// replace the store snapshot and re-render the page, and the selection
/// is reapplied on every render so the user's tab survives each refresh.

/// Which rover's panel is currently visible
#[derive(Debug, Clone, PartialEq)]
pub struct TabSelection {
    /// Lowercased rover keys in tab order
    keys: Vec<String>,
    /// Index into `keys` of the selected tab
    selected: usize,
}

impl TabSelection {
    /// Start with the first rover selected
    pub fn new(rovers: &[String]) -> Self {
        TabSelection {
            keys: rovers.iter().map(|r| r.to_lowercase()).collect(),
            selected: 0,
        }
    }

    /// Move the selection to `key`. Clicks for unknown keys are ignored
    /// and leave the current selection in place.
    pub fn select(&mut self, key: &str) {
        if let Some(index) = self.keys.iter().position(|k| k == key) {
            self.selected = index;
        }
    }

    /// Key of the currently selected tab
    pub fn selected_key(&self) -> &str {
        &self.keys[self.selected]
    }
}
