/// The application store: an immutable snapshot of everything the
/// dashboard knows about the rovers.
///
/// The store is never mutated in place. Every update goes through
/// `Store::merge`, which produces a brand-new snapshot and leaves the
/// old one untouched. The application struct owns the current snapshot
/// and swaps it on each completed fetch; anyone still holding the old
/// snapshot keeps a fully valid view of the world.

use std::collections::HashMap;
use std::sync::Arc;

use super::data::RoverRecord;

/// One immutable snapshot of application state.
///
/// Rover records sit behind `Arc` so that merging a new record clones
/// three map entries, not every photo of every rover.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    /// Rover identifiers in declaration order; fixed for the session.
    /// This order defines the tab order in the UI.
    rovers: Vec<String>,
    /// Loaded photo batches, keyed by lowercased rover identifier.
    /// Entries are only ever added or replaced, never removed.
    rover_data: HashMap<String, Arc<RoverRecord>>,
}

/// A partial update to be merged into a snapshot.
///
/// Only carries the rover entries it wants to add or replace; every
/// other entry in the target snapshot is preserved unchanged.
#[derive(Debug, Clone, Default)]
pub struct StoreUpdate {
    rover_data: HashMap<String, Arc<RoverRecord>>,
}

impl Store {
    /// Create the startup snapshot: the fixed rover list, no data yet.
    pub fn new(rovers: &[&str]) -> Self {
        Store {
            rovers: rovers.iter().map(|r| r.to_string()).collect(),
            rover_data: HashMap::new(),
        }
    }

    /// Produce a new snapshot with `update` merged in.
    ///
    /// This is a pure key-level union: entries named by the update
    /// overwrite any existing entry for the same rover, entries it does
    /// not name carry over untouched. Neither `self` nor `update`'s
    /// contents are modified.
    pub fn merge(&self, update: StoreUpdate) -> Store {
        let mut rover_data = self.rover_data.clone();
        rover_data.extend(update.rover_data);

        Store {
            rovers: self.rovers.clone(),
            rover_data,
        }
    }

    /// Rover identifiers in tab order
    pub fn rovers(&self) -> &[String] {
        &self.rovers
    }

    /// Look up a rover's record, case-insensitively.
    /// Returns `None` while that rover's fetch has not completed.
    pub fn record(&self, rover: &str) -> Option<&RoverRecord> {
        self.rover_data.get(&rover.to_lowercase()).map(Arc::as_ref)
    }

    /// How many rovers have data loaded
    pub fn loaded_count(&self) -> usize {
        self.rover_data.len()
    }
}

impl StoreUpdate {
    /// Build a partial update carrying one rover's freshly fetched record
    pub fn rover(name: &str, record: RoverRecord) -> Self {
        let mut rover_data = HashMap::new();
        rover_data.insert(name.to_lowercase(), Arc::new(record));
        StoreUpdate { rover_data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Photo, RoverMeta};

    fn record(name: &str, dates: &[&str]) -> RoverRecord {
        RoverRecord {
            name: name.to_string(),
            photos: dates
                .iter()
                .map(|d| Photo {
                    earth_date: d.to_string(),
                    image_url: format!("http://mars.test/{}/{}.jpg", name, d),
                    meta: RoverMeta {
                        landing_date: "2012-08-06".to_string(),
                        launch_date: "2011-11-26".to_string(),
                        status: "active".to_string(),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn new_store_has_no_data() {
        let store = Store::new(&["Curiosity", "Opportunity", "Spirit"]);

        assert_eq!(store.rovers().len(), 3);
        assert_eq!(store.loaded_count(), 0);
        assert!(store.record("curiosity").is_none());
    }

    #[test]
    fn merge_adds_one_rover_without_touching_others() {
        let store = Store::new(&["Curiosity", "Opportunity", "Spirit"]);
        let store = store.merge(StoreUpdate::rover("spirit", record("spirit", &["2010-03-21"])));
        let store = store.merge(StoreUpdate::rover(
            "curiosity",
            record("curiosity", &["2021-01-01"]),
        ));

        // Merging curiosity left spirit's entry exactly as it was
        assert_eq!(store.record("spirit").unwrap().photos.len(), 1);
        assert_eq!(
            store.record("spirit").unwrap().photos[0].earth_date,
            "2010-03-21"
        );
        assert!(store.record("opportunity").is_none());
        assert_eq!(store.loaded_count(), 2);
    }

    #[test]
    fn merge_does_not_mutate_the_old_snapshot() {
        let before = Store::new(&["Curiosity", "Opportunity", "Spirit"]);
        let after = before.merge(StoreUpdate::rover(
            "curiosity",
            record("curiosity", &["2021-01-01"]),
        ));

        // The old snapshot is still the empty one
        assert!(before.record("curiosity").is_none());
        assert_eq!(before.loaded_count(), 0);
        assert_eq!(after.loaded_count(), 1);
    }

    #[test]
    fn later_merge_replaces_a_rover_record() {
        let store = Store::new(&["Curiosity", "Opportunity", "Spirit"]);
        let store = store.merge(StoreUpdate::rover(
            "curiosity",
            record("curiosity", &["2021-01-01"]),
        ));
        let store = store.merge(StoreUpdate::rover(
            "curiosity",
            record("curiosity", &["2021-02-14", "2021-02-13"]),
        ));

        // Replacement, not append: the refetched batch wins outright
        let photos = &store.record("curiosity").unwrap().photos;
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].earth_date, "2021-02-14");
        assert_eq!(store.loaded_count(), 1);
    }

    #[test]
    fn monotonic_over_any_update_sequence() {
        let mut store = Store::new(&["Curiosity", "Opportunity", "Spirit"]);
        let updates = [
            ("spirit", record("spirit", &["2010-03-21"])),
            ("curiosity", record("curiosity", &["2021-01-01"])),
            ("spirit", record("spirit", &["2010-03-22"])),
        ];

        for (name, rec) in updates {
            store = store.merge(StoreUpdate::rover(name, rec));
        }

        // Each updated rover holds its most recently merged record;
        // opportunity, never updated, is still absent.
        assert_eq!(
            store.record("spirit").unwrap().photos[0].earth_date,
            "2010-03-22"
        );
        assert_eq!(
            store.record("curiosity").unwrap().photos[0].earth_date,
            "2021-01-01"
        );
        assert!(store.record("opportunity").is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let store = Store::new(&["Curiosity", "Opportunity", "Spirit"]);
        let store = store.merge(StoreUpdate::rover(
            "Curiosity",
            record("curiosity", &["2021-01-01"]),
        ));

        assert!(store.record("curiosity").is_some());
        assert!(store.record("CURIOSITY").is_some());
        assert!(store.record("Curiosity").is_some());
    }
}
