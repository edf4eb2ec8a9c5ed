/// The view builder: a pure function from a store snapshot to a
/// complete description of the dashboard.
///
/// `build_page` reads nothing but its arguments and performs no I/O,
/// so the same snapshot and selection always produce the same `Page`.
/// The widget layer (`ui::widgets`) turns a `Page` into iced widgets;
/// everything that can be decided from data alone is decided here.

use chrono::NaiveDate;

use crate::state::store::Store;

/// Full description of the rendered dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub intro: String,
    pub tabs: Vec<Tab>,
    pub panels: Vec<Panel>,
}

/// One clickable tab in the tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Display label (the rover identifier as declared)
    pub label: String,
    /// Lowercased identifier used in click messages and panel lookup
    pub key: String,
    /// Whether this tab carries the active highlight
    pub active: bool,
}

/// One rover's panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub key: String,
    pub heading: String,
    pub body: PanelBody,
}

/// What a panel shows: real data, or the loading placeholder.
///
/// The decision is per rover. A panel goes `Loaded` the moment its own
/// rover's record lands in the store, regardless of how many other
/// fetches are still in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// This rover's fetch has not completed (or failed); wait and see
    Loading,
    /// Mission info plus the full photo gallery
    Loaded {
        info: InfoList,
        gallery: Vec<GalleryItem>,
    },
}

/// The mission facts shown above a rover's gallery, display-formatted
#[derive(Debug, Clone, PartialEq)]
pub struct InfoList {
    pub launch_date: String,
    pub landing_date: String,
    pub status: String,
    /// Earth date of the most recent photo in the batch
    pub latest_photo_date: String,
}

/// One gallery entry: an image and its capture date
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub image_url: String,
    pub earth_date: String,
}

/// Build the complete page for one snapshot.
///
/// `selected` is the lowercased key of the tab the user has chosen; it
/// lives outside the store (see `ui::tabs`) and is passed in so the
/// builder stays a function of its arguments only.
pub fn build_page(store: &Store, selected: &str) -> Page {
    let tabs = store
        .rovers()
        .iter()
        .map(|rover| {
            let key = rover.to_lowercase();
            Tab {
                label: rover.clone(),
                active: key == selected,
                key,
            }
        })
        .collect();

    let panels = store
        .rovers()
        .iter()
        .map(|rover| Panel {
            key: rover.to_lowercase(),
            heading: format!("Welcome to the {} tab", rover),
            body: build_panel_body(store, rover),
        })
        .collect();

    Page {
        title: "Welcome to the Mars rovers information panel".to_string(),
        intro: "The latest photos sent home by Curiosity, Opportunity and Spirit."
            .to_string(),
        tabs,
        panels,
    }
}

/// Decide one rover's panel body: the per-rover gate.
///
/// The check is structural on purpose: the key must exist *and* the
/// record must have at least one photo before any nested field is
/// read, so a half-formed record can never fault the render.
fn build_panel_body(store: &Store, rover: &str) -> PanelBody {
    let record = match store.record(rover) {
        Some(record) => record,
        None => return PanelBody::Loading,
    };
    let latest = match record.latest() {
        Some(photo) => photo,
        None => return PanelBody::Loading,
    };

    let info = InfoList {
        launch_date: display_date(&latest.meta.launch_date),
        landing_date: display_date(&latest.meta.landing_date),
        status: latest.meta.status.clone(),
        latest_photo_date: display_date(&latest.earth_date),
    };

    let gallery = record
        .photos
        .iter()
        .map(|photo| GalleryItem {
            image_url: photo.image_url.clone(),
            earth_date: display_date(&photo.earth_date),
        })
        .collect();

    PanelBody::Loaded { info, gallery }
}

/// Reformat a wire date ("2012-08-06") for display ("06 Aug 2012").
/// Anything that does not parse is shown as-is rather than dropped.
fn display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
