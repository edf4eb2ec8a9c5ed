use iced::widget::image;
use iced::{Element, Task, Theme};
use std::collections::HashMap;

// Declare the application modules
mod api;
mod state;
mod ui;

use state::data::RoverRecord;
use state::store::{Store, StoreUpdate};
use ui::tabs::TabSelection;

/// The three rovers, in tab order. Fixed for the whole session.
const ROVERS: [&str; 3] = ["Curiosity", "Opportunity", "Spirit"];

/// Main application state
struct MarsDashboard {
    /// Current immutable store snapshot; replaced wholesale on each merge
    store: Store,
    /// Which rover's tab is open (lives outside the store on purpose,
    /// so data arrivals never disturb the user's selection)
    tabs: TabSelection,
    /// Fetched image bytes by URL, for the gallery widgets
    photos: HashMap<String, image::Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// One rover's latest-photos fetch finished, well or badly
    RoverFetched(String, Result<RoverRecord, api::ApiError>),
    /// One photo's image bytes arrived (or failed to)
    PhotoFetched(String, Result<Vec<u8>, api::ApiError>),
    /// User clicked a rover tab
    TabSelected(String),
}

impl MarsDashboard {
    /// Create the app and kick off one independent fetch per rover.
    ///
    /// The fetches are fire-and-forget: no join, no ordering. Each
    /// completion comes back as its own `RoverFetched` message and
    /// triggers exactly one merge+render cycle.
    fn new() -> (Self, Task<Message>) {
        let store = Store::new(&ROVERS);
        let tabs = TabSelection::new(store.rovers());

        println!("🛰️  Mars dashboard starting, fetching {} rovers", ROVERS.len());

        let fetches = Task::batch(ROVERS.iter().map(|rover| {
            let name = rover.to_string();
            Task::perform(api::fetch_latest_photos(name.clone()), move |result| {
                Message::RoverFetched(name.clone(), result)
            })
        }));

        (
            MarsDashboard {
                store,
                tabs,
                photos: HashMap::new(),
                status: "Contacting the rovers...".to_string(),
            },
            fetches,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RoverFetched(name, Ok(record)) => {
                println!("📡 {} answered with {} photos", name, record.photos.len());

                // Fetch the image bytes for any photo we have not seen.
                // These run independently too; each arrival fills in one
                // gallery cell.
                let photo_fetches = Task::batch(
                    record
                        .photos
                        .iter()
                        .filter(|photo| !self.photos.contains_key(&photo.image_url))
                        .map(|photo| {
                            let url = photo.image_url.clone();
                            Task::perform(
                                api::fetch_photo_bytes(url.clone()),
                                move |result| Message::PhotoFetched(url.clone(), result),
                            )
                        }),
                );

                // The merge is the only way the store changes: a new
                // snapshot replaces the old, iced re-renders, done.
                self.store = self.store.merge(StoreUpdate::rover(&name, record));
                self.status = format!(
                    "{} of {} rovers loaded",
                    self.store.loaded_count(),
                    self.store.rovers().len()
                );

                photo_fetches
            }
            Message::RoverFetched(name, Err(error)) => {
                // Log and leave the entry absent; the rover's panel
                // keeps its loading placeholder and nobody else is
                // affected.
                eprintln!("⚠️  Fetch for {} failed: {}", name, error);
                self.status = format!("Could not reach {}, still trying the others", name);

                Task::none()
            }
            Message::PhotoFetched(url, Ok(bytes)) => {
                self.photos.insert(url, image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::PhotoFetched(url, Err(error)) => {
                eprintln!("⚠️  Image fetch failed for {}: {}", url, error);
                Task::none()
            }
            Message::TabSelected(key) => {
                self.tabs.select(&key);
                Task::none()
            }
        }
    }

    /// Build the user interface: pure page description first, widgets second
    fn view(&self) -> Element<Message> {
        let page = ui::page::build_page(&self.store, self.tabs.selected_key());
        ui::widgets::dashboard(page, &self.photos, self.status.clone())
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Mars Rover Dashboard",
        MarsDashboard::update,
        MarsDashboard::view,
    )
    .theme(MarsDashboard::theme)
    .centered()
    .run_with(MarsDashboard::new)
}
