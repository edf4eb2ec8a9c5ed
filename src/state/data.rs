/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

/// The latest known photo batch for one rover.
///
/// `photos` is nonempty whenever a record exists: the loader refuses to
/// produce an empty batch, and the view builder double-checks before
/// reading nested fields. The first photo is the canonical "latest".
#[derive(Debug, Clone, PartialEq)]
pub struct RoverRecord {
    /// Rover identifier as declared at startup (e.g. "Curiosity")
    pub name: String,
    /// All photos from the latest batch, in API order (newest first)
    pub photos: Vec<Photo>,
}

/// One photo from a rover's latest batch
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    /// Date the photo was taken on Earth time, as "YYYY-MM-DD"
    pub earth_date: String,
    /// Full URL of the image on the NASA photo servers
    pub image_url: String,
    /// Mission metadata the API embeds in every photo
    pub meta: RoverMeta,
}

/// Mission metadata for a rover, repeated by the API on each photo
#[derive(Debug, Clone, PartialEq)]
pub struct RoverMeta {
    /// Date the rover touched down on Mars, as "YYYY-MM-DD"
    pub landing_date: String,
    /// Date the rover launched from Earth, as "YYYY-MM-DD"
    pub launch_date: String,
    /// Mission status (e.g. "active", "complete")
    pub status: String,
}

impl RoverRecord {
    /// The most recent photo in the batch.
    ///
    /// Records are built with nonempty batches, so this only returns
    /// `None` for a record constructed by hand in a broken state.
    pub fn latest(&self) -> Option<&Photo> {
        self.photos.first()
    }
}
