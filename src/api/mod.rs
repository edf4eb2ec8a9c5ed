/// Rover photo API client
///
/// Fetches each rover's latest photo batch from the proxy server and
/// maps the wire format into the domain types in `state::data`. Every
/// fetch is independent: a failure for one rover is logged and that
/// rover's store entry simply stays absent, leaving its panel on the
/// loading placeholder.

use serde::Deserialize;
use thiserror::Error;

use crate::state::data::{Photo, RoverMeta, RoverRecord};

/// Base URL of the photo proxy when `MARS_API_URL` is not set
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Errors a rover fetch can end in.
///
/// Variants carry strings rather than source errors so the whole type
/// stays `Clone` and can ride inside an application message.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, dropped)
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body was not the JSON shape we expect
    #[error("malformed payload: {0}")]
    Decode(String),
    /// The response decoded fine but held no usable photos
    #[error("no usable photos in batch")]
    EmptyBatch,
}

/// Wire format of `GET /latest_photos?roverName=<name>`.
///
/// Every field is optional: the proxy passes the upstream NASA payload
/// through untouched, so we tolerate anything it might send and decide
/// afterwards which photos are usable.
#[derive(Debug, Deserialize)]
struct LatestPhotosResponse {
    #[serde(default)]
    latest_photos: Vec<PhotoDto>,
}

#[derive(Debug, Deserialize)]
struct PhotoDto {
    img_src: Option<String>,
    earth_date: Option<String>,
    rover: Option<RoverDto>,
}

#[derive(Debug, Deserialize)]
struct RoverDto {
    landing_date: Option<String>,
    launch_date: Option<String>,
    status: Option<String>,
}

/// Where the proxy server lives; overridable for non-default setups
fn base_url() -> String {
    std::env::var("MARS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Fetch the latest photo batch for one rover.
///
/// The rover name is lowercased on the wire, matching the proxy's
/// query contract. Returns a ready-to-merge `RoverRecord` with a
/// guaranteed nonempty photo list, or an `ApiError` describing why
/// this rover has nothing to show yet.
pub async fn fetch_latest_photos(rover: String) -> Result<RoverRecord, ApiError> {
    let url = format!(
        "{}/latest_photos?roverName={}",
        base_url(),
        rover.to_lowercase()
    );

    let resp = reqwest::get(&url)
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status().as_u16()));
    }

    let payload: LatestPhotosResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    into_record(rover, payload)
}

/// Fetch the raw bytes of one photo so the gallery can display it
pub async fn fetch_photo_bytes(url: String) -> Result<Vec<u8>, ApiError> {
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status().as_u16()));
    }

    resp.bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Map the wire payload into a domain record.
///
/// Photos missing any required field are dropped rather than allowed
/// to fault a later render. A batch with nothing left after filtering
/// is an error: stored records always have at least one photo.
fn into_record(rover: String, payload: LatestPhotosResponse) -> Result<RoverRecord, ApiError> {
    let photos: Vec<Photo> = payload
        .latest_photos
        .into_iter()
        .filter_map(|dto| {
            let rover_meta = dto.rover?;
            Some(Photo {
                earth_date: dto.earth_date?,
                image_url: dto.img_src?,
                meta: RoverMeta {
                    landing_date: rover_meta.landing_date?,
                    launch_date: rover_meta.launch_date?,
                    status: rover_meta.status?,
                },
            })
        })
        .collect();

    if photos.is_empty() {
        return Err(ApiError::EmptyBatch);
    }

    Ok(RoverRecord {
        name: rover,
        photos,
    })
}
