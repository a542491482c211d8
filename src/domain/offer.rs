use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::user::UserPreview;

/// Unique identifier for a rental offer
pub type OfferId = String;

/// Offers are shared between slices and views; replacing one element of a
/// list must not copy its neighbours.
pub type SharedOffer = Arc<Offer>;

/// Cities the listing is available in, in display order.
pub const CITIES: [&str; 6] = [
    "Paris",
    "Cologne",
    "Brussels",
    "Amsterdam",
    "Hamburg",
    "Dusseldorf",
];

/// City selected when the store is created.
pub fn default_city() -> String {
    CITIES[0].to_string()
}

/// Point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub location: Location,
}

/// Offer as it appears in lists (main page, nearby, favorites).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    /// Housing type (apartment, room, house, hotel).
    #[serde(rename = "type")]
    pub kind: String,
    pub price: u32,
    pub city: City,
    pub location: Location,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_premium: bool,
    pub rating: f64,
    #[serde(default)]
    pub preview_image: String,
}

/// Full offer shown on the offer page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDetails {
    pub id: OfferId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: u32,
    pub city: City,
    pub location: Location,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_premium: bool,
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub goods: Vec<String>,
    pub host: UserPreview,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub max_adults: u32,
}

/// Requested favorite state for an offer, encoded as `1`/`0` in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteStatus {
    Add,
    Remove,
}

impl FavoriteStatus {
    pub fn as_path_segment(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::Remove => "0",
        }
    }
}

impl From<bool> for FavoriteStatus {
    fn from(favorite: bool) -> Self {
        if favorite { Self::Add } else { Self::Remove }
    }
}

impl fmt::Display for FavoriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "on"),
            Self::Remove => write!(f, "off"),
        }
    }
}

impl FromStr for FavoriteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on" | "add" | "1" | "true" => Ok(Self::Add),
            "off" | "remove" | "0" | "false" => Ok(Self::Remove),
            other => Err(format!("unknown favorite status: {other}")),
        }
    }
}
