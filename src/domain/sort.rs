use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the offers list on the main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Backend order, untouched.
    #[default]
    Popular,
    PriceLowToHigh,
    PriceHighToLow,
    TopRatedFirst,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Popular,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
        SortKey::TopRatedFirst,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::PriceLowToHigh => "Price: low to high",
            Self::PriceHighToLow => "Price: high to low",
            Self::TopRatedFirst => "Top rated first",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Popular => write!(f, "popular"),
            Self::PriceLowToHigh => write!(f, "price-low-to-high"),
            Self::PriceHighToLow => write!(f, "price-high-to-low"),
            Self::TopRatedFirst => write!(f, "top-rated-first"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "popular" => Ok(Self::Popular),
            "price-low-to-high" => Ok(Self::PriceLowToHigh),
            "price-high-to-low" => Ok(Self::PriceHighToLow),
            "top-rated-first" => Ok(Self::TopRatedFirst),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}
