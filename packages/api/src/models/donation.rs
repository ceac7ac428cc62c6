//! # Donations
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Donation`] | A surplus-food offer as listed by `GET /donations`. |
//! | [`DonationStatus`] | Backend-driven lifecycle: available → claimed → collected, or expired. |
//! | [`FoodType`] | Closed set of food categories offered by the donate form. |
//! | [`NewDonation`] | Body of `POST /donations`. |
//! | [`CreatedDonation`] | The backend's acknowledgement of a created donation. |
//! | [`TimeRemaining`] | Human-facing countdown until a donation's expiry. |

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Donation lifecycle state. Transitions happen on the backend only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Available,
    Claimed,
    Collected,
    Expired,
}

impl DonationStatus {
    /// Capitalised label for badges.
    pub fn label(self) -> &'static str {
        match self {
            DonationStatus::Available => "Available",
            DonationStatus::Claimed => "Claimed",
            DonationStatus::Collected => "Collected",
            DonationStatus::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodType {
    #[default]
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [FoodType::Vegetarian, FoodType::NonVegetarian, FoodType::Vegan];

    pub fn as_str(self) -> &'static str {
        match self {
            FoodType::Vegetarian => "vegetarian",
            FoodType::NonVegetarian => "non-vegetarian",
            FoodType::Vegan => "vegan",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FoodType::Vegetarian => "Vegetarian",
            FoodType::NonVegetarian => "Non-Vegetarian",
            FoodType::Vegan => "Vegan",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// A donation as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: String,
    #[serde(default)]
    pub food_type: Option<FoodType>,
    #[serde(with = "timestamp")]
    pub expiry_time: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub status: DonationStatus,
    #[serde(default)]
    pub donor_id: Option<i64>,
    /// Display name of the donor, denormalised by the backend.
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Donation {
    pub fn time_remaining(&self, now: DateTime<Utc>) -> TimeRemaining {
        TimeRemaining::between(now, self.expiry_time)
    }

    /// Whether an NGO may request this donation. Expired entries never are.
    pub fn is_requestable(&self, now: DateTime<Utc>) -> bool {
        !self.time_remaining(now).is_expired()
    }

    /// Food type with the backend default applied.
    pub fn food_type_or_default(&self) -> FoodType {
        self.food_type.unwrap_or_default()
    }
}

/// Body of `POST /donations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDonation {
    pub title: String,
    pub description: String,
    pub quantity: String,
    pub food_type: FoodType,
    #[serde(with = "timestamp")]
    pub expiry_time: DateTime<Utc>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Response of `POST /donations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedDonation {
    pub id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Countdown until a donation expires.
///
/// Whole hours are floored, so anything past the expiry instant reads as
/// [`TimeRemaining::Expired`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Expired,
    LessThanAnHour,
    Hours(i64),
    Days(i64),
}

impl TimeRemaining {
    const HOUR_MS: i64 = 60 * 60 * 1000;

    pub fn between(now: DateTime<Utc>, expiry: DateTime<Utc>) -> Self {
        let hours = (expiry - now).num_milliseconds().div_euclid(Self::HOUR_MS);
        match hours {
            h if h < 0 => TimeRemaining::Expired,
            0 => TimeRemaining::LessThanAnHour,
            h if h < 24 => TimeRemaining::Hours(h),
            h => TimeRemaining::Days(h / 24),
        }
    }

    pub fn is_expired(self) -> bool {
        matches!(self, TimeRemaining::Expired)
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRemaining::Expired => write!(f, "Expired"),
            TimeRemaining::LessThanAnHour => write!(f, "Less than 1 hour"),
            TimeRemaining::Hours(h) => write!(f, "{h} hours"),
            TimeRemaining::Days(d) => write!(f, "{d} days"),
        }
    }
}
