//! Form state and client-side validation.
//!
//! Views keep these structs in a signal and call `validate` on submit. A
//! [`ValidationError`] is shown inline next to the form; no request is sent.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use thiserror::Error;

use crate::client::{Credentials, Registration};
use crate::models::{FoodType, NewDonation, Role};

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?1?\d{9,15}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Best before must be a valid date and time")]
    InvalidExpiry,

    #[error("Best before must be in the future")]
    ExpiryInPast,

    #[error("Unknown food type: {0}")]
    UnknownFoodType(String),
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn email(value: &str) -> Result<String, ValidationError> {
    let value = required(value, "Email")?;
    if EMAIL.is_match(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(Credentials {
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub organization_name: String,
    pub contact_number: String,
    pub address: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Donor,
            organization_name: String::new(),
            contact_number: String::new(),
            address: String::new(),
        }
    }
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        let username = required(&self.username, "Username")?;
        let email = email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        let organization_name = required(&self.organization_name, "Organization name")?;
        let contact_number: String = required(&self.contact_number, "Contact number")?
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        if !PHONE.is_match(&contact_number) {
            return Err(ValidationError::InvalidPhone);
        }
        let address = required(&self.address, "Address")?;

        Ok(Registration {
            username,
            email,
            password: self.password.clone(),
            role: self.role,
            organization_name,
            contact_number,
            address,
        })
    }
}

/// Create-donation form. `expiry` holds the raw `datetime-local` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub title: String,
    pub quantity: String,
    pub food_type: String,
    pub expiry: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
}

impl DonationForm {
    /// Validate against `now`, reading `expiry` as local time at `offset`.
    pub fn validate(
        &self,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> Result<NewDonation, ValidationError> {
        let title = required(&self.title, "Title")?;
        let quantity = required(&self.quantity, "Quantity")?;
        let food_type = match self.food_type.trim() {
            "" => FoodType::default(),
            other => FoodType::parse(other)
                .ok_or_else(|| ValidationError::UnknownFoodType(other.to_string()))?,
        };
        let expiry_time = parse_local(&self.expiry, offset)?;
        if expiry_time <= now {
            return Err(ValidationError::ExpiryInPast);
        }
        let location = required(&self.location, "Location")?;

        Ok(NewDonation {
            title,
            description: self.description.trim().to_string(),
            quantity,
            food_type,
            expiry_time,
            location,
            image_url: optional(&self.image_url),
        })
    }
}

fn parse_local(value: &str, offset: FixedOffset) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required("Best before"));
    }
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidExpiry)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(ValidationError::InvalidExpiry)
}
