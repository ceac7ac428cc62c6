//! Status and countdown badges.

use api::models::{DonationStatus, RequestStatus, TimeRemaining};
use dioxus::prelude::*;

use crate::icons::FaClock;
use crate::Icon;

#[component]
pub fn DonationStatusBadge(status: DonationStatus) -> Element {
    let class = match status {
        DonationStatus::Available => "badge badge--green",
        DonationStatus::Claimed => "badge badge--yellow",
        DonationStatus::Collected => "badge badge--blue",
        DonationStatus::Expired => "badge badge--red",
    };
    rsx! {
        span { class, "{status.label()}" }
    }
}

#[component]
pub fn RequestStatusBadge(status: RequestStatus) -> Element {
    let class = match status {
        RequestStatus::Pending => "badge badge--yellow",
        RequestStatus::Approved => "badge badge--green",
        RequestStatus::Rejected => "badge badge--red",
        RequestStatus::Collected => "badge badge--blue",
    };
    rsx! {
        span { class, "{status.as_str()}" }
    }
}

/// Countdown until expiry; red once expired.
#[component]
pub fn TimeRemainingBadge(remaining: TimeRemaining) -> Element {
    let class = match remaining {
        TimeRemaining::Expired => "badge badge--red",
        TimeRemaining::LessThanAnHour | TimeRemaining::Hours(_) => "badge badge--yellow",
        TimeRemaining::Days(_) => "badge badge--green",
    };
    rsx! {
        span {
            class,
            Icon { icon: FaClock, width: 12, height: 12 }
            "{remaining}"
        }
    }
}
