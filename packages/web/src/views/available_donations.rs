//! NGO view: donations open for request.

use api::models::{Donation, DEFAULT_REQUEST_MESSAGE};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use ui::icons::{FaLocationDot, FaStore, FaUtensils};
use ui::{report_error, use_api, use_auth, Icon, Notice, NoticeBanner, TimeRemainingBadge};

use super::local_datetime;

#[component]
pub fn AvailableDonations() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut requesting = use_signal(|| Option::<i64>::None);

    let mut donations = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.list_donations()
                    .await
                    .map_err(|e| report_error(auth, &api, &e))
            }
        }
    });

    let request = use_callback(move |donation_id: i64| {
        let api = api.clone();
        spawn(async move {
            requesting.set(Some(donation_id));
            notice.set(None);
            match api.request_donation(donation_id, DEFAULT_REQUEST_MESSAGE).await {
                Ok(_) => {
                    notice.set(Some(Notice::success("Request sent successfully!")));
                    donations.restart();
                }
                Err(e) => notice.set(Some(report_error(auth, &api, &e))),
            }
            requesting.set(None);
        });
    });

    let now = Utc::now();

    rsx! {
        div {
            class: "page-header",
            h1 { "Available Donations" }
            p { "Browse and request food donations from local businesses" }
        }

        NoticeBanner { notice: notice() }

        match &*donations.read() {
            None => rsx! { p { class: "loading", "Loading donations..." } },
            Some(Err(err)) => rsx! { NoticeBanner { notice: Some(err.clone()) } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div {
                    class: "empty-state",
                    Icon { icon: FaUtensils, width: 40, height: 40 }
                    h3 { "No donations available" }
                    p { "Check back later for new food donations." }
                }
            },
            Some(Ok(list)) => rsx! {
                div {
                    class: "card-grid",
                    for donation in list.iter() {
                        DonationCard {
                            key: "{donation.id}",
                            donation: donation.clone(),
                            now,
                            busy: requesting() == Some(donation.id),
                            on_request: request,
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn DonationCard(
    donation: Donation,
    now: DateTime<Utc>,
    busy: bool,
    on_request: EventHandler<i64>,
) -> Element {
    let remaining = donation.time_remaining(now);
    let requestable = donation.is_requestable(now);
    let id = donation.id;
    let label = if busy {
        "Requesting..."
    } else if !requestable {
        "Expired"
    } else {
        "Request Donation"
    };

    rsx! {
        div {
            class: "card",
            if let Some(src) = donation.image_url.as_deref() {
                img { class: "card__image", src: "{src}", alt: "{donation.title}" }
            }
            div {
                class: "card__meta",
                span { class: "food-type", "{donation.food_type_or_default().label()}" }
                TimeRemainingBadge { remaining }
            }
            h3 { "{donation.title}" }
            if let Some(description) = donation.description.as_deref() {
                p { class: "card__description", "{description}" }
            }
            dl {
                class: "card__facts",
                dt { "Quantity" }
                dd { "{donation.quantity}" }
                dt { "Best before" }
                dd { "{local_datetime(&donation.expiry_time)}" }
            }
            p {
                class: "card__line",
                Icon { icon: FaLocationDot, width: 12, height: 12 }
                "{donation.location}"
            }
            if let Some(donor) = donation.donor_name.as_deref() {
                p {
                    class: "card__line",
                    Icon { icon: FaStore, width: 12, height: 12 }
                    "{donor}"
                }
            }
            button {
                class: "btn btn--primary btn--block",
                disabled: busy || !requestable,
                onclick: move |_| on_request.call(id),
                "{label}"
            }
        }
    }
}
