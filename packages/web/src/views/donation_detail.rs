//! Donor view of one donation: its details, the NGO requests against it and the
//! collection QR code.

use api::models::{requests_for_donation, Donation, DonationRequest, RequestStatus};
use api::qr::collection_payload;
use chrono::Utc;
use dioxus::prelude::*;
use ui::{
    report_error, use_api, use_auth, DonationStatusBadge, Notice, NoticeBanner, QrDisplay,
    RequestStatusBadge, TimeRemainingBadge,
};

use super::local_datetime;
use crate::Route;

#[component]
pub fn DonationDetail(id: i64) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut updating = use_signal(|| Option::<i64>::None);

    // Re-fetch when the route switches to another donation
    let mut detail = use_resource({
        let api = api.clone();
        use_reactive((&id,), move |(id,)| {
            let api = api.clone();
            async move {
                let donations = api.list_donations().await.map_err(|e| report_error(auth, &api, &e))?;
                let requests = api.list_requests().await.map_err(|e| report_error(auth, &api, &e))?;
                let donation = donations.into_iter().find(|d| d.id == id);
                Ok::<_, Notice>((donation, requests_for_donation(&requests, id)))
            }
        })
    });

    let set_status = use_callback(move |(request_id, status): (i64, RequestStatus)| {
        let api = api.clone();
        spawn(async move {
            updating.set(Some(request_id));
            notice.set(None);
            match api.update_request_status(request_id, status).await {
                Ok(_) => {
                    notice.set(Some(Notice::success(format!("Request {}", status.as_str()))));
                    detail.restart();
                }
                Err(e) => notice.set(Some(report_error(auth, &api, &e))),
            }
            updating.set(None);
        });
    });

    rsx! {
        Link { to: Route::MyDonations {}, class: "back-link", "← Back to My Donations" }

        NoticeBanner { notice: notice() }

        match &*detail.read() {
            None => rsx! { p { class: "loading", "Loading donation..." } },
            Some(Err(err)) => rsx! { NoticeBanner { notice: Some(err.clone()) } },
            Some(Ok((None, _))) => rsx! {
                div {
                    class: "empty-state",
                    h3 { "Donation not found" }
                }
            },
            Some(Ok((Some(donation), requests))) => rsx! {
                div {
                    class: "detail",
                    DonationSummary { donation: donation.clone() }
                    section {
                        class: "detail__requests",
                        h2 { "NGO Requests ({requests.len()})" }
                        if requests.is_empty() {
                            p { class: "list__muted", "No requests yet." }
                        }
                        for request in requests.iter() {
                            RequestRow {
                                key: "{request.id}",
                                request: request.clone(),
                                busy: updating() == Some(request.id),
                                on_status: set_status,
                            }
                        }
                    }
                    section {
                        class: "detail__qr",
                        h2 { "Collection QR Code" }
                        QrDisplay { data: collection_payload(donation.id), title: donation.title.clone() }
                    }
                }
            },
        }
    }
}

#[component]
fn DonationSummary(donation: Donation) -> Element {
    let remaining = donation.time_remaining(Utc::now());
    rsx! {
        section {
            class: "detail__summary",
            div {
                class: "card__meta",
                DonationStatusBadge { status: donation.status }
                TimeRemainingBadge { remaining }
            }
            h1 { "{donation.title}" }
            if let Some(description) = donation.description.as_deref() {
                p { "{description}" }
            }
            dl {
                class: "card__facts",
                dt { "Quantity" }
                dd { "{donation.quantity}" }
                dt { "Food type" }
                dd { "{donation.food_type_or_default().label()}" }
                dt { "Best before" }
                dd { "{local_datetime(&donation.expiry_time)}" }
                dt { "Location" }
                dd { "{donation.location}" }
                dt { "Posted" }
                dd { "{local_datetime(&donation.created_at)}" }
            }
        }
    }
}

#[component]
fn RequestRow(
    request: DonationRequest,
    busy: bool,
    on_status: EventHandler<(i64, RequestStatus)>,
) -> Element {
    let id = request.id;
    let ngo = request.ngo_name.clone().unwrap_or_else(|| "NGO".to_string());

    rsx! {
        div {
            class: "list__item",
            div {
                class: "list__main",
                h3 { "{ngo}" }
                if let Some(message) = request.message.as_deref() {
                    p { "{message}" }
                }
                p { class: "list__muted", "Requested {local_datetime(&request.created_at)}" }
            }
            RequestStatusBadge { status: request.status }
            match request.status {
                RequestStatus::Pending => rsx! {
                    button {
                        class: "btn btn--primary",
                        disabled: busy,
                        onclick: move |_| on_status.call((id, RequestStatus::Approved)),
                        "Approve"
                    }
                    button {
                        class: "btn btn--danger",
                        disabled: busy,
                        onclick: move |_| on_status.call((id, RequestStatus::Rejected)),
                        "Reject"
                    }
                },
                RequestStatus::Approved => rsx! {
                    button {
                        class: "btn btn--primary",
                        disabled: busy,
                        onclick: move |_| on_status.call((id, RequestStatus::Collected)),
                        "Mark Collected"
                    }
                },
                RequestStatus::Rejected | RequestStatus::Collected => rsx! {},
            }
        }
    }
}
