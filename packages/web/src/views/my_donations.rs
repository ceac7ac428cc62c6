use dioxus::prelude::*;
use ui::icons::FaBoxOpen;
use ui::{report_error, use_api, use_auth, DonationStatusBadge, Icon, NoticeBanner};

use super::local_datetime;
use crate::Route;

#[component]
pub fn MyDonations() -> Element {
    let api = use_api();
    let auth = use_auth();

    let donations = use_resource(move || {
        let api = api.clone();
        async move {
            api.list_donations()
                .await
                .map_err(|e| report_error(auth, &api, &e))
        }
    });

    rsx! {
        div {
            class: "page-header page-header--split",
            div {
                h1 { "My Donations" }
                p { "Manage your food donation posts" }
            }
            Link { to: Route::DonateForm {}, class: "btn btn--primary", "Post New Donation" }
        }

        match &*donations.read() {
            None => rsx! { p { class: "loading", "Loading donations..." } },
            Some(Err(err)) => rsx! { NoticeBanner { notice: Some(err.clone()) } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div {
                    class: "empty-state",
                    Icon { icon: FaBoxOpen, width: 40, height: 40 }
                    h3 { "No donations yet" }
                    p { "Start by posting your first food donation." }
                    Link { to: Route::DonateForm {}, class: "btn btn--primary", "Post Donation" }
                }
            },
            Some(Ok(list)) => rsx! {
                ul {
                    class: "list",
                    for donation in list.iter() {
                        li {
                            key: "{donation.id}",
                            class: "list__item",
                            div {
                                class: "list__main",
                                h3 { "{donation.title}" }
                                p { "{donation.quantity} · best before {local_datetime(&donation.expiry_time)}" }
                                p { class: "list__muted", "{donation.location}" }
                            }
                            DonationStatusBadge { status: donation.status }
                            Link {
                                to: Route::DonationDetail { id: donation.id },
                                class: "btn btn--ghost",
                                "View Details"
                            }
                        }
                    }
                }
            },
        }
    }
}
