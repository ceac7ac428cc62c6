use api::Role;
use dioxus::prelude::*;
use ui::icons::{FaBoxOpen, FaChartColumn, FaComments, FaPlus};
use ui::{use_auth, Icon};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let Some(session) = auth().session else {
        return rsx! {};
    };
    let tagline = match session.role() {
        Role::Donor => "Make a difference by sharing your surplus food with those in need.",
        Role::Ngo => "Find available food donations to support your community.",
    };

    rsx! {
        div {
            class: "welcome",
            h1 { "Welcome back, {session.user.display_name()}!" }
            p { "{tagline}" }
        }
        div {
            class: "card-grid",
            match session.role() {
                Role::Donor => rsx! {
                    ActionCard {
                        to: Route::DonateForm {},
                        title: "Post Donation",
                        body: "Share your surplus food with NGOs in your area",
                        Icon { icon: FaPlus, width: 22, height: 22 }
                    }
                    ActionCard {
                        to: Route::MyDonations {},
                        title: "My Donations",
                        body: "View and manage your food donation posts",
                        Icon { icon: FaBoxOpen, width: 22, height: 22 }
                    }
                },
                Role::Ngo => rsx! {
                    ActionCard {
                        to: Route::AvailableDonations {},
                        title: "Available Donations",
                        body: "Browse food donations from local businesses",
                        Icon { icon: FaBoxOpen, width: 22, height: 22 }
                    }
                    ActionCard {
                        to: Route::NgoDashboard {},
                        title: "Dashboard",
                        body: "Manage your food requests and collections",
                        Icon { icon: FaChartColumn, width: 22, height: 22 }
                    }
                },
            }
            ActionCard {
                to: Route::Chat {},
                title: "Chat",
                body: "Coordinate pickups with donors and NGOs",
                Icon { icon: FaComments, width: 22, height: 22 }
            }
        }
    }
}

#[component]
fn ActionCard(to: Route, title: String, body: String, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "card card--action",
            div { class: "card__icon", {children} }
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}
