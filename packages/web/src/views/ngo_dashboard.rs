use api::models::{recent_requests, DashboardStats, DonationRequest, RequestStatus};
use dioxus::prelude::*;
use ui::icons::{FaBoxOpen, FaCircleCheck, FaClock, FaListCheck};
use ui::{
    report_error, use_api, use_auth, Icon, Notice, NoticeBanner, RequestStatusBadge,
};

use super::local_datetime;
use crate::Route;

const RECENT_LIMIT: usize = 5;

#[component]
pub fn NgoDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut withdrawing = use_signal(|| Option::<i64>::None);

    let mut requests = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.list_requests()
                    .await
                    .map_err(|e| report_error(auth, &api, &e))
            }
        }
    });

    let withdraw = use_callback(move |request_id: i64| {
        let api = api.clone();
        spawn(async move {
            withdrawing.set(Some(request_id));
            notice.set(None);
            match api.cancel_request(request_id).await {
                Ok(_) => {
                    notice.set(Some(Notice::success("Request withdrawn")));
                    requests.restart();
                }
                Err(e) => notice.set(Some(report_error(auth, &api, &e))),
            }
            withdrawing.set(None);
        });
    });

    rsx! {
        div {
            class: "page-header page-header--split",
            div {
                h1 { "NGO Dashboard" }
                p { "Track your donation requests and collections" }
            }
            Link { to: Route::AvailableDonations {}, class: "btn btn--primary", "Browse Donations" }
        }

        NoticeBanner { notice: notice() }

        match &*requests.read() {
            None => rsx! { p { class: "loading", "Loading dashboard..." } },
            Some(Err(err)) => rsx! { NoticeBanner { notice: Some(err.clone()) } },
            Some(Ok(list)) => rsx! {
                DashboardBody {
                    requests: list.clone(),
                    withdrawing: withdrawing(),
                    on_withdraw: withdraw,
                }
            },
        }
    }
}

#[component]
fn DashboardBody(
    requests: Vec<DonationRequest>,
    withdrawing: Option<i64>,
    on_withdraw: EventHandler<i64>,
) -> Element {
    let stats = DashboardStats::from_requests(&requests);

    rsx! {
        div {
            class: "stats-grid",
            StatCard { label: "Total Requests", value: stats.total, Icon { icon: FaListCheck, width: 20, height: 20 } }
            StatCard { label: "Active Requests", value: stats.active, Icon { icon: FaBoxOpen, width: 20, height: 20 } }
            StatCard { label: "Collected", value: stats.collected, Icon { icon: FaCircleCheck, width: 20, height: 20 } }
            StatCard { label: "Pending", value: stats.pending, Icon { icon: FaClock, width: 20, height: 20 } }
        }
        section {
            h2 { "Recent Requests" }
            if requests.is_empty() {
                p { class: "list__muted", "You have not requested any donations yet." }
            }
            ul {
                class: "list",
                for request in recent_requests(&requests, RECENT_LIMIT).iter() {
                    RecentRequest {
                        key: "{request.id}",
                        request: request.clone(),
                        busy: withdrawing == Some(request.id),
                        on_withdraw,
                    }
                }
            }
        }
    }
}

#[component]
fn RecentRequest(request: DonationRequest, busy: bool, on_withdraw: EventHandler<i64>) -> Element {
    let id = request.id;
    let title = request.donation_title.as_deref().unwrap_or("Donation");

    rsx! {
        li {
            class: "list__item",
            div {
                class: "list__main",
                h3 { "{title}" }
                if let Some(quantity) = request.donation_quantity.as_deref() {
                    p { "{quantity}" }
                }
                p { class: "list__muted", "Requested {local_datetime(&request.created_at)}" }
            }
            RequestStatusBadge { status: request.status }
            if request.status == RequestStatus::Pending {
                button {
                    class: "btn btn--ghost",
                    disabled: busy,
                    onclick: move |_| on_withdraw.call(id),
                    "Withdraw"
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: usize, children: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-card__icon", {children} }
            div { class: "stat-card__value", "{value}" }
            div { class: "stat-card__label", "{label}" }
        }
    }
}
