use dioxus::prelude::*;

use api::{evaluate, Access, GuardDecision, Role};
use ui::{use_api, use_auth, AuthProvider, Navbar};
use views::{
    AvailableDonations, Chat, DonateForm, DonationDetail, Home, Login, MyDonations, NgoDashboard,
    Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/chat")]
        Chat {},
        #[route("/donate")]
        DonateForm {},
        #[route("/my-donations")]
        MyDonations {},
        #[route("/donation/:id")]
        DonationDetail { id: i64 },
        #[route("/ngo-dashboard")]
        NgoDashboard {},
        #[route("/available-donations")]
        AvailableDonations {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// What the current session must satisfy before the view mounts.
    fn access(&self) -> Access {
        match self {
            Route::Login {} | Route::Register {} => Access::Guest,
            Route::Home {} | Route::Chat {} => Access::Authenticated,
            Route::DonateForm {} | Route::MyDonations {} | Route::DonationDetail { .. } => {
                Access::Role(Role::Donor)
            }
            Route::NgoDashboard {} | Route::AvailableDonations {} => Access::Role(Role::Ngo),
            Route::NotFound { .. } => Access::Public,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Layout for every page: runs the route guard, then renders the navbar and the
/// matched view.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let api = use_api();
    let auth = use_auth();

    // Re-run the guard whenever the session changes
    let _ = auth.read();
    let session = api.session().current();

    match evaluate(session.as_ref(), route.access()) {
        GuardDecision::Allow => {}
        GuardDecision::RedirectToLogin => {
            tracing::debug!("Guard: {:?} requires a session", route);
            nav.replace(Route::Login {});
            return rsx! {};
        }
        GuardDecision::RedirectToHome => {
            tracing::debug!("Guard: {:?} not available to this session", route);
            nav.replace(Route::Home {});
            return rsx! {};
        }
    }

    let role = session.as_ref().map(|s| s.role());

    rsx! {
        Navbar {
            session: session.clone(),
            match role {
                Some(Role::Donor) => rsx! {
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::DonateForm {}, "Donate Food" }
                    Link { to: Route::MyDonations {}, "My Donations" }
                    Link { to: Route::Chat {}, "Chat" }
                },
                Some(Role::Ngo) => rsx! {
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::AvailableDonations {}, "Available Donations" }
                    Link { to: Route::NgoDashboard {}, "Dashboard" }
                    Link { to: Route::Chat {}, "Chat" }
                },
                None => rsx! {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Register {}, "Register" }
                },
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "empty-state",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
