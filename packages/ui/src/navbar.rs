use api::Session;
use dioxus::prelude::*;

use crate::auth::LogoutButton;
use crate::icons::FaBowlFood;
use crate::Icon;

const UI_CSS: Asset = asset!("/assets/ui.css");

/// Top bar. `children` are the role-specific links; the identity of `session`
/// and a logout button are appended when signed in.
#[component]
pub fn Navbar(session: Option<Session>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            class: "navbar",
            span {
                class: "navbar__brand",
                Icon { icon: FaBowlFood, width: 18, height: 18 }
                "FoodShare"
            }
            div { class: "navbar__links", {children} }
            if let Some(session) = session {
                div {
                    class: "navbar__user",
                    span { class: "navbar__name", "{session.user.display_name()}" }
                    span { class: "navbar__role", "{session.role().label()}" }
                    LogoutButton { class: "btn btn--ghost" }
                }
            }
        }
    }
}
