//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] builds the single [`PlatformApi`] for the tab (which owns the
//! [`api::SessionStore`]) and mirrors the current session into a signal so views
//! and the route guard re-render when it changes.

use api::{ApiError, ErrorKind, Session};
use dioxus::prelude::*;

use crate::notice::Notice;
use crate::storage::{make_client, PlatformApi};

/// Reactive view of the session held by the session store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The tab's API client.
pub fn use_api() -> PlatformApi {
    use_context::<PlatformApi>()
}

/// Copy the session store's current session into the auth signal.
///
/// Call after login, logout, or any call that may have cleared the session.
pub fn sync_session(mut auth: Signal<AuthState>, api: &PlatformApi) {
    let session = api.session().current();
    if auth.peek().session != session {
        auth.set(AuthState { session });
    }
}

/// Turn a failed call into the notice a view shows.
///
/// After an auth failure the signal is re-read from the session store, which
/// has already dropped the rejected credential. A newer session installed while
/// the call was in flight survives, and the guard only redirects when none is left.
pub fn report_error(auth: Signal<AuthState>, api: &PlatformApi, err: &ApiError) -> Notice {
    tracing::warn!("API call failed: {}", err);
    if err.kind() == ErrorKind::Auth {
        sync_session(auth, api);
    }
    Notice::from_error(err)
}

/// Provider component that owns the session for the tab.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_context_provider(make_client);
    let auth = use_context_provider(|| {
        Signal::new(AuthState {
            session: api.session().current(),
        })
    });

    // Refresh a restored identity from the profile endpoint on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            if !api.session().is_authenticated() {
                return;
            }
            if let Err(e) = api.profile().await {
                tracing::warn!("Profile refresh failed: {}", e);
            }
            sync_session(auth, &api);
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let api = use_api();

    let onclick = move |_| {
        api.logout();
        // The route guard redirects to the login page once the signal clears
        sync_session(auth, &api);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
