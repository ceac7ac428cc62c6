//! Login page view with email/password form.

use api::forms::LoginForm;
use api::ErrorKind;
use dioxus::prelude::*;
use ui::{sync_session, use_api, use_auth};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let credentials = match form.read().validate() {
                Ok(credentials) => credentials,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match api.login(&credentials).await {
                Ok(_) => {
                    sync_session(auth, &api);
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    loading.set(false);
                    let message = match e.kind() {
                        ErrorKind::Auth => "Invalid email or password".to_string(),
                        ErrorKind::Server => e.message().to_string(),
                        ErrorKind::Network => e.user_message().to_string(),
                    };
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Sign in to FoodShare" }
            p { class: "auth-page__subtitle", "Share surplus food with the people who need it." }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{form.read().email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{form.read().password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-page__switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
