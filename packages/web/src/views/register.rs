//! Registration page view.

use api::forms::RegisterForm;
use api::Role;
use dioxus::prelude::*;
use ui::use_api;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let registration = match form.read().validate() {
                Ok(registration) => registration,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match api.register(&registration).await {
                Ok(_) => {
                    tracing::info!("Registered {} account", registration.role.as_str());
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    loading.set(false);
                    let message = match e.status() {
                        Some(_) => e.message().to_string(),
                        None => e.user_message().to_string(),
                    };
                    error.set(Some(message));
                }
            }
        });
    };

    let org_placeholder = match form.read().role {
        Role::Donor => "Business or restaurant name",
        Role::Ngo => "NGO name",
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }
            p { class: "auth-page__subtitle", "Join FoodShare as a donor or an NGO" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Username",
                    value: "{form.read().username}",
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
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
                    placeholder: "Password (min 6 characters)",
                    value: "{form.read().password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                select {
                    class: "input",
                    value: form.read().role.as_str(),
                    onchange: move |evt: FormEvent| {
                        if let Some(role) = Role::parse(&evt.value()) {
                            form.write().role = role;
                        }
                    },
                    option { value: "donor", "Donor (restaurant, shop, caterer)" }
                    option { value: "ngo", "NGO (food bank, shelter, kitchen)" }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: org_placeholder,
                    value: "{form.read().organization_name}",
                    oninput: move |evt: FormEvent| form.write().organization_name = evt.value(),
                }

                input {
                    class: "input",
                    r#type: "tel",
                    placeholder: "Contact number",
                    value: "{form.read().contact_number}",
                    oninput: move |evt: FormEvent| form.write().contact_number = evt.value(),
                }

                textarea {
                    class: "input",
                    placeholder: "Address",
                    rows: "2",
                    value: "{form.read().address}",
                    oninput: move |evt: FormEvent| form.write().address = evt.value(),
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-page__switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
