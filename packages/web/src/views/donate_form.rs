use api::forms::DonationForm;
use api::models::FoodType;
use chrono::{Local, Offset, Utc};
use dioxus::prelude::*;
use ui::{report_error, use_api, use_auth, Notice, NoticeBanner};

use crate::Route;

#[component]
pub fn DonateForm() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let mut form = use_signal(DonationForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);

            let offset = Local::now().offset().fix();
            let donation = match form.read().validate(Utc::now(), offset) {
                Ok(donation) => donation,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match api.create_donation(&donation).await {
                Ok(created) => {
                    tracing::info!("Created donation {}", created.data.id);
                    nav.push(Route::MyDonations {});
                }
                Err(e) => {
                    loading.set(false);
                    notice.set(Some(report_error(auth, &api, &e)));
                }
            }
        });
    };

    rsx! {
        button {
            class: "back-link",
            r#type: "button",
            onclick: move |_| nav.go_back(),
            "← Back"
        }

        div {
            class: "page-header",
            h1 { "Post a Food Donation" }
            p { "Share your surplus food with NGOs in your area" }
        }

        NoticeBanner { notice: notice() }

        form {
            onsubmit: handle_submit,
            class: "donation-form",

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            label { r#for: "title", "Food Title *" }
            input {
                id: "title",
                class: "input",
                r#type: "text",
                placeholder: "e.g., Fresh Vegetable Curry",
                value: "{form.read().title}",
                oninput: move |evt: FormEvent| form.write().title = evt.value(),
            }

            div {
                class: "form-row",
                div {
                    label { r#for: "quantity", "Quantity *" }
                    input {
                        id: "quantity",
                        class: "input",
                        r#type: "text",
                        placeholder: "e.g., 50 servings, 10 kg",
                        value: "{form.read().quantity}",
                        oninput: move |evt: FormEvent| form.write().quantity = evt.value(),
                    }
                }
                div {
                    label { r#for: "food_type", "Food Type" }
                    select {
                        id: "food_type",
                        class: "input",
                        value: "{form.read().food_type}",
                        onchange: move |evt: FormEvent| form.write().food_type = evt.value(),
                        for food_type in FoodType::ALL {
                            option { value: food_type.as_str(), "{food_type.label()}" }
                        }
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    label { r#for: "expiry", "Best Before *" }
                    input {
                        id: "expiry",
                        class: "input",
                        r#type: "datetime-local",
                        value: "{form.read().expiry}",
                        oninput: move |evt: FormEvent| form.write().expiry = evt.value(),
                    }
                }
                div {
                    label { r#for: "location", "Pickup Location *" }
                    input {
                        id: "location",
                        class: "input",
                        r#type: "text",
                        placeholder: "Full address for pickup",
                        value: "{form.read().location}",
                        oninput: move |evt: FormEvent| form.write().location = evt.value(),
                    }
                }
            }

            label { r#for: "description", "Description" }
            textarea {
                id: "description",
                class: "input",
                rows: "4",
                placeholder: "Describe the food, ingredients, special instructions...",
                value: "{form.read().description}",
                oninput: move |evt: FormEvent| form.write().description = evt.value(),
            }

            label { r#for: "image_url", "Image URL" }
            input {
                id: "image_url",
                class: "input",
                r#type: "url",
                placeholder: "https://",
                value: "{form.read().image_url}",
                oninput: move |evt: FormEvent| form.write().image_url = evt.value(),
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| nav.go_back(),
                    "Cancel"
                }
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Posting..." } else { "Post Donation" }
                }
            }
        }
    }
}
