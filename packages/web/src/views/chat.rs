use api::chat::{ChatMessage, ChatThread};
use chrono::{Local, Utc};
use dioxus::prelude::*;
use ui::icons::{FaPaperPlane, FaUser};
use ui::{use_auth, Icon};

#[component]
pub fn Chat() -> Element {
    let auth = use_auth();
    let mut thread = use_signal(|| ChatThread::seeded(Utc::now()));
    let mut draft = use_signal(String::new);

    let own_role = auth().session.map(|s| s.role());

    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(role) = own_role else {
            return;
        };
        if thread.write().send(role, &draft(), Utc::now()) {
            draft.set(String::new());
        }
    };

    rsx! {
        div {
            class: "chat",
            div {
                class: "chat__header",
                div { class: "chat__avatar", Icon { icon: FaUser, width: 18, height: 18 } }
                div {
                    h3 { "Pickup coordination" }
                    p { class: "list__muted", "Messages stay on this device" }
                }
            }

            div {
                class: "chat__messages",
                for message in thread.read().messages().iter() {
                    ChatBubble {
                        key: "{message.id}",
                        message: message.clone(),
                        own: Some(message.sender) == own_role,
                    }
                }
            }

            form {
                class: "chat__input",
                onsubmit: handle_send,
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Type your message...",
                    value: "{draft}",
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    "Send"
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage, own: bool) -> Element {
    let class = if own {
        "chat__bubble chat__bubble--own"
    } else {
        "chat__bubble"
    };
    let time = message.sent_at.with_timezone(&Local).format("%H:%M").to_string();

    rsx! {
        div {
            class,
            p { "{message.text}" }
            span { class: "chat__time", "{time}" }
        }
    }
}
