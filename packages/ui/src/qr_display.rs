use api::qr::{qr_image_url, QR_SIZE};
use dioxus::prelude::*;

/// QR code image for `data`, rendered by the external QR service.
#[component]
pub fn QrDisplay(data: String, title: String) -> Element {
    let src = qr_image_url(&data, QR_SIZE);
    rsx! {
        div {
            class: "qr",
            img {
                class: "qr__image",
                src: "{src}",
                alt: "QR Code for {title}",
                width: "{QR_SIZE}",
                height: "{QR_SIZE}",
            }
            p { class: "qr__caption", "Scan this QR code to verify collection" }
        }
    }
}
