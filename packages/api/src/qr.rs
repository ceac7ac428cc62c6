//! QR payloads for donation collection.
//!
//! Codes are rendered by an external image service; the client only builds the
//! payload and the image URL.

use reqwest::Url;

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default edge length, in pixels, of the rendered code.
pub const QR_SIZE: u32 = 200;

/// Payload scanned at pickup to confirm a donation was collected.
pub fn collection_payload(donation_id: i64) -> String {
    format!("donation:{donation_id}")
}

/// Image URL encoding `data` as a square code of `size` pixels.
pub fn qr_image_url(data: &str, size: u32) -> String {
    let dims = format!("{size}x{size}");
    match Url::parse_with_params(QR_SERVICE, &[("size", dims.as_str()), ("data", data)]) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::warn!("Could not build QR url: {}", e);
            String::new()
        }
    }
}
