use chrono::{DateTime, Local, Utc};

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod chat;
pub use chat::Chat;

mod donate_form;
pub use donate_form::DonateForm;

mod my_donations;
pub use my_donations::MyDonations;

mod donation_detail;
pub use donation_detail::DonationDetail;

mod ngo_dashboard;
pub use ngo_dashboard::NgoDashboard;

mod available_donations;
pub use available_donations::AvailableDonations;

/// Timestamp in the viewer's local time, e.g. `Mar 01, 2025 18:30`.
pub(crate) fn local_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%b %d, %Y %H:%M").to_string()
}
