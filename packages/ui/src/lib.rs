//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{load_config, make_client, make_storage, PlatformApi, PlatformStore};

mod auth;
pub use auth::{report_error, sync_session, use_api, use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod badges;
pub use badges::{DonationStatusBadge, RequestStatusBadge, TimeRemainingBadge};

mod qr_display;
pub use qr_display::QrDisplay;

pub mod notice;
pub use notice::{Notice, NoticeBanner, NoticeLevel};
