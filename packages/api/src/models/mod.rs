//! Data models exchanged with the backend.

mod donation;
mod request;
pub mod timestamp;
mod user;

pub use donation::{
    CreatedDonation, Donation, DonationStatus, FoodType, NewDonation, TimeRemaining,
};
pub use request::{
    recent_requests, requests_for_donation, DashboardStats, DonationRequest, RequestMessage,
    RequestStatus, StatusUpdate, DEFAULT_REQUEST_MESSAGE,
};
pub use user::{Role, UserInfo, UserProfile};
