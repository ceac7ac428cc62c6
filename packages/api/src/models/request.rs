//! # Donation requests and dashboard aggregation
//!
//! A [`DonationRequest`] is an NGO's claim against a donation. The backend's
//! listing denormalises the donation title/quantity and the NGO name; the ids of
//! the related records are optional on the wire, and the client never invents
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Collected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Collected => "collected",
        }
    }

    /// Pending and approved requests are still in progress.
    pub fn is_active(self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Approved)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRequest {
    pub id: i64,
    #[serde(default)]
    pub donation_id: Option<i64>,
    #[serde(default)]
    pub ngo_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    pub status: RequestStatus,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub donation_title: Option<String>,
    #[serde(default)]
    pub donation_quantity: Option<String>,
    #[serde(default)]
    pub ngo_name: Option<String>,
}

/// Body of `POST /donations/{id}/request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMessage {
    pub message: String,
}

/// Message the NGO list sends when the user requests a donation.
pub const DEFAULT_REQUEST_MESSAGE: &str =
    "We would like to collect this donation for our community kitchen.";

/// Body of `PUT /requests/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
}

/// Counters shown on the NGO dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub collected: usize,
    pub pending: usize,
}

impl DashboardStats {
    pub fn from_requests(requests: &[DonationRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut stats, r| {
            stats.total += 1;
            if r.status.is_active() {
                stats.active += 1;
            }
            match r.status {
                RequestStatus::Collected => stats.collected += 1,
                RequestStatus::Pending => stats.pending += 1,
                RequestStatus::Approved | RequestStatus::Rejected => {}
            }
            stats
        })
    }
}

/// The first `limit` requests in backend order.
pub fn recent_requests(requests: &[DonationRequest], limit: usize) -> &[DonationRequest] {
    &requests[..requests.len().min(limit)]
}

/// Requests the backend linked to `donation_id`.
pub fn requests_for_donation(requests: &[DonationRequest], donation_id: i64) -> Vec<DonationRequest> {
    requests
        .iter()
        .filter(|r| r.donation_id == Some(donation_id))
        .cloned()
        .collect()
}
