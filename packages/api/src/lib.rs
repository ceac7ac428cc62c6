//! # API crate: client core for FoodShare
//!
//! Everything the FoodShare frontend knows about the backend lives here, free of
//! any UI dependency so it can be unit-tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`SessionStore`] (hydrate / install / logout of the single durable session record) and the pure route guard [`evaluate`] |
//! | [`models`] | Wire types: users and roles, donations, requests, timestamps, time-remaining and dashboard aggregation |
//! | [`forms`] | Form state with client-side validation producing request bodies |
//! | [`chat`] | Local-only placeholder chat thread |
//! | [`qr`] | Collection payloads and QR image URLs |
//!
//! ## Calling the backend
//!
//! [`ApiClient`] wraps `reqwest`. It attaches the bearer token held by the
//! session store and maps every failure onto [`ApiError`] / [`ErrorKind`]. A
//! rejected credential clears the session before the error is returned, if that
//! credential is still the active one, so the next guard evaluation sends the
//! user to the login page.

pub mod auth;
pub mod chat;
mod client;
mod error;
pub mod forms;
pub mod models;
pub mod qr;

pub use auth::{evaluate, Access, GuardDecision, Session, SessionStore};
pub use client::{Ack, ApiClient, ApiResponse, Credentials, Registration};
pub use error::{ApiError, ErrorKind};
pub use models::{Role, UserInfo};
