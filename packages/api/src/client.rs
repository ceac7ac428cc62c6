//! # REST client
//!
//! [`ApiClient`] is the one HTTP wrapper every page goes through. It is built on
//! [`reqwest`], which uses `fetch` on wasm32 and hyper natively.
//!
//! For each call it:
//!
//! 1. attaches `Authorization: Bearer <token>` when the [`SessionStore`] holds a
//!    valid session;
//! 2. sends exactly one request: no retry, queueing, batching or client timeout;
//! 3. returns the status and decoded body on success, or an [`ApiError`]:
//!    `Network` when no response arrived, `Auth` when the credential was
//!    rejected, `Server` for any other failure status.
//!
//! A rejected credential is a 401, or a 422 carrying the token library's `msg`
//! body (malformed or badly signed token). The session is cleared only if it
//! still holds the token that was sent; a newer login stays in place.
//!
//! Requests and response statuses are traced at `debug`; failures at `warn`.
//! Tokens and bodies are never logged.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Request, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{ApiConfig, KeyValueStore};

use crate::auth::{Session, SessionStore};
use crate::error::ApiError;
use crate::models::{
    CreatedDonation, Donation, DonationRequest, NewDonation, RequestMessage, RequestStatus,
    Role, StatusUpdate, UserInfo, UserProfile,
};

/// Successful response: HTTP status plus decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

/// Generic `{"message": ...}` acknowledgement used by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub organization_name: String,
    pub contact_number: String,
    pub address: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
    user: UserInfo,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ApiClient<S: KeyValueStore> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(config: &ApiConfig, session: SessionStore<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let request = builder.build().map_err(ApiError::network)?;
        let method = request.method().clone();
        let url = request.url().clone();
        let sent_token = bearer_token(&request);
        tracing::debug!("→ {} {}", method, url);

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", method, url, e);
                return Err(ApiError::network(e));
            }
        };

        let status = response.status();
        tracing::debug!("← {} {} {}", status.as_u16(), method, url);
        let body = response.text().await.map_err(ApiError::network)?;

        if status.is_success() {
            let data = decode(&body)?;
            return Ok(ApiResponse {
                status: status.as_u16(),
                data,
            });
        }

        let message = error_message(&body, status);
        if rejects_credential(status, &body, sent_token.is_some()) {
            match sent_token {
                Some(token) if self.session.revoke(&token) => {
                    tracing::warn!("{} {} rejected the credential; session cleared", method, url);
                }
                Some(_) => {
                    tracing::debug!("{} {} rejected a replaced credential", method, url);
                }
                None => {}
            }
            return Err(ApiError::Auth { message });
        }

        tracing::warn!("{} {} returned {}: {}", method, url, status.as_u16(), message);
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    /// Authenticate and install the returned session.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let response: ApiResponse<LoginResponse> = self
            .send(self.request(Method::POST, "/auth/login").json(credentials))
            .await?;
        let LoginResponse { access_token, user } = response.data;
        let session = Session::new(user, access_token);
        self.session.install(session.clone());
        Ok(session)
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, registration: &Registration) -> Result<ApiResponse<Ack>, ApiError> {
        self.send(self.request(Method::POST, "/auth/register").json(registration))
            .await
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    /// Fetch the full profile and refresh the identity held by the session.
    ///
    /// The refresh is skipped if the session changed while the call was out.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let sent = self.session.token();
        let response: ApiResponse<UserProfile> =
            self.send(self.request(Method::GET, "/auth/profile")).await?;
        if let Some(session) = self.session.current() {
            if sent.as_deref() == Some(session.token.as_str()) {
                self.session
                    .install(Session::new(response.data.clone().into(), session.token));
            }
        }
        Ok(response.data)
    }

    pub async fn create_donation(
        &self,
        donation: &NewDonation,
    ) -> Result<ApiResponse<CreatedDonation>, ApiError> {
        self.send(self.request(Method::POST, "/donations").json(donation))
            .await
    }

    /// Donations visible to the caller: a donor's own, or the available ones for an NGO.
    pub async fn list_donations(&self) -> Result<Vec<Donation>, ApiError> {
        self.send(self.request(Method::GET, "/donations"))
            .await
            .map(|r| r.data)
    }

    /// Requests on the caller's donations (donor) or made by the caller (NGO).
    pub async fn list_requests(&self) -> Result<Vec<DonationRequest>, ApiError> {
        self.send(self.request(Method::GET, "/donations/requests"))
            .await
            .map(|r| r.data)
    }

    pub async fn request_donation(
        &self,
        donation_id: i64,
        message: &str,
    ) -> Result<ApiResponse<Ack>, ApiError> {
        let body = RequestMessage {
            message: message.to_string(),
        };
        self.send(
            self.request(Method::POST, &format!("/donations/{donation_id}/request"))
                .json(&body),
        )
        .await
    }

    /// Donor decision on a request: approve, reject or mark collected.
    pub async fn update_request_status(
        &self,
        request_id: i64,
        status: RequestStatus,
    ) -> Result<ApiResponse<Ack>, ApiError> {
        self.send(
            self.request(Method::PUT, &format!("/requests/{request_id}/status"))
                .json(&StatusUpdate { status }),
        )
        .await
    }

    /// Withdraw one of the caller's pending requests.
    pub async fn cancel_request(&self, request_id: i64) -> Result<ApiResponse<Ack>, ApiError> {
        self.send(self.request(Method::DELETE, &format!("/requests/{request_id}")))
            .await
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        // Empty bodies decode as `null`, or `{}` for all-default structs
        return serde_json::from_str("null")
            .or_else(|_| serde_json::from_str("{}"))
            .map_err(|e| ApiError::Decode(format!("empty response: {e}")));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn rejects_credential(status: StatusCode, body: &str, sent_token: bool) -> bool {
    if status == StatusCode::UNAUTHORIZED {
        return true;
    }
    // Malformed or badly signed tokens come back as 422 `{"msg": ...}`
    status == StatusCode::UNPROCESSABLE_ENTITY
        && sent_token
        && serde_json::from_str::<ErrorBody>(body).is_ok_and(|b| b.msg.is_some() && b.message.is_none())
}

fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.msg) {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::{delete, get, post, put};
    use axum::{Json, Router};
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use store::{MemoryStore, StorageConfig};
    use tokio::sync::Notify;

    use super::*;
    use crate::auth::{evaluate, ngo_user, token_expiring_at, Access, GuardDecision};
    use crate::error::ErrorKind;

    #[derive(Clone, Default)]
    struct Seen {
        auth: Arc<Mutex<Vec<Option<String>>>>,
        bodies: Arc<Mutex<Vec<Value>>>,
    }

    impl Seen {
        fn record(&self, headers: &HeaderMap, body: Option<Value>) {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            self.auth.lock().unwrap().push(auth);
            if let Some(body) = body {
                self.bodies.lock().unwrap().push(body);
            }
        }
    }

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(origin: &str, storage: &MemoryStore) -> ApiClient<MemoryStore> {
        let config = store::ClientConfig::default().with_origin(origin);
        let sessions = SessionStore::hydrate(storage.clone(), &config.storage);
        ApiClient::new(&config.api, sessions)
    }

    fn donation_json(id: i64) -> Value {
        json!({
            "id": id,
            "title": "Vegetable curry",
            "description": "Two trays",
            "quantity": "40 plates",
            "food_type": "vegetarian",
            "expiry_time": "2099-01-01T12:00:00",
            "location": "12 Market St",
            "status": "available",
            "donor_name": "Corner Bistro",
            "created_at": "2025-03-01T09:00:00"
        })
    }

    fn request_router(seen: Seen, request_status: AxumStatus) -> Router {
        Router::new()
            .route(
                "/api/donations",
                get(|State(seen): State<Seen>, headers: HeaderMap| async move {
                    seen.record(&headers, None);
                    Json(json!([donation_json(7), donation_json(8)]))
                }),
            )
            .route(
                "/api/donations/{id}/request",
                post(
                    move |State(seen): State<Seen>,
                          Path(id): Path<i64>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| async move {
                        seen.record(&headers, Some(json!({ "id": id, "body": body })));
                        if request_status == AxumStatus::UNAUTHORIZED {
                            (request_status, Json(json!({ "msg": "Token has expired" })))
                        } else {
                            (request_status, Json(json!({ "message": "Request submitted successfully" })))
                        }
                    },
                ),
            )
            .with_state(seen)
    }

    #[tokio::test]
    async fn test_request_donation_attaches_token_then_refetches() {
        let seen = Seen::default();
        let origin = spawn_backend(request_router(seen.clone(), AxumStatus::CREATED)).await;
        let storage = MemoryStore::new();
        let client = client_for(&origin, &storage);
        let token = token_expiring_at(Utc::now() + Duration::hours(1));
        client.session().install(Session::new(ngo_user(), token.clone()));

        let response = client.request_donation(7, "pickup at 3pm").await.unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.data.message.as_deref(), Some("Request submitted successfully"));

        // The page re-fetches its list after a successful request
        let donations = client.list_donations().await.unwrap();
        assert_eq!(donations.len(), 2);

        let auth = seen.auth.lock().unwrap().clone();
        assert_eq!(auth, vec![Some(format!("Bearer {token}")); 2]);
        let bodies = seen.bodies.lock().unwrap().clone();
        assert_eq!(bodies, vec![json!({ "id": 7, "body": { "message": "pickup at 3pm" } })]);
        assert!(client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_guard_sends_to_login() {
        let seen = Seen::default();
        let origin = spawn_backend(request_router(seen.clone(), AxumStatus::UNAUTHORIZED)).await;
        let storage = MemoryStore::new();
        let client = client_for(&origin, &storage);
        client
            .session()
            .install(Session::new(ngo_user(), token_expiring_at(Utc::now() + Duration::hours(1))));

        let err = client.request_donation(7, "pickup at 3pm").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert_eq!(err.message(), "Token has expired");

        assert!(client.session().current().is_none());
        assert!(storage.get("foodshare.session").unwrap().is_none());
        assert_eq!(
            evaluate(client.session().current().as_ref(), Access::Role(Role::Ngo)),
            GuardDecision::RedirectToLogin
        );
    }

    #[tokio::test]
    async fn test_late_unauthorized_keeps_newer_session() {
        let arrived = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let router = Router::new().route(
            "/api/donations",
            get({
                let arrived = arrived.clone();
                let release = release.clone();
                move || {
                    let arrived = arrived.clone();
                    let release = release.clone();
                    async move {
                        arrived.notify_one();
                        release.notified().await;
                        (AxumStatus::UNAUTHORIZED, Json(json!({ "msg": "Token has expired" })))
                    }
                }
            }),
        );
        let origin = spawn_backend(router).await;
        let storage = MemoryStore::new();
        let client = client_for(&origin, &storage);
        client.session().install(Session::new(ngo_user(), "first-token"));

        let in_flight = tokio::spawn({
            let client = client.clone();
            async move { client.list_donations().await }
        });
        arrived.notified().await;

        // Sign out and back in while the first call is still pending
        client.logout();
        client.session().install(Session::new(ngo_user(), "second-token"));
        release.notify_one();

        let err = in_flight.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert_eq!(client.session().token().as_deref(), Some("second-token"));
        let reloaded = SessionStore::hydrate(storage.clone(), &StorageConfig::default());
        assert_eq!(reloaded.token().as_deref(), Some("second-token"));
    }

    #[tokio::test]
    async fn test_malformed_token_rejection_clears_session() {
        let router = Router::new()
            .route(
                "/api/donations",
                get(|| async {
                    (
                        AxumStatus::UNPROCESSABLE_ENTITY,
                        Json(json!({ "msg": "Not enough segments" })),
                    )
                }),
            )
            .route(
                "/api/donations/{id}/request",
                post(|| async {
                    (
                        AxumStatus::UNPROCESSABLE_ENTITY,
                        Json(json!({ "message": "Message too long" })),
                    )
                }),
            );
        let origin = spawn_backend(router).await;
        let storage = MemoryStore::new();
        let client = client_for(&origin, &storage);
        client.session().install(Session::new(ngo_user(), "garbled"));

        // A validation 422 is an ordinary server error
        let err = client.request_donation(7, "hi").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert!(client.session().is_authenticated());

        let err = client.list_donations().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert_eq!(err.message(), "Not enough segments");
        assert!(client.session().current().is_none());
        assert!(storage.get("foodshare.session").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_profile_refreshes_stored_identity() {
        let seen = Seen::default();
        let router = Router::new()
            .route(
                "/api/auth/profile",
                get(|State(seen): State<Seen>, headers: HeaderMap| async move {
                    seen.record(&headers, None);
                    Json(json!({
                        "id": 5,
                        "username": "kitchen",
                        "email": "kitchen@example.org",
                        "role": "ngo",
                        "organization_name": "Riverside Kitchen",
                        "contact_number": "+15551234567",
                        "address": "1 Main Rd"
                    }))
                }),
            )
            .with_state(seen.clone());
        let origin = spawn_backend(router).await;
        let storage = MemoryStore::new();
        let client = client_for(&origin, &storage);
        client.session().install(Session::new(ngo_user(), "opaque-token"));

        let profile = client.profile().await.unwrap();
        assert_eq!(profile.address.as_deref(), Some("1 Main Rd"));
        assert_eq!(
            seen.auth.lock().unwrap().clone(),
            vec![Some("Bearer opaque-token".to_string())]
        );

        let session = client.session().current().unwrap();
        assert_eq!(session.token, "opaque-token");
        assert_eq!(session.organization_name(), Some("Riverside Kitchen"));
        let reloaded = SessionStore::hydrate(storage.clone(), &StorageConfig::default());
        assert_eq!(
            reloaded.current().unwrap().organization_name(),
            Some("Riverside Kitchen")
        );
    }

    #[tokio::test]
    async fn test_no_token_no_header() {
        let seen = Seen::default();
        let origin = spawn_backend(request_router(seen.clone(), AxumStatus::CREATED)).await;
        let client = client_for(&origin, &MemoryStore::new());

        client.list_donations().await.unwrap();
        assert_eq!(seen.auth.lock().unwrap().clone(), vec![None]);
    }

    #[tokio::test]
    async fn test_server_error_keeps_session() {
        let router = Router::new().route(
            "/api/donations/{id}/request",
            post(|| async {
                (
                    AxumStatus::NOT_FOUND,
                    Json(json!({ "message": "Donation not available" })),
                )
            }),
        );
        let origin = spawn_backend(router).await;
        let client = client_for(&origin, &MemoryStore::new());
        client.session().install(Session::new(ngo_user(), "opaque"));

        let err = client.request_donation(9, "hi").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: "Donation not available".to_string()
            }
        );
        assert!(client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}"), &MemoryStore::new());
        let err = client.list_donations().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_undecodable_success_is_server_kind() {
        let router = Router::new().route("/api/donations", get(|| async { "<html>oops</html>" }));
        let origin = spawn_backend(router).await;
        let client = client_for(&origin, &MemoryStore::new());

        let err = client.list_donations().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[tokio::test]
    async fn test_login_installs_and_persists_session() {
        let token = token_expiring_at(Utc::now() + Duration::hours(1));
        let issued = token.clone();
        let router = Router::new().route(
            "/api/auth/login",
            post(move |Json(body): Json<Value>| async move {
                if body["password"] == "secret1" {
                    (
                        AxumStatus::OK,
                        Json(json!({
                            "access_token": issued,
                            "user": {
                                "id": 5,
                                "username": "kitchen",
                                "email": "kitchen@example.org",
                                "role": "ngo",
                                "organization_name": "Community Kitchen"
                            }
                        })),
                    )
                } else {
                    (AxumStatus::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" })))
                }
            }),
        );
        let origin = spawn_backend(router).await;
        let storage = MemoryStore::new();
        let client = client_for(&origin, &storage);

        let bad = client
            .login(&Credentials {
                email: "kitchen@example.org".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(bad.kind(), ErrorKind::Auth);
        assert_eq!(bad.message(), "Invalid credentials");

        let session = client
            .login(&Credentials {
                email: "kitchen@example.org".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.user, ngo_user());

        // Reload from durable storage restores the identity
        let reloaded = SessionStore::hydrate(storage.clone(), &StorageConfig::default());
        assert_eq!(reloaded.current().unwrap().user, ngo_user());
        assert_eq!(reloaded.token(), Some(token));

        client.logout();
        assert!(storage.get("foodshare.session").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_status_update_and_cancel() {
        let seen = Seen::default();
        let router = Router::new()
            .route(
                "/api/requests/{id}/status",
                put(
                    |State(seen): State<Seen>, Path(id): Path<i64>, headers: HeaderMap, Json(body): Json<Value>| async move {
                        seen.record(&headers, Some(json!({ "id": id, "body": body })));
                        Json(json!({ "message": "Request approved successfully", "success": true }))
                    },
                ),
            )
            .route(
                "/api/requests/{id}",
                delete(|State(seen): State<Seen>, Path(id): Path<i64>, headers: HeaderMap| async move {
                    seen.record(&headers, Some(json!({ "deleted": id })));
                    Json(json!({ "message": "Request deleted successfully", "success": true }))
                }),
            )
            .with_state(seen.clone());
        let origin = spawn_backend(router).await;
        let client = client_for(&origin, &MemoryStore::new());

        client.update_request_status(3, RequestStatus::Approved).await.unwrap();
        let cancelled = client.cancel_request(4).await.unwrap();
        assert_eq!(cancelled.status, 200);

        let bodies = seen.bodies.lock().unwrap().clone();
        assert_eq!(
            bodies,
            vec![
                json!({ "id": 3, "body": { "status": "approved" } }),
                json!({ "deleted": 4 }),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_donation_returns_id() {
        let router = Router::new().route(
            "/api/donations",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["title"], "Sandwiches");
                (
                    AxumStatus::CREATED,
                    Json(json!({ "message": "Donation created successfully", "id": 12 })),
                )
            }),
        );
        let origin = spawn_backend(router).await;
        let client = client_for(&origin, &MemoryStore::new());

        let created = client
            .create_donation(&NewDonation {
                title: "Sandwiches".to_string(),
                description: String::new(),
                quantity: "50".to_string(),
                food_type: crate::models::FoodType::Vegetarian,
                expiry_time: Utc::now() + Duration::hours(4),
                location: "Depot".to_string(),
                image_url: None,
            })
            .await
            .unwrap();
        assert_eq!(created.status, 201);
        assert_eq!(created.data.id, 12);
    }

    #[test]
    fn test_url_joining() {
        let storage = MemoryStore::new();
        let client = client_for("http://localhost:5000/", &storage);
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/donations"), "http://localhost:5000/api/donations");
        assert_eq!(client.url("donations/requests"), "http://localhost:5000/api/donations/requests");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Email already registered"}"#, StatusCode::BAD_REQUEST),
            "Email already registered"
        );
        assert_eq!(
            error_message(r#"{"msg":"Missing Authorization Header"}"#, StatusCode::UNAUTHORIZED),
            "Missing Authorization Header"
        );
        assert_eq!(error_message("", StatusCode::BAD_GATEWAY), "Bad Gateway");
        assert_eq!(error_message(" plain text ", StatusCode::INTERNAL_SERVER_ERROR), "plain text");
    }

    #[test]
    fn test_credential_rejection_statuses() {
        assert!(rejects_credential(StatusCode::UNAUTHORIZED, "", false));
        assert!(rejects_credential(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"msg":"Signature verification failed"}"#,
            true
        ));
        assert!(!rejects_credential(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"msg":"Signature verification failed"}"#,
            false
        ));
        assert!(!rejects_credential(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"Invalid status"}"#,
            true
        ));
        assert!(!rejects_credential(StatusCode::FORBIDDEN, r#"{"msg":"nope"}"#, true));
    }

    #[test]
    fn test_empty_body_decodes_to_default_ack() {
        let ack: Ack = decode("").unwrap();
        assert_eq!(ack, Ack::default());
    }
}
