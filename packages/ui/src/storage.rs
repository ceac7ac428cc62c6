//! Platform storage and client construction.
//!
//! The session record lives in:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Desktop / native**: one file per key under `<data_dir>/foodshare/` via [`store::FileStore`]

use api::{ApiClient, SessionStore};
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// The API client as used by every view.
pub type PlatformApi = ApiClient<PlatformStore>;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("foodshare")
}

/// Create the platform-appropriate key-value store.
pub fn make_storage() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::FileStore::new(data_dir())
    }
}

/// Resolve the client configuration.
///
/// Native builds read `foodshare.toml` from the data directory when present. A
/// compile-time `FOODSHARE_API_ORIGIN` overrides the backend origin on every
/// platform.
pub fn load_config() -> ClientConfig {
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let config = {
        let path = data_dir().join(ClientConfig::filename());
        match std::fs::read_to_string(&path) {
            Ok(text) => ClientConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                ClientConfig::default()
            }),
            Err(_) => ClientConfig::default(),
        }
    };
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let config = ClientConfig::default();

    match option_env!("FOODSHARE_API_ORIGIN") {
        Some(origin) => config.with_origin(origin),
        None => config,
    }
}

/// Hydrate the session from durable storage and build the client around it.
pub fn make_client() -> PlatformApi {
    let config = load_config();
    let session = SessionStore::hydrate(make_storage(), &config.storage);
    tracing::debug!("API base url {}", config.api.base_url());
    ApiClient::new(&config.api, session)
}
