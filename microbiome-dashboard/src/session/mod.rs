use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use moka::sync::Cache;
use uuid::Uuid;

use crate::types::UploadRecord;

/// Per-browser-session storage of upload metadata.
pub trait SessionStore: Send + Sync {
    fn get(&self, session_id: &str) -> Option<UploadRecord>;
    fn put(&self, session_id: &str, record: UploadRecord);
}

/// In-process store; sessions expire after `ttl` without access and are lost on restart.
pub struct MemorySessionStore {
    cache: Cache<String, UploadRecord>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(ttl)
            .build();
        Self { cache }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> Option<UploadRecord> {
        self.cache.get(session_id)
    }

    fn put(&self, session_id: &str, record: UploadRecord) {
        self.cache.insert(session_id.to_string(), record);
    }
}

/// Returns the session id carried by the request, minting a new one (and
/// adding its cookie to the jar) when there is none.
pub fn ensure_session(jar: CookieJar, cookie_name: &str) -> (CookieJar, String) {
    if let Some(existing) = session_id(&jar, cookie_name) {
        return (jar, existing);
    }

    let session_id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((cookie_name.to_string(), session_id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), session_id)
}

pub fn session_id(jar: &CookieJar, cookie_name: &str) -> Option<String> {
    jar.get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
