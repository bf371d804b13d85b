//! Cookie-backed back-office sessions.
//!
//! A successful sign-in stores a [`SessionIdentity`] under a random token in a
//! TTL cache and hands the token to the browser. Handlers that need a signed-in
//! user take [`CurrentUser`] as an extractor; anonymous requests are sent to
//! the login page.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use model::entities::user::{self, Role};
use moka::future::Cache;
use std::time::Duration;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::schemas::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Who is behind a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

impl From<&user::Model> for SessionIdentity {
    fn from(user: &user::Model) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Session token to identity, entries expire after the configured lifetime.
pub type SessionStore = Cache<String, SessionIdentity>;

pub fn new_session_store(max_sessions: u64, ttl: Duration) -> SessionStore {
    Cache::builder()
        .max_capacity(max_sessions)
        .time_to_live(ttl)
        .build()
}

/// Register a new session and return its token.
pub async fn open_session(store: &SessionStore, identity: SessionIdentity) -> String {
    let token = Uuid::new_v4().simple().to_string();
    store.insert(token.clone(), identity).await;
    token
}

/// Forget a session. Unknown tokens are ignored.
pub async fn close_session(store: &SessionStore, token: &str) {
    store.invalidate(token).await;
}

/// The cookie carrying a session token.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// The signed-in user of the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionIdentity);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) else {
            debug!("No session cookie, redirecting to login");
            return Err(Redirect::to("/login"));
        };

        match state.sessions.get(&token).await {
            Some(identity) => {
                trace!("Session resolved for user {}", identity.username);
                Ok(CurrentUser(identity))
            }
            None => {
                debug!("Unknown or expired session, redirecting to login");
                Err(Redirect::to("/login"))
            }
        }
    }
}
