use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use model::entities::user;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;

use super::pages::login_page;
use crate::helpers::passwords::verify_password;
use crate::schemas::AppState;
use crate::session::{close_session, open_session, session_cookie, SessionIdentity, SESSION_COOKIE};

/// Sign-in form fields
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Render the sign-in form
#[instrument]
pub async fn login_form() -> Html<String> {
    login_page()
}

/// Check staff credentials and open a session
///
/// Unknown users and wrong passwords get the same response: the form again.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Signed in, session cookie set, redirect to /dashboard"),
        (status = 200, description = "Credentials rejected, sign-in form rendered again")
    )
)]
#[instrument(skip(state, jar))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    trace!("Entering login function");

    let found = user::Entity::find()
        .filter(user::Column::Username.eq(form.username.as_str()))
        .one(&state.db)
        .await;

    let user = match found {
        Ok(Some(user)) if verify_password(&form.password, &user.password_hash) => user,
        Ok(_) => {
            warn!("Failed sign-in attempt for '{}'", form.username);
            return login_page().into_response();
        }
        Err(db_error) => {
            error!("Failed to look up user '{}': {}", form.username, db_error);
            return login_page().into_response();
        }
    };

    let token = open_session(&state.sessions, SessionIdentity::from(&user)).await;
    info!("User '{}' signed in with role {:?}", user.username, user.role);

    (jar.add(session_cookie(token)), Redirect::to("/dashboard")).into_response()
}

/// Drop the current session, if any, and go back to the landing page
#[instrument(skip(state, jar))]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) {
        close_session(&state.sessions, &token).await;
        debug!("Session closed");
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/"))
}
