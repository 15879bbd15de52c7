//! Cookie-based session identification.
//!
//! There is no login: a session exists to tie a browser to its background
//! tasks and generated content. The id is an opaque uuid in a cookie,
//! minted on first contact.

use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponseBuilder};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "examprep_sid";

pub struct SessionHandle {
    pub id: String,
    is_new: bool,
}

/// Read the session cookie, or mint a new session id if the request has
/// none. The cookie itself is only written back when it is new.
pub fn ensure_session(req: &HttpRequest) -> SessionHandle {
    match req.cookie(SESSION_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => SessionHandle {
            id: cookie.value().to_string(),
            is_new: false,
        },
        _ => SessionHandle {
            id: Uuid::new_v4().to_string(),
            is_new: true,
        },
    }
}

pub fn attach_session(builder: &mut HttpResponseBuilder, session: &SessionHandle) {
    if session.is_new {
        let cookie = Cookie::build(SESSION_COOKIE, session.id.clone())
            .path("/")
            .http_only(true)
            .finish();
        builder.cookie(cookie);
    }
}
