//! Session identification via a `sid` cookie.
//!
//! The flash channel is keyed per session; this extractor reads the session
//! id off the request, minting a fresh one when the browser has none yet.
//! Handlers attach the cookie to their response so the id sticks.

use axum::extract::FromRequestParts;
use axum::http::header::{HeaderValue, COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use std::convert::Infallible;
use uuid::Uuid;

const SESSION_COOKIE: &str = "sid";

/// The requesting browser's session.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    fresh: bool,
}

impl Session {
    /// The session id, stable across requests from the same browser.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Turn a handler result into a response, setting the session cookie
    /// when this request minted a new id.
    pub fn attach<R: IntoResponse>(&self, response: R) -> Response {
        let mut response = response.into_response();
        if self.fresh {
            let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }

    fn from_cookie_header(header: Option<&HeaderValue>) -> Self {
        let existing = header
            .and_then(|value| value.to_str().ok())
            .and_then(parse_session_cookie);

        match existing {
            Some(id) => Session { id, fresh: false },
            None => Session {
                id: Uuid::new_v4().to_string(),
                fresh: true,
            },
        }
    }
}

fn parse_session_cookie(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Infallible> {
        Ok(Session::from_cookie_header(parts.headers.get(COOKIE)))
    }
}
