use uuid::Uuid;

use crate::config::{SESSION_COOKIE, SESSION_COOKIE_MAX_AGE_SECS};

/// Extract the session id from a raw `Cookie` header, if one is carried.
pub fn session_from_cookies(cookie_header: Option<&str>) -> Option<String> {
    let header = cookie_header?;

    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name.trim() == SESSION_COOKIE && !value.trim().is_empty() {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

/// The session id for this request: the cookie value unmodified when the
/// client presents one, otherwise a freshly minted random identifier.
pub fn resolve_session(cookie_header: Option<&str>) -> String {
    match session_from_cookies(cookie_header) {
        Some(session_id) => session_id,
        None => {
            let session_id = Uuid::new_v4().to_string();
            tracing::debug!("Minted new session {}", session_id);
            session_id
        }
    }
}

/// `Set-Cookie` value for `session_id`. Always issued with the fixed
/// max-age so every response restarts the expiry countdown, whether the
/// session is new or pre-existing.
pub fn session_cookie(session_id: &str) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/",
        SESSION_COOKIE, session_id, SESSION_COOKIE_MAX_AGE_SECS
    )
}
