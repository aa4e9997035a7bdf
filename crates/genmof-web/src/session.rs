//! Browser session identification via a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "genmof_session";

/// Reads the session id from the jar, issuing a fresh one when the cookie is
/// missing or malformed. The returned jar must be sent back with the response.
pub fn session_id(jar: CookieJar) -> (CookieJar, Uuid) {
    if let Some(id) = jar
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
    {
        return (jar, id);
    }

    let id = Uuid::new_v4();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issues_cookie_when_missing() {
        let (jar, id) = session_id(CookieJar::new());
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.value(), id.to_string());
    }

    #[test]
    fn test_reuses_valid_cookie() {
        let existing = Uuid::new_v4();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, existing.to_string()));
        let (_, id) = session_id(jar);
        assert_eq!(id, existing);
    }

    #[test]
    fn test_replaces_malformed_cookie() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-uuid"));
        let (jar, id) = session_id(jar);
        assert_eq!(jar.get(SESSION_COOKIE).unwrap().value(), id.to_string());
    }
}
