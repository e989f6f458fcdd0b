use std::collections::HashSet;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// Name of the session cookie the admin UI carries.
pub const ADMIN_COOKIE: &str = "granfondo_admin";

/// Accepted admin session tokens. A request is let through when either
/// the admin cookie or a bearer header carries a known token; nothing
/// beyond membership (no role, no expiry) is checked here.
#[derive(Clone)]
pub struct AdminTokens {
    tokens: HashSet<String>,
}

impl AdminTokens {
    pub fn from_comma_separated(tokens_str: &str) -> Self {
        let tokens = tokens_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { tokens }
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

pub async fn require_admin(
    State(tokens): State<AdminTokens>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let presented = session_cookie(req.headers()).or_else(|| bearer_token(req.headers()));

    match presented {
        Some(token) if tokens.is_valid(&token) => Ok(next.run(req).await),
        _ => {
            tracing::warn!("Rejected admin request without a valid session token");
            Err(WebError::Unauthorized)
        }
    }
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == ADMIN_COOKIE).then(|| value.to_string())
    })
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn token_set_ignores_blank_entries() {
        let tokens = AdminTokens::from_comma_separated("alpha, beta,, ");
        assert!(tokens.is_valid("alpha"));
        assert!(tokens.is_valid("beta"));
        assert!(!tokens.is_valid(""));
        assert!(!tokens.is_valid("gamma"));
    }

    #[test]
    fn cookie_is_extracted_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; granfondo_admin=s3cret; lang=tr"),
        );
        assert_eq!(session_cookie(&headers), Some("s3cret".to_string()));
    }

    #[test]
    fn bearer_header_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer s3cret"),
        );
        assert_eq!(bearer_token(&headers), Some("s3cret".to_string()));
        assert_eq!(session_cookie(&headers), None);
    }
}
