use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use secrecy::{ExposeSecret, SecretString};

use crate::adapter::handler::error::AppError;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Path prefixes reachable without a key. Matched on whole segments.
const PUBLIC_PREFIXES: &[&str] = &["/swagger", "/index.html", "/healthz", "/readyz"];

#[derive(Clone)]
pub struct ApiKeyState {
    /// `None` when no key is configured; every guarded request then fails with 500.
    pub api_key: Option<Arc<SecretString>>,
}

impl ApiKeyState {
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            api_key: api_key
                .filter(|k| !k.expose_secret().is_empty())
                .map(Arc::new),
        }
    }
}

pub async fn api_key_middleware(
    State(state): State<ApiKeyState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();
    if is_public_path(path) {
        return Ok(next.run(req).await);
    }

    let Some(provided) = req.headers().get(API_KEY_HEADER) else {
        tracing::warn!(path = %path, "api key missing");
        return Err(AppError::unauthorized(
            "API Key is missing. Please provide X-API-Key header.",
        ));
    };

    let Some(expected) = state.api_key.as_ref() else {
        tracing::error!("api key is not configured");
        return Err(AppError::internal("Server configuration error."));
    };

    if provided.as_bytes() != expected.expose_secret().as_bytes() {
        tracing::warn!(path = %path, "invalid api key");
        return Err(AppError::unauthorized("Invalid API Key."));
    }

    Ok(next.run(req).await)
}

fn is_public_path(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    PUBLIC_PREFIXES.iter().any(|prefix| {
        path.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            && matches!(path.as_bytes().get(prefix.len()), None | Some(b'/'))
    })
}
