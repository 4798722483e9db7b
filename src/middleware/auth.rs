use axum::{
    Json,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, services::auth_client::AuthUser};

fn bearer_token(req: &Request<axum::body::Body>) -> Option<String> {
    let raw = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}

/// Requires a bearer token verified by the external auth service. In
/// development a failed verification is bypassed (the auth service usually
/// is not running locally) with the user id taken from the request path.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&req) else {
        return unauthorized("No token provided, authorization denied");
    };

    match state.auth.verify_token(&token).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            if state.settings.is_development() {
                tracing::warn!(error = %err, "token verification failed, bypassing in development");
                let user_id = req
                    .uri()
                    .path()
                    .rsplit('/')
                    .next()
                    .filter(|s| !s.is_empty())
                    .unwrap_or("test-user")
                    .to_string();
                req.extensions_mut().insert(AuthUser { user_id });
                return next.run(req).await;
            }

            tracing::warn!(error = %err, "token verification failed");
            unauthorized("Token verification failed")
        }
    }
}
