use reqwest::Client;
use serde::Deserialize;

/// Token verification is delegated to the auth service; this client only
/// forwards the bearer token and reads back the verdict.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
    user: Option<AuthUser>,
}

impl AuthClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub async fn verify_token(&self, token: &str) -> Result<AuthUser, String> {
        let url = format!("{}/auth/verify-token", self.base_url);
        let res = self
            .http
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("auth service returned {status} {body}"));
        }

        let verdict = res
            .json::<VerifyResponse>()
            .await
            .map_err(|e| e.to_string())?;

        if !verdict.success {
            return Err("Token is not valid".to_string());
        }
        verdict
            .user
            .ok_or_else(|| "auth response missing user".to_string())
    }
}
