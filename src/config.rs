use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub redis_url: String,
    pub host: String,
    pub port: u16,

    pub auth_service_url: String,
    pub app_env: String,
}

impl Settings {
    /// Token verification failures are bypassed outside production so the
    /// service can run without a live auth service.
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let mongodb_uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let mongodb_db = env::var("MONGODB_DB")
        .unwrap_or_else(|_| "delivery".to_string());

    let redis_url = env::var("REDIS_URL")
        .unwrap_or_else(|_| "redis://localhost:6379".to_string());

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3004);

    let auth_service_url = env::var("AUTH_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:3001".to_string());

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    Settings {
        mongodb_uri,
        mongodb_db,
        redis_url,
        host,
        port,
        auth_service_url,
        app_env,
    }
}
