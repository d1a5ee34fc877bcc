use std::env;

pub const DEFAULT_JWT_SECRET: &str = "qwqw";
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86400;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            token_ttl_secs: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        }
    }
}
