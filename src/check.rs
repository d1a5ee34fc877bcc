// One-shot encode-then-decode self-check for the token service
use crate::auth::{Claims, JwtService};
use crate::{AppConfig, Result};
use jsonwebtoken::Algorithm;
use tracing::{error, info};

pub const CHECK_SUBJECT: &str = "frontenduser";
pub const CHECK_ROLE: i32 = 0;
pub const CHECK_EMAIL: &str = "frontend@example.com";

pub struct TokenRoundTripCheck {
    jwt_service: JwtService,
    token_ttl_secs: i64,
}

impl TokenRoundTripCheck {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            jwt_service: JwtService::new(config.jwt_secret.clone(), Algorithm::HS256),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    /// Sign a fresh claims payload, decode it back and report the outcome.
    /// Returns Ok(true) when the round trip verifies and Ok(false) when
    /// verification fails; Err only if signing itself fails.
    pub fn run(&self) -> Result<bool> {
        let claims = Claims::new(CHECK_SUBJECT, CHECK_ROLE, CHECK_EMAIL, self.token_ttl_secs);

        let token = self.jwt_service.encode_token(&claims)?;
        info!("Generated token: {}", token);

        match self.jwt_service.decode_token(&token) {
            Ok(decoded) => {
                let payload = serde_json::to_string(&decoded)
                    .unwrap_or_else(|_| format!("{:?}", decoded));
                info!("Decoded payload: {}", payload);

                if decoded == claims {
                    info!("✅ JWT verification SUCCESSFUL");
                    Ok(true)
                } else {
                    error!("❌ JWT verification FAILED: decoded payload differs from the original");
                    Ok(false)
                }
            }
            Err(e) => {
                error!("❌ JWT verification FAILED: {}", e);
                Ok(false)
            }
        }
    }
}
