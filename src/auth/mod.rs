pub mod jwt;

pub use jwt::JwtService;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims carried inside the signed token.
/// `role` follows the backend's convention: 0 = frontend user, 1 = admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub role: i32,
    pub email: String,
}

impl Claims {
    /// Build a payload issued now and expiring `ttl_secs` from now.
    pub fn new(sub: &str, role: i32, email: &str, ttl_secs: i64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: sub.to_string(),
            iat,
            exp: iat + ttl_secs,
            role,
            email: email.to_string(),
        }
    }
}
