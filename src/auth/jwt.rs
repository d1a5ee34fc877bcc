// JWT signing and verification backed by the jsonwebtoken crate
use crate::auth::Claims;
use crate::Result;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

pub struct JwtService {
    secret: String,
    algorithm: Algorithm,
}

impl JwtService {
    pub fn new(secret: String, algorithm: Algorithm) -> Self {
        Self { secret, algorithm }
    }

    pub fn encode_token(&self, claims: &Claims) -> Result<String> {
        let token = encode(
            &Header::new(self.algorithm),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Verify the signature, expiry and header algorithm, returning the
    /// decoded claims. Only the configured algorithm is accepted.
    pub fn decode_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        // exp is compared against the wall clock with no slack
        validation.leeway = 0;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    fn sample_claims(ttl_secs: i64) -> Claims {
        Claims::new("frontenduser", 0, "frontend@example.com", ttl_secs)
    }

    #[test]
    fn test_roundtrip_preserves_claims() {
        let service = JwtService::new("qwqw".to_string(), Algorithm::HS256);
        let claims = sample_claims(86400);

        let token = service.encode_token(&claims).expect("encoding should succeed");
        assert_eq!(token.split('.').count(), 3, "token should have three segments");

        let decoded = service.decode_token(&token).expect("decoding should succeed");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let signer = JwtService::new("qwqw".to_string(), Algorithm::HS256);
        let verifier = JwtService::new("wrong".to_string(), Algorithm::HS256);

        let token = signer.encode_token(&sample_claims(86400)).unwrap();
        match verifier.decode_token(&token) {
            Err(AppError::SignatureMismatch(_)) => {}
            other => panic!("expected signature mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtService::new("qwqw".to_string(), Algorithm::HS256);

        // issued two hours ago, expired one hour ago
        let mut claims = sample_claims(86400);
        claims.iat -= 7200;
        claims.exp = claims.iat + 3600;

        let token = service.encode_token(&claims).unwrap();
        match service.decode_token(&token) {
            Err(AppError::TokenExpired(_)) => {}
            other => panic!("expected expired token, got {:?}", other),
        }
    }

    #[test]
    fn test_algorithm_is_pinned() {
        let signer = JwtService::new("qwqw".to_string(), Algorithm::HS384);
        let verifier = JwtService::new("qwqw".to_string(), Algorithm::HS256);

        let token = signer.encode_token(&sample_claims(86400)).unwrap();
        match verifier.decode_token(&token) {
            Err(AppError::AlgorithmMismatch(_)) => {}
            other => panic!("expected algorithm mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = JwtService::new("qwqw".to_string(), Algorithm::HS256);

        match service.decode_token("not-a-token") {
            Err(AppError::MalformedToken(_)) => {}
            other => panic!("expected malformed token, got {:?}", other),
        }
    }
}
