use jsonwebtoken::errors::ErrorKind;
use std::fmt;

// Application-wide error type
#[derive(Debug)]
pub enum AppError {
    SignatureMismatch(String),
    TokenExpired(String),
    MalformedToken(String),
    AlgorithmMismatch(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SignatureMismatch(msg) => write!(f, "Signature mismatch: {}", msg),
            AppError::TokenExpired(msg) => write!(f, "Token expired: {}", msg),
            AppError::MalformedToken(msg) => write!(f, "Malformed token: {}", msg),
            AppError::AlgorithmMismatch(msg) => write!(f, "Algorithm mismatch: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Classify jsonwebtoken failures into the closed verification taxonomy.
// Everything outside the four modeled kinds lands in InternalError.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => AppError::SignatureMismatch(err.to_string()),
            ErrorKind::ExpiredSignature => AppError::TokenExpired(err.to_string()),
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                AppError::AlgorithmMismatch(err.to_string())
            }
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => AppError::MalformedToken(err.to_string()),
            _ => AppError::InternalError(err.to_string()),
        }
    }
}

// Convenient Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;
