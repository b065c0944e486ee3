use thiserror::Error;

/// Classified failure of a remote API call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("rate limited")]
    RateLimited,

    #[error("session invalid: {0}")]
    SessionInvalid(String),

    #[error("transient failure: {0}")]
    Transient(String),

    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map an error code from the API's `{"error": {...}}` envelope
    pub fn from_code(code: i64, message: String) -> Self {
        match code {
            3 => ApiError::RateLimited,
            6 | 8 => ApiError::SessionInvalid(message),
            4 | 7 => ApiError::Transient(message),
            _ => ApiError::Api { code, message },
        }
    }

    /// Map a non-success HTTP status without a recognizable error body
    pub fn from_status(status: u16) -> Self {
        let message = format!("HTTP {status}");
        match status {
            429 => ApiError::RateLimited,
            401 | 403 => ApiError::SessionInvalid(message),
            500..=599 => ApiError::Transient(message),
            _ => ApiError::Api { code: i64::from(status), message },
        }
    }

    /// Worth retrying on the next poll without operator action
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::RateLimited | ApiError::Transient(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16())
        } else {
            ApiError::Transient(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ApiError::from_code(3, String::new()), ApiError::RateLimited);
        assert!(matches!(ApiError::from_code(6, "x".into()), ApiError::SessionInvalid(_)));
        assert!(matches!(ApiError::from_code(8, "x".into()), ApiError::SessionInvalid(_)));
        assert!(matches!(ApiError::from_code(4, "x".into()), ApiError::Transient(_)));
        assert!(matches!(ApiError::from_code(7, "x".into()), ApiError::Transient(_)));
        assert_eq!(
            ApiError::from_code(1, "Resource not found".into()),
            ApiError::Api { code: 1, message: "Resource not found".into() }
        );
    }

    #[test]
    fn test_statuses() {
        assert_eq!(ApiError::from_status(429), ApiError::RateLimited);
        assert!(matches!(ApiError::from_status(401), ApiError::SessionInvalid(_)));
        assert!(matches!(ApiError::from_status(403), ApiError::SessionInvalid(_)));
        assert!(matches!(ApiError::from_status(503), ApiError::Transient(_)));
        assert!(matches!(ApiError::from_status(404), ApiError::Api { code: 404, .. }));
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::RateLimited.is_retryable());
        assert!(ApiError::Transient("timeout".into()).is_retryable());
        assert!(!ApiError::SessionInvalid("expired".into()).is_retryable());
        assert!(!ApiError::Decode("eof".into()).is_retryable());
    }
}
