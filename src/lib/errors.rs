use std::fmt;

/// HTTP status the API uses to reject writes pending an out-of-band user
/// step (email verification), distinct from plain failure.
const STATUS_FORBIDDEN: u16 = 403;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// True when the API rejected the call pending a verification step.
    /// Keyed off the status code only, never the response body.
    pub fn is_authorization_denied(&self) -> bool {
        matches!(
            self,
            AppError::Http {
                status: STATUS_FORBIDDEN,
                ..
            }
        )
    }

    /// Message suitable for rendering to the user, without the variant
    /// prefix `Display` adds for diagnostics.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Parse(message)
            | AppError::Serialization(message)
            | AppError::Http { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn authorization_denied_matches_forbidden_only() {
        let denied = AppError::Http {
            status: 403,
            message: "Email not verified.".to_string(),
        };
        let unauthorized = AppError::Http {
            status: 401,
            message: "Session expired.".to_string(),
        };
        let network = AppError::Network("connection reset".to_string());

        assert!(denied.is_authorization_denied());
        assert!(!unauthorized.is_authorization_denied());
        assert!(!network.is_authorization_denied());
    }

    #[test]
    fn user_message_drops_variant_prefix() {
        let err = AppError::Http {
            status: 400,
            message: "Login failed".to_string(),
        };
        assert_eq!(err.user_message(), "Login failed");
        assert_eq!(err.to_string(), "Request failed (400): Login failed");
    }
}
