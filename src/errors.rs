/// Structured error handling for TokenTrack
///
/// Two layers: `apis::types::ApiError` covers a single HTTP exchange, and
/// `TrackerError` here covers a whole lookup flow. Every failure is caught
/// at the flow boundary (wallet lookup / token lookup) and converted into a
/// single user-visible message; nothing is retried and nothing panics.
use crate::apis::types::ApiError;

// =============================================================================
// FLOW-LEVEL ERROR TYPE
// =============================================================================

#[derive(Debug, Clone)]
pub enum TrackerError {
    /// Input failed the lexical address check; no network call was made
    InvalidInput { message: String },

    /// The HTTP exchange itself failed (network error, timeout, non-2xx,
    /// unparseable body)
    Transport(ApiError),

    /// The token-info endpoint reported no such token
    TokenNotFound { address: String },

    /// HTTP succeeded but the API's status envelope signaled failure
    Api { message: String },
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::InvalidInput { message } => write!(f, "{}", message),
            TrackerError::Transport(e) => write!(f, "Fetch failed: {}", e),
            TrackerError::TokenNotFound { address } => {
                write!(f, "Token not found or invalid contract address: {}", address)
            }
            TrackerError::Api { message } => write!(f, "Explorer API error: {}", message),
        }
    }
}

impl std::error::Error for TrackerError {}

// =============================================================================
// CONVERSIONS AND BUILDERS
// =============================================================================

impl From<ApiError> for TrackerError {
    fn from(err: ApiError) -> Self {
        match err {
            // Envelope-level failures keep their domain message
            ApiError::Api(message) => TrackerError::Api { message },
            // Everything else is a transport problem
            other => TrackerError::Transport(other),
        }
    }
}

impl TrackerError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        TrackerError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a token-not-found error
    pub fn token_not_found(address: impl Into<String>) -> Self {
        TrackerError::TokenNotFound {
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_api_error_keeps_message() {
        let err: TrackerError = ApiError::Api("Max rate limit reached".to_string()).into();
        match err {
            TrackerError::Api { message } => assert_eq!(message, "Max rate limit reached"),
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_network_error_maps_to_transport() {
        let err: TrackerError = ApiError::Network("connection refused".to_string()).into();
        assert!(matches!(err, TrackerError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
