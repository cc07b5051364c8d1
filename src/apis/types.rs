// ============================================================================
// API ERROR TYPES
// ============================================================================

/// Errors from a single HTTP exchange with an upstream API
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Connection-level failure (DNS, refused, reset, TLS)
    Network(String),
    /// The server answered with a non-2xx status
    HttpStatus { status: u16, body: String },
    /// 2xx response whose body could not be parsed
    InvalidResponse(String),
    /// 2xx response whose status envelope signals a logical failure
    Api(String),
    /// The request exceeded the client timeout
    Timeout,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::HttpStatus { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {}", status)
                } else {
                    write!(f, "HTTP {}: {}", status, body)
                }
            }
            ApiError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Api(msg) => write!(f, "API error: {}", msg),
            ApiError::Timeout => write!(f, "Request timeout"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> String {
        err.to_string()
    }
}
