use std::fmt;

/// Categorization of client-side request failures.
///
/// The three kinds matter to the rendering layer in different ways: a
/// `Status` failure carries a code worth showing, `Network` suggests a retry,
/// and `Decode` means the backend contract drifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Transport-level failure — DNS, connection, timeout.
    Network,
    /// The backend answered with a non-success status code.
    Status,
    /// The response body could not be decoded into the expected shape.
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "Network"),
            ApiErrorKind::Status => write!(f, "Status"),
            ApiErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured error returned by every [`crate::StoreApi`] operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// HTTP status code when the backend answered at all.
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message: message.into(),
        }
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            status: Some(code),
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status: None,
            message: message.into(),
        }
    }

    /// Short text suitable for an inline error card.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Network => "Could not reach the server. Please try again.".to_string(),
            ApiErrorKind::Status => match self.status {
                Some(404) => "Not found.".to_string(),
                Some(code) => format!("The server rejected the request ({code})."),
                None => "The server rejected the request.".to_string(),
            },
            ApiErrorKind::Decode => "Received an unexpected response from the server.".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} ({code}): {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::status(status.as_u16(), err.to_string())
        } else {
            ApiError::network(err.to_string())
        }
    }
}
