// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for remote API calls.
/// Used to surface the server's own message when one is available.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS failure,
    /// connection refused, timeout).
    Transport(String),

    /// The server answered with a non-success status. `message` carries
    /// the human-readable `message` field of the error body when the
    /// server provided one.
    Status { code: u16, message: Option<String> },

    /// The response arrived but its body could not be decoded.
    Decode(String),
}

impl ApiError {
    /// Returns the server-provided message, if any.
    ///
    /// Callers fall back to a generic per-operation message when this
    /// is `None`.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// HTTP status code of the response, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
            ApiError::Status {
                code,
                message: Some(msg),
            } => write!(f, "HTTP {}: {}", code, msg),
            ApiError::Status {
                code,
                message: None,
            } => write!(f, "HTTP {}", code),
            ApiError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn status_error_keeps_server_message() {
        let err = ApiError::Status {
            code: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn status_error_without_body_has_no_message() {
        let err = ApiError::Status {
            code: 500,
            message: None,
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(format!("{}", err), "HTTP 500");
    }

    #[test]
    fn transport_error_has_no_server_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.status_code(), None);
        assert!(format!("{}", err).contains("connection refused"));
    }

    #[test]
    fn api_error_display_includes_status_and_message() {
        let err = ApiError::Status {
            code: 409,
            message: Some("Out of stock".to_string()),
        };
        assert_eq!(format!("{}", err), "HTTP 409: Out of stock");
    }
}
