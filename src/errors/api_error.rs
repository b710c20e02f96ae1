use thiserror::Error;

/// Failure of one logical call against the Sevalla API.
///
/// The variant decides what the retry loop does with it: authentication
/// failures end the call at once, the others are retried until the attempt
/// ceiling is reached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Authentication failed ({status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("API error {status}: {body}")]
    Remote { status: u16, body: String },

    /// No usable response: connection failure or a body that could not be read
    /// or decoded. Carries the underlying message verbatim.
    #[error("{0}")]
    Transport(String),

    #[error("Request failed after {attempts} retries")]
    RetriesExhausted { attempts: usize },

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Invalid client configuration: {0}")]
    Setup(String),
}

impl ApiError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Remote { .. } | ApiError::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { status, .. } | ApiError::Remote { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_envelope_contract() {
        let auth = ApiError::Authentication {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(auth.to_string(), "Authentication failed (401): Unauthorized");

        let remote = ApiError::Remote {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(remote.to_string(), "API error 500: Internal Server Error");

        let exhausted = ApiError::RetriesExhausted { attempts: 3 };
        assert_eq!(exhausted.to_string(), "Request failed after 3 retries");

        let transport = ApiError::Transport("connection reset".to_string());
        assert_eq!(transport.to_string(), "connection reset");
    }

    #[test]
    fn only_remote_and_transport_failures_are_retryable() {
        assert!(ApiError::Remote {
            status: 502,
            body: String::new()
        }
        .is_retryable());
        assert!(ApiError::Transport("reset".to_string()).is_retryable());
        assert!(!ApiError::Authentication {
            status: 403,
            body: String::new()
        }
        .is_retryable());
        assert!(!ApiError::RetriesExhausted { attempts: 3 }.is_retryable());
        assert!(!ApiError::Encode("bad".to_string()).is_retryable());
    }

    #[test]
    fn status_is_exposed_for_http_failures_only() {
        let remote = ApiError::Remote {
            status: 404,
            body: "missing".to_string(),
        };
        assert_eq!(remote.status(), Some(404));
        assert_eq!(ApiError::Transport("x".to_string()).status(), None);
    }
}
