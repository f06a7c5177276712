//! Error types returned by the WS2 client.

/// Alias for results returning [`Ws2Error`].
pub type Result<T> = std::result::Result<T, Ws2Error>;

/// Top-level error type for client construction, configuration and searches.
#[derive(Debug, thiserror::Error)]
pub enum Ws2Error {
    #[error("invalid root address '{address}': {reason}")]
    InvalidRootAddress { address: String, reason: String },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} responded with HTTP {status}: {message}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        message: String,
    },

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error("search endpoint {0} is not implemented")]
    NotImplemented(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Failures while turning a WS2 XML payload into typed values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed XML: {0}")]
    Syntax(String),

    #[error("document ended inside <{0}>")]
    Truncated(String),

    #[error("document has no root element")]
    Empty,

    #[error("missing <{0}> element")]
    MissingElement(String),

    #[error("<{element}> is missing attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("invalid number '{value}' in {field}")]
    InvalidNumber { field: String, value: String },
}

impl Ws2Error {
    /// True for errors raised before any request was sent.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::InvalidRootAddress { .. } | Self::NotImplemented(_) | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, Ws2Error};

    #[test]
    fn test_decode_error_message_names_endpoint() {
        let error = Ws2Error::Decode {
            endpoint: "/artist",
            source: DecodeError::Truncated("artist-list".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "failed to decode /artist response: document ended inside <artist-list>"
        );
    }

    #[test]
    fn test_client_side_classification() {
        assert!(Ws2Error::NotImplemented("/work").is_client_side());
        assert!(!Ws2Error::Transport {
            url: "http://localhost/artist".to_string(),
            message: "connection refused".to_string(),
        }
        .is_client_side());
    }
}
