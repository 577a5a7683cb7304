#[derive(Debug)]
/// An error that can occur when interacting with the client.
pub enum ClientError {
    /// An error that occurred when making a request.
    ReqwestError(reqwest::Error),
    /// An error that occurred when deserializing a response.
    DeserializationError(serde_json::Error),
    /// The server returned an error.
    LastFmError {
        /// The error code.
        code: i32,
        /// The error message.
        message: Option<String>,
    },
}
impl ClientError {
    /// The error code Last.fm uses when the requested artist, album or user
    /// does not exist.
    pub const INVALID_PARAMETERS: i32 = 6;

    /// Whether this is the server reporting that the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClientError::LastFmError {
                code: Self::INVALID_PARAMETERS,
                ..
            }
        )
    }
}
impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ReqwestError(e) => write!(f, "Reqwest error: {e}"),
            ClientError::DeserializationError(e) => write!(f, "Deserialization error: {e}"),
            ClientError::LastFmError { code, message } => {
                write!(f, "Last.fm error: {code}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
        }
    }
}
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::ReqwestError(e) => Some(e),
            ClientError::DeserializationError(e) => Some(e),
            ClientError::LastFmError { .. } => None,
        }
    }
}
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::ReqwestError(e)
    }
}
impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::DeserializationError(e)
    }
}
/// A result type for the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// A client for the Last.fm API.
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) client: reqwest::Client,
}
impl Client {
    /// The root of the Last.fm API.
    pub const LAST_FM_URL: &str = "https://ws.audioscrobbler.com/2.0/";
    /// The root of the Libre.fm API, which mirrors Last.fm's.
    pub const LIBRE_FM_URL: &str = "https://libre.fm/2.0/";

    /// Create a new client.
    ///
    /// `client_id` is sent as the user agent; Last.fm asks that API consumers identify themselves.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client_id: impl Into<String>,
    ) -> ClientResult<Self> {
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::builder()
                .user_agent(client_id.into())
                .build()?,
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let client = Client::new(Client::LIBRE_FM_URL, "key", "memories-test").unwrap();
        assert_eq!(client.base_url(), "https://libre.fm/2.0/");
    }

    #[test]
    fn test_not_found_detection() {
        let not_found = ClientError::LastFmError {
            code: 6,
            message: Some("Album not found".to_string()),
        };
        assert!(not_found.is_not_found());

        let rate_limited = ClientError::LastFmError {
            code: 29,
            message: None,
        };
        assert!(!rate_limited.is_not_found());
        assert_eq!(rate_limited.to_string(), "Last.fm error: 29");
        assert_eq!(not_found.to_string(), "Last.fm error: 6: Album not found");
    }
}
