use serde::{Deserialize, de::DeserializeOwned};

use crate::{Client, ClientError, ClientResult};

/// Making requests to the Last.fm API.
impl Client {
    /// Make a request to the Last.fm API. `T` must contain a field corresponding to
    /// the actual value you want from the method: that is, for `album.getInfo`,
    /// `T` should be `{ album: AlbumInfo }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not valid.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<T> {
        let bytes = self.request_raw(method, parameters).await?;
        Self::parse_response::<T>(&bytes)
    }

    pub(crate) async fn request_raw(
        &self,
        method: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<Vec<u8>> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&[
                ("method", method.to_string()),
                ("api_key", self.api_key.clone()),
                ("format", "json".to_string()),
            ])
            .query(parameters);

        // Error payloads arrive with non-2xx statuses; `parse_response` decodes them.
        Ok(request.send().await?.bytes().await?.into())
    }

    pub(crate) fn parse_response<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;

        if value.get("error").is_some() {
            let error: ResponseError = serde_json::from_value(value)?;
            return Err(ClientError::LastFmError {
                code: error.error,
                message: error.message,
            });
        }

        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
/// An error payload returned in place of a response body.
struct ResponseError {
    /// The error code.
    error: i32,
    /// The error message.
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        value: u32,
    }

    #[test]
    fn test_parse_response_body() {
        let body = Client::parse_response::<Body>(br#"{"value": 3}"#).unwrap();
        assert_eq!(body.value, 3);
    }

    #[test]
    fn test_parse_response_error() {
        let err = Client::parse_response::<Body>(
            br#"{"error": 6, "message": "User not found", "links": []}"#,
        )
        .unwrap_err();
        match err {
            ClientError::LastFmError { code, message } => {
                assert_eq!(code, 6);
                assert_eq!(message.as_deref(), Some("User not found"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_response_garbage() {
        let err = Client::parse_response::<Body>(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, ClientError::DeserializationError(_)));
    }
}
