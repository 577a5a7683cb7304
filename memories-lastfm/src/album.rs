use serde::{Deserialize, Serialize};

use crate::{
    Client, ClientResult,
    de::{non_empty_string, optional_number_from_string},
};

/// An album, as returned by `album.getInfo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumInfo {
    /// The album name
    pub name: String,
    /// The album artist name
    pub artist: String,
    /// The album MusicBrainz ID
    #[serde(default, deserialize_with = "non_empty_string")]
    pub mbid: Option<String>,
    /// The album page on the service
    #[serde(default)]
    pub url: Option<String>,
    /// The number of distinct listeners
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub listeners: Option<u64>,
    /// The total number of scrobbles
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub playcount: Option<u64>,
    /// The number of scrobbles by the user passed to the request, if any
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub userplaycount: Option<u64>,
}

/// Album-related methods.
impl Client {
    /// Get the metadata for an album.
    ///
    /// If `username` is given, the result includes that user's play count.
    pub async fn get_album_info(
        &self,
        artist: impl Into<String>,
        album: impl Into<String>,
        autocorrect: bool,
        username: Option<&str>,
    ) -> ClientResult<AlbumInfo> {
        let mut parameters = vec![
            ("artist", artist.into()),
            ("album", album.into()),
            ("autocorrect", u8::from(autocorrect).to_string()),
        ];
        if let Some(username) = username {
            parameters.push(("username", username.to_string()));
        }

        #[derive(Deserialize)]
        struct AlbumInfoResponse {
            album: AlbumInfo,
        }

        Ok(self
            .request::<AlbumInfoResponse>("album.getInfo", &parameters)
            .await?
            .album)
    }
}
