use serde::{Deserialize, Serialize};

use crate::{
    Client, ClientResult,
    de::{non_empty_string, optional_number_from_string},
};

/// Listening statistics for an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistStats {
    /// The number of distinct listeners.
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub listeners: Option<u64>,
    /// The total number of scrobbles.
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub playcount: Option<u64>,
    /// The number of scrobbles by the user passed to the request, if any.
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub userplaycount: Option<u64>,
}

/// An artist, as returned by `artist.getInfo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistInfo {
    /// The name of the artist, corrected if autocorrection was requested.
    pub name: String,
    /// The artist MusicBrainz ID.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub mbid: Option<String>,
    /// The artist page on the service.
    #[serde(default)]
    pub url: Option<String>,
    /// Listening statistics.
    #[serde(default)]
    pub stats: ArtistStats,
}

/// Artist-related methods.
impl Client {
    /// Get the metadata for an artist.
    ///
    /// If `username` is given, the statistics include that user's play count.
    pub async fn get_artist_info(
        &self,
        artist: impl Into<String>,
        autocorrect: bool,
        username: Option<&str>,
    ) -> ClientResult<ArtistInfo> {
        let mut parameters = vec![
            ("artist", artist.into()),
            ("autocorrect", u8::from(autocorrect).to_string()),
        ];
        if let Some(username) = username {
            parameters.push(("username", username.to_string()));
        }

        #[derive(Deserialize)]
        struct ArtistInfoResponse {
            artist: ArtistInfo,
        }

        Ok(self
            .request::<ArtistInfoResponse>("artist.getInfo", &parameters)
            .await?
            .artist)
    }
}
