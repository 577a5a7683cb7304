use serde::{Deserialize, Serialize};

use crate::{
    Client, ClientResult,
    de::{non_empty_string, number_from_string, one_or_many, optional_number_from_string},
};

/// A name with an optional MusicBrainz ID, as Last.fm nests artists and albums
/// inside recent tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedEntity {
    /// The name.
    #[serde(rename = "#text")]
    pub name: String,
    /// The MusicBrainz ID, if known.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub mbid: Option<String>,
}

/// When a track was scrobbled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrobbleDate {
    /// Seconds since the Unix epoch.
    #[serde(deserialize_with = "number_from_string")]
    pub uts: u64,
    /// A human-readable rendering of the date.
    #[serde(rename = "#text", default)]
    pub text: Option<String>,
}

/// Attributes attached to an individual recent track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentTrackAttr {
    /// `"true"` if the track is currently being played.
    #[serde(default)]
    pub nowplaying: Option<String>,
}

/// A track from a user's listening history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentTrack {
    /// The track title.
    pub name: String,
    /// The track artist.
    pub artist: NamedEntity,
    /// The album the track was played from. Its name is empty if unknown.
    #[serde(default)]
    pub album: Option<NamedEntity>,
    /// The track MusicBrainz ID.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub mbid: Option<String>,
    /// The track page on the service.
    #[serde(default)]
    pub url: Option<String>,
    /// When the track was scrobbled. Absent for the track currently playing.
    #[serde(default)]
    pub date: Option<ScrobbleDate>,
    /// Extra attributes.
    #[serde(rename = "@attr", default)]
    pub attr: Option<RecentTrackAttr>,
}
impl RecentTrack {
    /// Whether this entry is the track currently playing rather than a scrobble.
    pub fn is_now_playing(&self) -> bool {
        self.attr
            .as_ref()
            .and_then(|attr| attr.nowplaying.as_deref())
            .is_some_and(|nowplaying| nowplaying == "true")
    }

    /// The scrobble time in seconds since the Unix epoch.
    pub fn timestamp(&self) -> Option<u64> {
        self.date.as_ref().map(|date| date.uts)
    }

    /// The album name, if the scrobble carries a non-empty one.
    pub fn album_name(&self) -> Option<&str> {
        self.album
            .as_ref()
            .map(|album| album.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Paging information for a list of recent tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentTracksAttr {
    /// The user the tracks belong to.
    pub user: String,
    /// The page number, starting from 1.
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub page: Option<u64>,
    /// The requested page size.
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub per_page: Option<u64>,
    /// The number of pages in the requested range.
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub total_pages: Option<u64>,
    /// The number of scrobbles in the requested range.
    #[serde(default, deserialize_with = "optional_number_from_string")]
    pub total: Option<u64>,
}

/// A page of a user's listening history, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentTracks {
    /// The tracks on this page. May start with the track currently playing.
    #[serde(default, deserialize_with = "one_or_many")]
    pub track: Vec<RecentTrack>,
    /// Paging information.
    #[serde(rename = "@attr", default)]
    pub attr: Option<RecentTracksAttr>,
}

/// A request to the `user.getRecentTracks` method.
#[derive(Debug, Clone, Default)]
pub struct RecentTracksRequest {
    /// The user whose history to fetch.
    pub user: String,
    /// The number of results per page. Last.fm caps this at 200.
    pub limit: Option<u32>,
    /// Only return scrobbles at or after this Unix timestamp.
    pub from: Option<i64>,
    /// Only return scrobbles at or before this Unix timestamp.
    pub to: Option<i64>,
}

/// User-related methods.
impl Client {
    /// Get a page of the tracks a user has scrobbled, most recent first.
    pub async fn get_recent_tracks(
        &self,
        request: &RecentTracksRequest,
    ) -> ClientResult<RecentTracks> {
        let mut parameters = vec![("user", request.user.clone())];
        if let Some(limit) = request.limit {
            parameters.push(("limit", limit.to_string()));
        }
        if let Some(from) = request.from {
            parameters.push(("from", from.to_string()));
        }
        if let Some(to) = request.to {
            parameters.push(("to", to.to_string()));
        }

        #[derive(Deserialize)]
        struct RecentTracksResponse {
            recenttracks: RecentTracks,
        }

        Ok(self
            .request::<RecentTracksResponse>("user.getRecentTracks", &parameters)
            .await?
            .recenttracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct RecentTracksResponse {
        recenttracks: RecentTracks,
    }

    fn parse(json: &str) -> RecentTracks {
        Client::parse_response::<RecentTracksResponse>(json.as_bytes())
            .unwrap()
            .recenttracks
    }

    #[test]
    fn test_recent_tracks_page() {
        let tracks = parse(
            r##"{"recenttracks": {
                "track": [
                    {
                        "artist": {"mbid": "", "#text": "Stereolab"},
                        "album": {"mbid": "", "#text": "Dots and Loops"},
                        "name": "Brakhage",
                        "mbid": "",
                        "url": "https://www.last.fm/music/Stereolab/_/Brakhage",
                        "@attr": {"nowplaying": "true"}
                    },
                    {
                        "artist": {"mbid": "d2a3c3a5", "#text": "Stereolab"},
                        "album": {"mbid": "", "#text": ""},
                        "name": "French Disko",
                        "date": {"uts": "1686787200", "#text": "15 Jun 2023, 00:00"}
                    }
                ],
                "@attr": {"user": "listener", "totalPages": "3", "page": "1", "perPage": "200", "total": "550"}
            }}"##,
        );

        assert_eq!(tracks.track.len(), 2);

        let now_playing = &tracks.track[0];
        assert!(now_playing.is_now_playing());
        assert_eq!(now_playing.timestamp(), None);
        assert_eq!(now_playing.album_name(), Some("Dots and Loops"));

        let scrobble = &tracks.track[1];
        assert!(!scrobble.is_now_playing());
        assert_eq!(scrobble.timestamp(), Some(1686787200));
        assert_eq!(scrobble.album_name(), None);
        assert_eq!(scrobble.artist.mbid.as_deref(), Some("d2a3c3a5"));

        let attr = tracks.attr.unwrap();
        assert_eq!(attr.user, "listener");
        assert_eq!(attr.total, Some(550));
        assert_eq!(attr.total_pages, Some(3));
    }

    #[test]
    fn test_recent_tracks_single_object() {
        let tracks = parse(
            r##"{"recenttracks": {
                "track": {
                    "artist": {"#text": "Broadcast"},
                    "name": "Tears in the Typing Pool",
                    "date": {"uts": 1686787200}
                },
                "@attr": {"user": "listener", "total": "1"}
            }}"##,
        );

        assert_eq!(tracks.track.len(), 1);
        assert_eq!(tracks.track[0].artist.name, "Broadcast");
        assert_eq!(tracks.track[0].album, None);
        assert_eq!(tracks.track[0].timestamp(), Some(1686787200));
    }

    #[test]
    fn test_recent_tracks_empty() {
        let tracks = parse(
            r#"{"recenttracks": {"track": [], "@attr": {"user": "listener", "total": "0"}}}"#,
        );
        assert!(tracks.track.is_empty());
    }
}
