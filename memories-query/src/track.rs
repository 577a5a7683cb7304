use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lfm;

/// A single scrobble: one play of a track at a point in time.
///
/// Two plays are the same event if all of their fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayedTrack {
    /// The track artist
    pub artist: String,
    /// The album the track was played from, if known
    pub album: Option<String>,
    /// The track title
    pub title: String,
    /// When the track was played, to the second
    pub timestamp: DateTime<Utc>,
}
impl PlayedTrack {
    /// Create a play without album information.
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            artist: artist.into(),
            album: None,
            title: title.into(),
            timestamp,
        }
    }

    /// Attach the album the track was played from.
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Convert a scrobble from the Last.fm API.
    ///
    /// Returns `None` for the track currently being played, as it has not been
    /// scrobbled yet.
    pub fn from_scrobble(track: lfm::RecentTrack) -> Option<Self> {
        if track.is_now_playing() {
            return None;
        }
        let timestamp = DateTime::from_timestamp(i64::try_from(track.timestamp()?).ok()?, 0)?;
        let album = track.album_name().map(str::to_string);

        Some(Self {
            artist: track.artist.name,
            album,
            title: track.name,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrobble(album: Option<&str>, date: Option<u64>, now_playing: bool) -> lfm::RecentTrack {
        lfm::RecentTrack {
            name: "Cherry-Coloured Funk".to_string(),
            artist: lfm::NamedEntity {
                name: "Cocteau Twins".to_string(),
                mbid: None,
            },
            album: album.map(|name| lfm::NamedEntity {
                name: name.to_string(),
                mbid: None,
            }),
            mbid: None,
            url: None,
            date: date.map(|uts| lfm::ScrobbleDate { uts, text: None }),
            attr: now_playing.then(|| lfm::RecentTrackAttr {
                nowplaying: Some("true".to_string()),
            }),
        }
    }

    #[test]
    fn test_from_scrobble() {
        let entry = scrobble(Some("Heaven or Las Vegas"), Some(1686787200), false);
        let played = PlayedTrack::from_scrobble(entry).unwrap();
        assert_eq!(
            played,
            PlayedTrack::new(
                "Cocteau Twins",
                "Cherry-Coloured Funk",
                "2023-06-15T00:00:00Z".parse().unwrap()
            )
            .with_album("Heaven or Las Vegas")
        );
    }

    #[test]
    fn test_from_scrobble_empty_album() {
        let entry = scrobble(Some(""), Some(1686787200), false);
        let played = PlayedTrack::from_scrobble(entry).unwrap();
        assert_eq!(played.album, None);
    }

    #[test]
    fn test_from_scrobble_skips_now_playing() {
        let now_playing = scrobble(None, None, true);
        assert_eq!(PlayedTrack::from_scrobble(now_playing), None);
        let undated = scrobble(None, None, false);
        assert_eq!(PlayedTrack::from_scrobble(undated), None);
    }
}
