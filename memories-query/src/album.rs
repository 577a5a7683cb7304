use serde::Serialize;

use crate::lfm;

/// An album, as listed in the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    /// The album artist name
    pub artist: String,
    /// The album name. `None` stands for plays that were not attributed to an album.
    pub title: Option<String>,
    /// The album page on the service, if resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The number of distinct listeners, if resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listeners: Option<u64>,
    /// The total number of scrobbles, if resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playcount: Option<u64>,
    /// The number of scrobbles by the listener, if resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_playcount: Option<u64>,
}
impl Album {
    /// An album known only by its artist and name.
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::untitled(artist)
        }
    }

    /// Stands in for the plays by `artist` that carry no album.
    pub fn untitled(artist: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: None,
            url: None,
            listeners: None,
            playcount: None,
            user_playcount: None,
        }
    }
}
impl From<lfm::AlbumInfo> for Album {
    fn from(album: lfm::AlbumInfo) -> Self {
        Album {
            artist: album.artist,
            title: Some(album.name),
            url: album.url,
            listeners: album.listeners,
            playcount: album.playcount,
            user_playcount: album.userplaycount,
        }
    }
}
impl std::fmt::Display for Album {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} - {title}", self.artist),
            None => write!(f, "{}", self.artist),
        }
    }
}
