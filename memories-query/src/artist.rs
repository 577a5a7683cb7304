use serde::Serialize;

use crate::lfm;

/// An artist, as listed in the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    /// The artist name
    pub name: String,
    /// The artist page on the service, if resolved
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
impl Artist {
    /// An artist known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            listeners: None,
            playcount: None,
            user_playcount: None,
        }
    }
}
impl From<lfm::ArtistInfo> for Artist {
    fn from(artist: lfm::ArtistInfo) -> Self {
        Artist {
            name: artist.name,
            url: artist.url,
            listeners: artist.stats.listeners,
            playcount: artist.stats.playcount,
            user_playcount: artist.stats.userplaycount,
        }
    }
}
impl std::fmt::Display for Artist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
