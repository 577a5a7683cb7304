use chrono::{DateTime, Utc};

use crate::{Album, Artist, Catalog, HistorySource, PlayedTrack, lfm};

/// A Last.fm (or Libre.fm) listener, as a history source and catalog.
///
/// Unless resolution is enabled, the catalog builds items from the names in
/// the history without making any requests.
pub struct LastFmUser<'a> {
    client: &'a lfm::Client,
    username: String,
    resolve: bool,
}
impl<'a> LastFmUser<'a> {
    /// The listener `username` on the service `client` talks to.
    pub fn new(client: &'a lfm::Client, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
            resolve: false,
        }
    }

    /// Look up artists and albums on the service when listing them.
    pub fn resolving(mut self, resolve: bool) -> Self {
        self.resolve = resolve;
        self
    }

    /// The listener's username.
    pub fn username(&self) -> &str {
        &self.username
    }
}
impl HistorySource for LastFmUser<'_> {
    type Error = lfm::ClientError;

    async fn fetch_page(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: u32,
    ) -> lfm::ClientResult<Vec<PlayedTrack>> {
        let tracks = self
            .client
            .get_recent_tracks(&lfm::RecentTracksRequest {
                user: self.username.clone(),
                limit: Some(limit),
                from: Some(from.timestamp()),
                to: Some(to.timestamp()),
            })
            .await?;

        // The track currently playing is sent on top of `limit` scrobbles.
        Ok(tracks
            .track
            .into_iter()
            .filter_map(PlayedTrack::from_scrobble)
            .collect())
    }
}
impl Catalog for LastFmUser<'_> {
    type Error = lfm::ClientError;

    async fn artist(&self, name: &str) -> lfm::ClientResult<Artist> {
        if !self.resolve {
            return Ok(Artist::named(name));
        }

        tracing::debug!(artist = name, "looking up artist");
        match self
            .client
            .get_artist_info(name, true, Some(&self.username))
            .await
        {
            Ok(info) => Ok(info.into()),
            Err(e) if e.is_not_found() => {
                tracing::debug!(artist = name, "artist not found, listing by name");
                Ok(Artist::named(name))
            }
            Err(e) => Err(e),
        }
    }

    async fn album(&self, artist: &str, album: &str) -> lfm::ClientResult<Album> {
        if !self.resolve {
            return Ok(Album::new(artist, album));
        }

        tracing::debug!(artist, album, "looking up album");
        match self
            .client
            .get_album_info(artist, album, true, Some(&self.username))
            .await
        {
            Ok(info) => Ok(info.into()),
            Err(e) if e.is_not_found() => {
                tracing::debug!(artist, album, "album not found, listing by name");
                Ok(Album::new(artist, album))
            }
            Err(e) => Err(e),
        }
    }
}
