use crate::{
    Album, Artist, Criteria, GroupKey, HistorySource, PlayedTrack, QueryResult, group_tracks,
};

/// Resolves names from the history into the items listed in the results.
///
/// Implementations may perform network lookups; the listings call them at most
/// once per distinct artist or album.
pub trait Catalog {
    /// The error returned when an item cannot be resolved.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve an artist by name.
    fn artist(&self, name: &str) -> impl Future<Output = Result<Artist, Self::Error>>;

    /// Resolve an album by its artist and name.
    fn album(&self, artist: &str, album: &str) -> impl Future<Output = Result<Album, Self::Error>>;
}

/// The artists played within the window, ranked by listening sessions, ascending.
pub async fn list_artists<S: HistorySource + Catalog>(
    criteria: &Criteria<S>,
) -> QueryResult<Vec<(Artist, u32)>> {
    let catalog = criteria.user();
    group_tracks(
        criteria,
        async |track: &PlayedTrack| catalog.artist(&track.artist).await,
        Some(GroupKey::artist_of),
    )
    .await
}

/// The albums played within the window, ranked by listening sessions, ascending.
///
/// Plays without an album are listed together per artist, without consulting
/// the catalog.
pub async fn list_albums<S: HistorySource + Catalog>(
    criteria: &Criteria<S>,
) -> QueryResult<Vec<(Album, u32)>> {
    let catalog = criteria.user();
    group_tracks(
        criteria,
        async |track: &PlayedTrack| match &track.album {
            Some(album) => catalog.album(&track.artist, album).await,
            None => Ok(Album::untitled(&track.artist)),
        },
        Some(GroupKey::album_of),
    )
    .await
}
