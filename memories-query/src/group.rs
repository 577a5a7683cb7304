use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::{
    Album, Artist, BoxError, Criteria, HistorySource, PlayedTrack, PlayedTracks, QueryError,
    QueryResult,
};

/// What plays are grouped by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// All plays by an artist.
    Artist(String),
    /// All plays from an album. Plays without an album are grouped per artist.
    Album {
        /// The album artist.
        artist: String,
        /// The album name.
        album: Option<String>,
    },
}
impl GroupKey {
    /// Group by the artist of the play.
    pub fn artist_of(track: &PlayedTrack) -> Self {
        GroupKey::Artist(track.artist.clone())
    }

    /// Group by the album of the play.
    pub fn album_of(track: &PlayedTrack) -> Self {
        GroupKey::Album {
            artist: track.artist.clone(),
            album: track.album.clone(),
        }
    }
}
impl From<&Artist> for GroupKey {
    fn from(artist: &Artist) -> Self {
        GroupKey::Artist(artist.name.clone())
    }
}
impl From<&Album> for GroupKey {
    fn from(album: &Album) -> Self {
        GroupKey::Album {
            artist: album.artist.clone(),
            album: album.title.clone(),
        }
    }
}

/// Counts listening sessions per group.
///
/// A session is a maximal run of consecutive plays with the same key, so
/// `[A, A, B, A]` is two sessions of `A` and one of `B`. Each group also holds
/// the item that represents it, stored when the key is first seen and never
/// replaced.
#[derive(Debug, Clone)]
pub struct SessionTally<K, T> {
    index: HashMap<K, usize>,
    /// In order of first sight.
    groups: Vec<(T, u32)>,
    prev_key: Option<K>,
}
impl<K, T> Default for SessionTally<K, T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: vec![],
            prev_key: None,
        }
    }
}
impl<K: Hash + Eq + Clone, T> SessionTally<K, T> {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a group exists for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Record a play of an existing group, starting a new session if the
    /// previous play had a different key.
    ///
    /// Returns `false`, recording nothing, if there is no group for `key` yet.
    pub fn observe(&mut self, key: &K) -> bool {
        let Some(&index) = self.index.get(key) else {
            return false;
        };
        if self.prev_key.as_ref() != Some(key) {
            self.groups[index].1 += 1;
        }
        self.prev_key = Some(key.clone());
        true
    }

    /// Record the first play of a group, represented by `item`.
    ///
    /// If the group already exists, this is the same as [`Self::observe`] and
    /// `item` is dropped.
    pub fn insert(&mut self, key: K, item: T) {
        if self.observe(&key) {
            return;
        }
        self.index.insert(key.clone(), self.groups.len());
        self.groups.push((item, 1));
        self.prev_key = Some(key);
    }

    /// The number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no plays have been recorded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The groups in ascending order of session count. Groups with the same
    /// count stay in the order they were first seen.
    pub fn into_ranked(self) -> Vec<(T, u32)> {
        let mut groups = self.groups;
        groups.sort_by_key(|(_, sessions)| *sessions);
        groups
    }
}

/// Groups the plays within the criteria's window and ranks the groups by
/// session count, ascending.
///
/// `populater` produces the item representing a group. With a `grouper`, it is
/// called once per group, for the first play seen. Without one, it is called for
/// every play and its result doubles as the key.
pub async fn group_tracks<S, T, E, K, P, G>(
    criteria: &Criteria<S>,
    populater: P,
    grouper: Option<G>,
) -> QueryResult<Vec<(T, u32)>>
where
    S: HistorySource,
    P: AsyncFnMut(&PlayedTrack) -> Result<T, E>,
    E: Into<BoxError>,
    G: Fn(&PlayedTrack) -> K,
    K: Hash + Eq + Clone + Debug + for<'a> From<&'a T>,
{
    tracing::info!(
        from = %criteria.timestamp_from(),
        to = %criteria.timestamp_to(),
        "grouping played tracks"
    );
    group_played_tracks(criteria.played_tracks(), populater, grouper).await
}

/// As [`group_tracks`], for an already constructed pager.
pub async fn group_played_tracks<S, T, E, K, P, G>(
    mut tracks: PlayedTracks<'_, S>,
    mut populater: P,
    grouper: Option<G>,
) -> QueryResult<Vec<(T, u32)>>
where
    S: HistorySource,
    P: AsyncFnMut(&PlayedTrack) -> Result<T, E>,
    E: Into<BoxError>,
    G: Fn(&PlayedTrack) -> K,
    K: Hash + Eq + Clone + Debug + for<'a> From<&'a T>,
{
    let mut tally = SessionTally::new();
    let mut plays = 0usize;

    while let Some(page) = tracks.next_page().await? {
        for track in &page {
            plays += 1;
            match &grouper {
                Some(grouper) => {
                    let key = grouper(track);
                    if tally.observe(&key) {
                        continue;
                    }
                    tracing::debug!(?key, "resolving new group");
                    let item = populater(track).await.map_err(|e| QueryError::ResolutionFailure {
                        key: format!("{key:?}"),
                        source: e.into(),
                    })?;
                    tally.insert(key, item);
                }
                None => {
                    let item = populater(track).await.map_err(|e| QueryError::ResolutionFailure {
                        key: format!("{} - {}", track.artist, track.title),
                        source: e.into(),
                    })?;
                    let key = K::from(&item);
                    tally.insert(key, item);
                }
            }
        }
    }

    tracing::info!(
        plays,
        groups = tally.len(),
        pages = tracks.pages_fetched(),
        "grouped played tracks"
    );
    Ok(tally.into_ranked())
}
