//! In-memory collaborators for tests.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};

use crate::{Album, Artist, Catalog, HistorySource, PlayedTrack};

pub(crate) fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

pub(crate) fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// `count` plays by distinct titles, `spacing` seconds apart, the oldest at `spacing`.
pub(crate) fn spaced_plays(count: i64, spacing: i64) -> Vec<PlayedTrack> {
    (0..count)
        .map(|i| PlayedTrack::new("Stereolab", format!("track {i}"), at(spacing * (count - i))))
        .collect()
}

/// Plays with the given artists, one second apart, most recent first.
pub(crate) fn plays_by(artists: &[&str]) -> Vec<PlayedTrack> {
    let count = artists.len() as i64;
    artists
        .iter()
        .enumerate()
        .map(|(i, artist)| {
            let timestamp = at(1000 + count - i as i64);
            PlayedTrack::new(*artist, format!("track {i}"), timestamp)
        })
        .collect()
}

/// A history that serves `plays` (most recent first) with inclusive bounds, and
/// a catalog that resolves anything.
pub(crate) struct FakeHistory {
    pub plays: Vec<PlayedTrack>,
    pub requests: RefCell<Vec<(DateTime<Utc>, DateTime<Utc>, u32)>>,
    pub resolved: RefCell<Vec<String>>,
    fail_on_call: Option<usize>,
    fail_to_resolve: Option<String>,
    calls: Cell<usize>,
}
impl FakeHistory {
    pub fn new(plays: Vec<PlayedTrack>) -> Self {
        Self {
            plays,
            requests: RefCell::new(vec![]),
            resolved: RefCell::new(vec![]),
            fail_on_call: None,
            fail_to_resolve: None,
            calls: Cell::new(0),
        }
    }

    /// Fail the `call`th request, counting from 1.
    pub fn failing_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Fail to resolve anything by `artist`.
    pub fn failing_to_resolve(mut self, artist: &str) -> Self {
        self.fail_to_resolve = Some(artist.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn resolve(&self, description: String, artist: &str) -> std::io::Result<()> {
        if self.fail_to_resolve.as_deref() == Some(artist) {
            return Err(std::io::Error::other(format!("no such artist: {artist}")));
        }
        self.resolved.borrow_mut().push(description);
        Ok(())
    }
}
impl HistorySource for FakeHistory {
    type Error = std::io::Error;

    async fn fetch_page(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: u32,
    ) -> std::io::Result<Vec<PlayedTrack>> {
        self.calls.set(self.calls.get() + 1);
        self.requests.borrow_mut().push((from, to, limit));
        if self.fail_on_call == Some(self.calls.get()) {
            return Err(std::io::Error::other("service unavailable"));
        }

        Ok(self
            .plays
            .iter()
            .filter(|track| from <= track.timestamp && track.timestamp <= to)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
impl Catalog for FakeHistory {
    type Error = std::io::Error;

    async fn artist(&self, name: &str) -> std::io::Result<Artist> {
        self.resolve(name.to_string(), name)?;
        Ok(Artist::named(name))
    }

    async fn album(&self, artist: &str, album: &str) -> std::io::Result<Album> {
        self.resolve(format!("{artist} - {album}"), artist)?;
        Ok(Album::new(artist, album))
    }
}
