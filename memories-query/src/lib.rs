//! Finds what a listener was playing around a point in time, by walking their
//! scrobble history and ranking artists or albums by how many separate
//! listening sessions they got.
//!
//! Separated out from the command-line tool to allow for use in other utilities.
#![deny(missing_docs)]

pub use memories_lastfm as lfm;

mod error;
pub use error::{BoxError, QueryError, QueryResult};

mod criteria;
pub use criteria::Criteria;

mod track;
pub use track::PlayedTrack;

mod history;
pub use history::{DEFAULT_PAGE_SIZE, HistorySource, PlayedTracks};

mod group;
pub use group::{GroupKey, SessionTally, group_played_tracks, group_tracks};

mod artist;
pub use artist::Artist;

mod album;
pub use album::Album;

mod catalog;
pub use catalog::{Catalog, list_albums, list_artists};

mod lastfm;
pub use lastfm::LastFmUser;

#[cfg(test)]
mod testing;
