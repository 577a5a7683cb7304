use chrono::{DateTime, TimeDelta, Timelike as _, Utc};

use crate::{PlayedTrack, QueryError, QueryResult};

/// The number of tracks requested per page unless configured otherwise.
/// This is the largest page Last.fm serves.
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// A listener's scrobble history.
pub trait HistorySource {
    /// The error returned when a page cannot be fetched.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch at most `limit` plays with timestamps in `[from, to]`, most recent first.
    fn fetch_page(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<PlayedTrack>, Self::Error>>;
}

/// Pages through the plays in a window, most recent first.
///
/// The source offers no cursor, so each page is requested with an upper bound
/// equal to the timestamp of the oldest play in the previous page. The bound is
/// inclusive: plays sitting exactly on it are returned again by the next request,
/// and are dropped once. Fetching stops after the first page shorter than the
/// page size.
pub struct PlayedTracks<'a, S> {
    source: &'a S,
    from: DateTime<Utc>,
    upper_bound: DateTime<Utc>,
    page_size: u32,
    /// Plays already yielded whose timestamp equals `upper_bound`.
    at_upper_bound: Vec<PlayedTrack>,
    exhausted: bool,
    pages_fetched: usize,
}
impl<'a, S: HistorySource> PlayedTracks<'a, S> {
    /// Page through the plays in `[from, to]`, widened to whole seconds.
    pub fn new(source: &'a S, from: DateTime<Utc>, to: DateTime<Utc>, page_size: u32) -> Self {
        Self {
            source,
            from: floor_to_second(from),
            upper_bound: ceil_to_second(to),
            page_size: page_size.max(1),
            at_upper_bound: vec![],
            exhausted: false,
            pages_fetched: 0,
        }
    }

    /// The upper bound the next request will use.
    pub fn upper_bound(&self) -> DateTime<Utc> {
        self.upper_bound
    }

    /// The number of requests made so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Whether every play in the window has been yielded.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetch the next page of plays. Returns `None` once the window is exhausted.
    ///
    /// A returned page can be empty if it consisted only of plays that were
    /// already yielded.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::SourceUnavailable`] if the source fails. The pager is
    /// left as it was, so the call can be retried.
    pub async fn next_page(&mut self) -> QueryResult<Option<Vec<PlayedTrack>>> {
        if self.exhausted {
            return Ok(None);
        }

        let page = self
            .source
            .fetch_page(self.from, self.upper_bound, self.page_size)
            .await
            .map_err(|e| QueryError::SourceUnavailable {
                from: self.from,
                to: self.upper_bound,
                source: Box::new(e),
            })?;
        self.pages_fetched += 1;
        tracing::debug!(
            page = self.pages_fetched,
            plays = page.len(),
            to = %self.upper_bound,
            "fetched page of played tracks"
        );

        if page.len() < self.page_size as usize {
            self.exhausted = true;
        }

        let next_bound = match page.last() {
            Some(oldest) if !self.exhausted => {
                if oldest.timestamp >= self.upper_bound {
                    // A full page within a single second: the bound cannot move
                    // forward, so skip the rest of that second.
                    tracing::warn!(
                        at = %self.upper_bound,
                        page_size = self.page_size,
                        "more plays share one second than fit in a page; some may be skipped"
                    );
                    self.upper_bound
                        .checked_sub_signed(TimeDelta::seconds(1))
                        .map(|bound| (bound, vec![]))
                } else {
                    let at_bound = page
                        .iter()
                        .filter(|track| track.timestamp == oldest.timestamp)
                        .cloned()
                        .collect();
                    Some((oldest.timestamp, at_bound))
                }
            }
            _ => None,
        };

        let mut already_yielded = std::mem::take(&mut self.at_upper_bound);
        let fresh = page
            .into_iter()
            .filter(|track| match already_yielded.iter().position(|seen| seen == track) {
                Some(index) => {
                    already_yielded.swap_remove(index);
                    false
                }
                None => true,
            })
            .collect();

        match next_bound {
            Some((bound, at_bound)) => {
                self.upper_bound = bound;
                self.at_upper_bound = at_bound;
            }
            // Exhausted, or no earlier bound is representable.
            None => self.exhausted = true,
        }

        Ok(Some(fresh))
    }

    /// Fetch every remaining play in the window.
    pub async fn collect_all(mut self) -> QueryResult<Vec<PlayedTrack>> {
        let mut tracks = vec![];
        while let Some(page) = self.next_page().await? {
            tracks.extend(page);
        }
        Ok(tracks)
    }
}

fn floor_to_second(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}

fn ceil_to_second(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    let floor = floor_to_second(timestamp);
    if floor < timestamp {
        floor
            .checked_add_signed(TimeDelta::seconds(1))
            .unwrap_or(floor)
    } else {
        floor
    }
}
