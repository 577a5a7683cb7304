use chrono::{DateTime, TimeDelta, Utc};

use crate::{DEFAULT_PAGE_SIZE, HistorySource, PlayedTracks, QueryError, QueryResult};

/// What to query: whose history, and the window of time around a reference point.
///
/// The window is centered on the reference timestamp, so a 30 day window around
/// the 15th of a month spans from the last day of the previous month to the last
/// day of the month.
#[derive(Debug, Clone)]
pub struct Criteria<S> {
    user: S,
    window: TimeDelta,
    timestamp: DateTime<Utc>,
    page_size: u32,
}
impl<S> Criteria<S> {
    /// Create criteria centered on the current time.
    pub fn new(user: S, window: TimeDelta) -> QueryResult<Self> {
        Self::at(user, window, Utc::now())
    }

    /// Create criteria centered on `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidCriteria`] if the window is negative, or if
    /// either end of the window falls outside the representable range of dates.
    pub fn at(user: S, window: TimeDelta, timestamp: DateTime<Utc>) -> QueryResult<Self> {
        if window < TimeDelta::zero() {
            return Err(QueryError::InvalidCriteria(format!(
                "window must not be negative, got {window}"
            )));
        }

        let half = window / 2;
        if timestamp.checked_sub_signed(half).is_none()
            || timestamp.checked_add_signed(half).is_none()
        {
            return Err(QueryError::InvalidCriteria(format!(
                "a window of {window} around {timestamp} is out of range"
            )));
        }

        Ok(Self {
            user,
            window,
            timestamp,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Use a different number of tracks per request. Zero is treated as one.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// The history source the criteria apply to.
    pub fn user(&self) -> &S {
        &self.user
    }

    /// The duration of the window.
    pub fn window(&self) -> TimeDelta {
        self.window
    }

    /// The center of the window.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The number of tracks requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The start of the window.
    pub fn timestamp_from(&self) -> DateTime<Utc> {
        self.timestamp - self.window / 2
    }

    /// The end of the window.
    pub fn timestamp_to(&self) -> DateTime<Utc> {
        self.timestamp + self.window / 2
    }
}
impl<S: HistorySource> Criteria<S> {
    /// The tracks played within the window, most recent first.
    pub fn played_tracks(&self) -> PlayedTracks<'_, S> {
        PlayedTracks::new(
            &self.user,
            self.timestamp_from(),
            self.timestamp_to(),
            self.page_size,
        )
    }
}
