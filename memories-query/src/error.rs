use chrono::{DateTime, Utc};

/// A boxed error from a collaborator (history source or catalog).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug)]
/// An error that can occur while querying a listener's history.
pub enum QueryError {
    /// The history source failed to return a page.
    SourceUnavailable {
        /// The lower bound of the failed request.
        from: DateTime<Utc>,
        /// The upper bound of the failed request.
        to: DateTime<Utc>,
        /// The underlying error.
        source: BoxError,
    },
    /// The criteria describe a window that cannot be queried.
    InvalidCriteria(String),
    /// An item could not be resolved for a group.
    ResolutionFailure {
        /// The group the item was being resolved for.
        key: String,
        /// The underlying error.
        source: BoxError,
    },
}
impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::SourceUnavailable { from, to, source } => {
                write!(
                    f,
                    "failed to fetch history between {from} and {to}: {source}"
                )
            }
            QueryError::InvalidCriteria(reason) => write!(f, "invalid criteria: {reason}"),
            QueryError::ResolutionFailure { key, source } => {
                write!(f, "failed to resolve {key}: {source}")
            }
        }
    }
}
impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::SourceUnavailable { source, .. }
            | QueryError::ResolutionFailure { source, .. } => Some(source.as_ref()),
            QueryError::InvalidCriteria(_) => None,
        }
    }
}
/// A result type for queries.
pub type QueryResult<T> = Result<T, QueryError>;
