//! Property search over an [`ObjectDatabase`].
//!
//! Pattern forms:
//!
//! | text            | matches                                          |
//! |-----------------|--------------------------------------------------|
//! | *(empty)*       | every object                                     |
//! | `name=value`    | property `name` equals `value` (ignoring case)   |
//! | `name=lo..hi`   | numeric property `name` within `[lo, hi]`        |
//! | `!…`            | negation of any of the above                     |
//! | anything else   | any property value contains the text             |

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use super::{ObjectDatabase, ObjectRecord};
use crate::search::{
    CancellationToken, SceneQuery, SearchError, SearchMatch, SearchQuery,
};

#[derive(Debug, Clone, PartialEq)]
enum Condition {
    Any,
    Text(String),
    Equals { name: String, value: String },
    Range { name: String, min: f64, max: f64 },
}

/// A parsed search pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPattern {
    condition: Condition,
    exclude: bool,
}

impl PropertyPattern {
    /// Parse query text into a pattern.
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self {
                condition: Condition::Any,
                exclude: false,
            });
        }

        let (exclude, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest.trim()),
            None => (false, trimmed),
        };
        if body.is_empty() {
            return Err(SearchError::InvalidPattern(
                "nothing to exclude".to_owned(),
            ));
        }

        let condition = match body.split_once('=') {
            Some((name, value)) => Self::parse_property(name, value)?,
            None => Condition::Text(body.to_lowercase()),
        };
        Ok(Self { condition, exclude })
    }

    fn parse_property(name: &str, value: &str) -> Result<Condition, SearchError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SearchError::InvalidPattern(
                "missing property name".to_owned(),
            ));
        }
        let value = value.trim();
        let Some((lo, hi)) = value.split_once("..") else {
            return Ok(Condition::Equals {
                name: name.to_owned(),
                value: value.to_owned(),
            });
        };
        let parse = |bound: &str| {
            bound.trim().parse::<f64>().map_err(|_| {
                SearchError::InvalidPattern(format!(
                    "range bound {bound:?} is not a number"
                ))
            })
        };
        let (min, max) = (parse(lo)?, parse(hi)?);
        if min > max {
            return Err(SearchError::InvalidPattern(format!(
                "empty range {min}..{max}"
            )));
        }
        Ok(Condition::Range {
            name: name.to_owned(),
            min,
            max,
        })
    }

    /// Whether `record` satisfies the pattern.
    #[must_use]
    pub fn matches(&self, record: &ObjectRecord) -> bool {
        let holds = match &self.condition {
            Condition::Any => true,
            Condition::Text(needle) => record
                .properties()
                .any(|(_, v)| v.to_lowercase().contains(needle.as_str())),
            Condition::Equals { name, value } => record
                .property(name)
                .is_some_and(|v| v.eq_ignore_ascii_case(value)),
            Condition::Range { name, min, max } => record
                .property(name)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .is_some_and(|v| (*min..=*max).contains(&v)),
        };
        holds != self.exclude
    }
}

/// Records examined per poll before yielding back to the executor.
const SCAN_BUDGET: usize = 1024;

/// Lazy match stream over a database snapshot, in ascending id order.
///
/// Stops yielding as soon as its cancellation token fires. A poll examines
/// at most `SCAN_BUDGET` records, so a sparse search over a large scene
/// leaves room for other tasks (the render loop) between batches.
pub struct DatabaseMatches {
    db: ObjectDatabase,
    pattern: Option<PropertyPattern>,
    error: Option<SearchError>,
    cursor: usize,
    token: CancellationToken,
}

impl Stream for DatabaseMatches {
    type Item = Result<SearchMatch, SearchError>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if let Some(error) = this.error.take() {
            return Poll::Ready(Some(Err(error)));
        }
        let Some(pattern) = &this.pattern else {
            return Poll::Ready(None);
        };
        for _ in 0..SCAN_BUDGET {
            if this.token.is_cancelled() {
                return Poll::Ready(None);
            }
            let Some(id) = this.db.id_at(this.cursor) else {
                return Poll::Ready(None);
            };
            this.cursor += 1;
            if this.db.get(id).is_some_and(|r| pattern.matches(r)) {
                return Poll::Ready(Some(Ok(SearchMatch { id })));
            }
        }
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

impl SceneQuery for ObjectDatabase {
    type Matches = DatabaseMatches;

    fn search(
        &self,
        query: &SearchQuery,
        token: CancellationToken,
    ) -> DatabaseMatches {
        let (pattern, error) = match PropertyPattern::parse(query.text()) {
            Ok(pattern) => (Some(pattern), None),
            Err(error) => (None, Some(error)),
        };
        DatabaseMatches {
            db: self.clone(),
            pattern,
            error,
            cursor: 0,
            token,
        }
    }
}
