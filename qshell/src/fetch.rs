//! Remote fetch task descriptor.

use serde::{Deserialize, Serialize};

/// A request to fetch a remote URL into a bucket.
///
/// # Examples
///
/// ```
/// use qshell::FetchItem;
///
/// let item = FetchItem::new("https://example.com/a.png", "photos", "2024/a.png");
/// assert_eq!(item.bucket, "photos");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchItem {
    /// Source URL.
    pub remote_url: String,
    /// Destination bucket.
    pub bucket: String,
    /// Destination object key.
    pub key: String,
}

impl FetchItem {
    /// Creates a fetch item.
    pub fn new(
        remote_url: impl Into<String>,
        bucket: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            remote_url: remote_url.into(),
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}
