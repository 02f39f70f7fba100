//! Core traits for reel abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Movie;

/// Repository for movie persistence.
///
/// Implementations translate raw store results and failures into
/// `Result` values and perform no retries of their own; every failure
/// propagates immediately to the caller.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Fetch every record, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Movie>>;

    /// Fetch records whose title contains `fragment` as a contiguous,
    /// case-sensitive substring.
    async fn find_by_title_containing(&self, fragment: &str) -> Result<Vec<Movie>>;

    /// Exact-match lookup by identifier. `None` when nothing resolves.
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>>;

    /// Insert when `id` is unset (the store assigns one), otherwise
    /// replace the record at `id`. Returns the persisted record.
    async fn save(&self, movie: Movie) -> Result<Movie>;

    /// Idempotent delete; a missing id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Remove every record.
    async fn delete_all(&self) -> Result<()>;
}
