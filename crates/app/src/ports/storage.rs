//! Storage port — repository traits for persistence.

use std::future::Future;

use jobtrack_domain::application::{Application, NewApplication};
use jobtrack_domain::error::JobTrackError;
use jobtrack_domain::id::ApplicationId;

/// Durable mapping from [`ApplicationId`] to [`Application`].
///
/// Implementations assign identifiers themselves; callers never choose one.
pub trait ApplicationRepository {
    /// Insert a record and return it with its newly assigned id.
    fn create(
        &self,
        application: NewApplication,
    ) -> impl Future<Output = Result<Application, JobTrackError>> + Send;

    /// Look up a single record.
    fn get_by_id(
        &self,
        id: ApplicationId,
    ) -> impl Future<Output = Result<Option<Application>, JobTrackError>> + Send;

    /// Return every record in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Application>, JobTrackError>> + Send;

    /// Remove a record.
    ///
    /// Must fail with [`JobTrackError::NotFound`] when nothing was removed.
    fn delete(&self, id: ApplicationId) -> impl Future<Output = Result<(), JobTrackError>> + Send;
}
