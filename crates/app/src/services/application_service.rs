//! Application service — use-cases for tracking job applications.

use jobtrack_domain::application::{Application, NewApplication};
use jobtrack_domain::error::{JobTrackError, NotFoundError};
use jobtrack_domain::id::ApplicationId;

use crate::ports::ApplicationRepository;

/// Application service for job application records.
pub struct ApplicationService<R> {
    repo: R,
}

impl<R: ApplicationRepository> ApplicationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new application after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, application), fields(company = %application.company))]
    pub async fn create_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, JobTrackError> {
        application.validate()?;
        let created = self.repo.create(application).await?;
        tracing::info!(id = %created.id, "application created");
        Ok(created)
    }

    /// Look up an application by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackError::NotFound`] when no application with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_application(&self, id: ApplicationId) -> Result<Application, JobTrackError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Application",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all applications in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_applications(&self) -> Result<Vec<Application>, JobTrackError> {
        self.repo.get_all().await
    }

    /// Delete an application by id.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackError::NotFound`] when no application with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_application(&self, id: ApplicationId) -> Result<(), JobTrackError> {
        self.repo.delete(id).await?;
        tracing::info!("application deleted");
        Ok(())
    }
}
