//! Shared application state for axum handlers.

use std::sync::Arc;

use jobtrack_app::ports::ApplicationRepository;
use jobtrack_app::services::application_service::ApplicationService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Job application service.
    pub application_service: Arc<ApplicationService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            application_service: Arc::clone(&self.application_service),
        }
    }
}

impl<R> AppState<R>
where
    R: ApplicationRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(application_service: ApplicationService<R>) -> Self {
        Self {
            application_service: Arc::new(application_service),
        }
    }
}
