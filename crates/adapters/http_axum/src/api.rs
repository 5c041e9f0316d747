//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod applications;

use axum::Router;
use axum::routing::get;

use jobtrack_app::ports::ApplicationRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ApplicationRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/applications",
            get(applications::list::<R>).post(applications::create::<R>),
        )
        .route(
            "/applications/{id}",
            get(applications::get::<R>).delete(applications::delete::<R>),
        )
}
