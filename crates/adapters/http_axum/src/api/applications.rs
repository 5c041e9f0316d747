//! JSON REST handlers for job applications.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use jobtrack_app::ports::ApplicationRepository;
use jobtrack_domain::application::{Application, NewApplication};
use jobtrack_domain::error::JobTrackError;
use jobtrack_domain::id::ApplicationId;
use jobtrack_domain::time::parse_date;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an application.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation error naming it, not as a generic decode failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub date_applied: Option<String>,
    pub notes: Option<String>,
}

impl CreateApplicationRequest {
    fn into_new_application(self) -> Result<NewApplication, JobTrackError> {
        let mut builder = NewApplication::builder();
        if let Some(company) = self.company {
            builder = builder.company(company);
        }
        if let Some(position) = self.position {
            builder = builder.position(position);
        }
        if let Some(status) = self.status {
            builder = builder.status(status);
        }
        if let Some(date_applied) = self.date_applied {
            builder = builder.date_applied(parse_date(&date_applied)?);
        }
        if let Some(notes) = self.notes {
            builder = builder.notes(notes);
        }
        builder.build()
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Application>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Application>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Application>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<ApplicationId, ApiError> {
    id.parse::<ApplicationId>()
        .map_err(|err| ApiError::from(JobTrackError::from(err)))
}

/// `GET /api/applications`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: ApplicationRepository + Send + Sync + 'static,
{
    let applications = state.application_service.list_applications().await?;
    Ok(ListResponse::Ok(Json(applications)))
}

/// `GET /api/applications/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: ApplicationRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let application = state.application_service.get_application(id).await?;
    Ok(GetResponse::Ok(Json(application)))
}

/// `POST /api/applications`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateApplicationRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: ApplicationRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let application = req.into_new_application()?;
    let created = state
        .application_service
        .create_application(application)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/applications/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: ApplicationRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.application_service.delete_application(id).await?;
    Ok(DeleteResponse::NoContent)
}
