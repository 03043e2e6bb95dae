//! Generic JSON handlers shared by every catalog resource.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homecat_domain::record::Record;

use crate::error::ApiError;
use crate::state::ServiceProvider;

/// Body returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteAcknowledgment {
    pub message: String,
}

impl DeleteAcknowledgment {
    fn for_kind(kind: &str) -> Self {
        Self {
            message: format!("{kind} deleted successfully"),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse<R> {
    Ok(Json<R>),
}

impl<R: Serialize> IntoResponse for CreateResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse<R> {
    Ok(Json<R>),
}

impl<R: Serialize> IntoResponse for GetResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeleteAcknowledgment>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /{kind}s` — the id is optional and generated when omitted.
pub async fn create<R, S>(
    State(state): State<S>,
    Json(candidate): Json<R>,
) -> Result<CreateResponse<R>, ApiError>
where
    R: Record + Serialize,
    S: ServiceProvider<R> + Send + Sync + 'static,
{
    let created = state.service().create(candidate).await?;
    Ok(CreateResponse::Ok(Json(created)))
}

/// `GET /{kind}s/{id}`
pub async fn get<R, S>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<GetResponse<R>, ApiError>
where
    R: Record + Serialize,
    S: ServiceProvider<R> + Send + Sync + 'static,
{
    let record = state.service().get(R::Id::from(id)).await?;
    Ok(GetResponse::Ok(Json(record)))
}

/// `PUT /{kind}s/{id}` — replaces the whole record; the stored id stays
/// the one from the path.
pub async fn update<R, S>(
    State(state): State<S>,
    Path(id): Path<String>,
    Json(replacement): Json<R>,
) -> Result<GetResponse<R>, ApiError>
where
    R: Record + Serialize,
    S: ServiceProvider<R> + Send + Sync + 'static,
{
    let updated = state
        .service()
        .update(R::Id::from(id), replacement)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /{kind}s/{id}`
pub async fn delete<R, S>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: Record,
    S: ServiceProvider<R> + Send + Sync + 'static,
{
    state.service().delete(R::Id::from(id)).await?;
    Ok(DeleteResponse::Ok(Json(DeleteAcknowledgment::for_kind(
        R::KIND,
    ))))
}
