use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;
use board_service::{
	CreateRequest, Error as ServiceError, HistoryResponse, PageQuery, PostBody, PostDetail,
	SearchQuery, UpdateRequest, Window,
};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/posts", get(list_posts).post(create_post))
		.route("/api/posts/{id}", get(get_post).put(update_post).delete(delete_post))
		.route("/api/search", get(search_posts))
		.route("/api/search/history", get(search_history).delete(clear_search_history))
		.route("/api/search/history/{id}", delete(delete_search_history))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_posts(
	State(state): State<AppState>,
	Query(query): Query<PageQuery>,
) -> Result<Json<Window>, ApiError> {
	let response = state.service.list(query).await?;

	Ok(Json(response))
}

async fn get_post(
	State(state): State<AppState>,
	Path(id): Path<i64>,
) -> Result<Json<PostDetail>, ApiError> {
	let response = state.service.get(id).await?;

	Ok(Json(response))
}

async fn create_post(
	State(state): State<AppState>,
	Json(payload): Json<CreateRequest>,
) -> Result<(StatusCode, Json<PostBody>), ApiError> {
	let response = state.service.create(payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn update_post(
	State(state): State<AppState>,
	Path(id): Path<i64>,
	Json(payload): Json<UpdateRequest>,
) -> Result<Json<PostBody>, ApiError> {
	let response = state.service.update(id, payload).await?;

	Ok(Json(response))
}

async fn delete_post(
	State(state): State<AppState>,
	Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
	state.service.delete(id).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn search_posts(
	State(state): State<AppState>,
	Query(query): Query<SearchQuery>,
) -> Result<Json<Window>, ApiError> {
	let response = state.service.search(query).await?;

	Ok(Json(response))
}

async fn search_history(
	State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, ApiError> {
	let response = state.service.recent_terms().await?;

	Ok(Json(response))
}

async fn delete_search_history(
	State(state): State<AppState>,
	Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_term(id).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn clear_search_history(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
	state.service.clear_terms().await?;

	Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				ApiError::new(StatusCode::BAD_REQUEST, "invalid_request", message),
			ServiceError::NotFound { message } =>
				ApiError::new(StatusCode::NOT_FOUND, "not_found", message),
			ServiceError::Storage { message } => {
				// The detail is for operators; callers get an opaque failure.
				tracing::error!(%message, "Storage failure while handling a request.");

				ApiError::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"internal_error",
					"Internal server error.",
				)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
