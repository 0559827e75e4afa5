use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::{Json, http::StatusCode, response::IntoResponse};
use tracing::{error, info};

use crate::{
    AppState,
    error::ApiError,
    models::{ClassListing, ClassesQuery, ErrorBody, NewClass},
    validation::validate_filters,
};

#[utoipa::path(get, path = "/", tag = "classes")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Tutoring Classes API",
        "endpoints": {
            "GET /classes": "Search classes by week_day, subject and time",
            "POST /classes": "Register a teacher with a class and its schedule"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "health")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/healthz/ready",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    tag = "health"
)]
pub async fn healthz_ready(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.db.ping().await.map_err(|err| {
        error!("Readiness check failed: {err}");
        ApiError::Unavailable
    })?;
    Ok(Json(serde_json::json!({"status": "ok"})))
}

#[utoipa::path(
    get,
    path = "/classes",
    params(ClassesQuery),
    responses(
        (status = 200, description = "Classes available at the given day and time", body = [ClassListing]),
        (status = 400, description = "Missing or invalid filters", body = ErrorBody)
    ),
    tag = "classes"
)]
pub async fn list_classes(
    State(state): State<AppState>,
    query: Result<Query<ClassesQuery>, QueryRejection>,
) -> Result<Json<Vec<ClassListing>>, ApiError> {
    let Query(query) = query.map_err(|err| {
        error!("Rejected class search query: {err}");
        ApiError::InvalidFilter
    })?;
    let filters = validate_filters(query)?;
    let classes = state.classes.list(&filters).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    post,
    path = "/classes",
    request_body = NewClass,
    responses(
        (status = 201, description = "Class created"),
        (status = 400, description = "Class could not be created", body = ErrorBody)
    ),
    tag = "classes"
)]
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<NewClass>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(new_class) = payload.map_err(|err| {
        error!("Rejected class payload: {err}");
        ApiError::CreateFailed
    })?;

    match state.classes.create(&new_class).await {
        Ok(created) => {
            info!(
                class_id = created.class_id,
                user_id = created.user_id,
                "Registered new class"
            );
            Ok(StatusCode::CREATED)
        }
        Err(err) => {
            error!("Failed to create class: {err}");
            Err(ApiError::CreateFailed)
        }
    }
}
