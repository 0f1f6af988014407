use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::modules::eventos::core::evento::{EventoId, EventoInput};
use crate::shell::http::BASE_PATH;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.eventos.list().await)
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EventoId>,
) -> impl IntoResponse {
    match state.eventos.get_by_id(id).await {
        Ok(evento) => Json(evento).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EventoInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected evento body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.eventos.create(body).await {
        Ok(evento) => {
            tracing::info!(evento_id = evento.id, nombre = %evento.nombre, "evento created");
            let location = format!("{BASE_PATH}/eventos/{}", evento.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(evento),
            )
                .into_response()
        }
        Err(error) => {
            tracing::warn!(%error, "evento not created");
            error.into_response()
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EventoId>,
    body: Result<Json<EventoInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(%rejection, evento_id = id, "rejected evento body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.eventos.update(id, body).await {
        Ok(()) => {
            tracing::info!(evento_id = id, "evento updated");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EventoId>,
) -> impl IntoResponse {
    match state.eventos.delete(id).await {
        Ok(()) => {
            tracing::info!(evento_id = id, "evento deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => error.into_response(),
    }
}
