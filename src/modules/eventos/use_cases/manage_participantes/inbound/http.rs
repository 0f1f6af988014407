use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::eventos::core::errors::EventosError;
use crate::modules::eventos::core::evento::{EventoId, Participante};
use crate::shell::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<EventoId>,
) -> impl IntoResponse {
    match state.eventos.list_participantes(id).await {
        Ok(participantes) => Json(participantes).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<EventoId>,
    body: Result<Json<Participante>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(%rejection, evento_id = id, "rejected participante body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.eventos.add_participante(id, body).await {
        Ok(participante) => {
            tracing::info!(evento_id = id, dni = %participante.dni, "participante added");
            Json(participante).into_response()
        }
        Err(error @ EventosError::DniAlreadyRegistered { .. }) => {
            tracing::warn!(evento_id = id, %error, "participante rejected");
            error.into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path((id, dni)): Path<(EventoId, String)>,
) -> impl IntoResponse {
    match state.eventos.remove_participante(id, &dni).await {
        Ok(()) => {
            tracing::info!(evento_id = id, dni = %dni, "participante removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => error.into_response(),
    }
}
