use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::eventos::core::errors::{DNI_ALREADY_REGISTERED, EventosError};

impl IntoResponse for EventosError {
    fn into_response(self) -> Response {
        match self {
            EventosError::EventoNotFound(_) | EventosError::ParticipanteNotFound { .. } => {
                StatusCode::NOT_FOUND.into_response()
            }
            EventosError::DniAlreadyRegistered { .. } => {
                (StatusCode::BAD_REQUEST, DNI_ALREADY_REGISTERED).into_response()
            }
        }
    }
}
