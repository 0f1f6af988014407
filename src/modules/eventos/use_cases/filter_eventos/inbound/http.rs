use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::eventos::core::fecha::parse_fecha;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct FechaRangeParams {
    pub desde: Option<String>,
    pub hasta: Option<String>,
}

pub async fn by_categoria(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> impl IntoResponse {
    Json(state.eventos.filter_by_categoria(&nombre).await)
}

pub async fn by_ciudad(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> impl IntoResponse {
    Json(state.eventos.filter_by_ciudad(&nombre).await)
}

/// A missing `desde` or `hasta` leaves that side of the range open.
pub async fn by_fecha(
    State(state): State<AppState>,
    Query(params): Query<FechaRangeParams>,
) -> impl IntoResponse {
    let desde = params.desde.as_deref().map(parse_fecha).transpose();
    let hasta = params.hasta.as_deref().map(parse_fecha).transpose();

    match (desde, hasta) {
        (Ok(desde), Ok(hasta)) => Json(state.eventos.filter_by_fecha(desde, hasta).await).into_response(),
        (Err(error), _) | (_, Err(error)) => {
            tracing::debug!(%error, "rejected fecha range");
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
    }
}
