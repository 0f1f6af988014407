use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::eventos::use_cases::filter_eventos::inbound::http as filter_http;
use crate::modules::eventos::use_cases::manage_eventos::inbound::http as eventos_http;
use crate::modules::eventos::use_cases::manage_participantes::inbound::http as participantes_http;
use crate::shell::config::{AppConfig, Environment};
use crate::shell::state::AppState;

pub const BASE_PATH: &str = "/api/funciones";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/eventos", get(eventos_http::list).post(eventos_http::create))
        .route(
            "/eventos/{id}",
            get(eventos_http::get_by_id)
                .put(eventos_http::update)
                .delete(eventos_http::delete),
        )
        .route("/eventos/categoria/{nombre}", get(filter_http::by_categoria))
        .route("/eventos/ciudad/{nombre}", get(filter_http::by_ciudad))
        .route("/eventos/fecha", get(filter_http::by_fecha))
        .route(
            "/eventos/{id}/participantes",
            get(participantes_http::list).post(participantes_http::add),
        )
        .route(
            "/eventos/{id}/participantes/{dni}",
            delete(participantes_http::remove),
        )
}

pub fn router(state: AppState, config: &AppConfig) -> Router {
    let app = Router::new()
        .nest(BASE_PATH, routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match config.environment {
        Environment::Development => app.layer(CorsLayer::permissive()),
        Environment::Production => app,
    }
}
