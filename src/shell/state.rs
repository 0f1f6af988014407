use crate::modules::eventos::core::ports::EventosRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub eventos: Arc<dyn EventosRepository + Send + Sync>,
}
