// Ports define what the handlers need from the evento store, without implementing it.
//
// Responsibilities
// - Describe every store operation the HTTP layer calls, with domain errors as results.
//
// Boundaries
// - No concrete storage here. The in memory adapter implements this trait in the adapters layer.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::modules::eventos::core::errors::EventosError;
use crate::modules::eventos::core::evento::{Evento, EventoId, EventoInput, Participante};

#[async_trait]
pub trait EventosRepository: Send + Sync {
    async fn list(&self) -> Vec<Evento>;

    async fn get_by_id(&self, id: EventoId) -> Result<Evento, EventosError>;

    /// Stores a new evento with `id = max(existing ids) + 1` (1 on an empty store).
    async fn create(&self, input: EventoInput) -> Result<Evento, EventosError>;

    async fn update(&self, id: EventoId, input: EventoInput) -> Result<(), EventosError>;

    async fn delete(&self, id: EventoId) -> Result<(), EventosError>;

    async fn filter_by_categoria(&self, categoria: &str) -> Vec<Evento>;

    async fn filter_by_ciudad(&self, ciudad: &str) -> Vec<Evento>;

    async fn filter_by_fecha(
        &self,
        desde: Option<NaiveDateTime>,
        hasta: Option<NaiveDateTime>,
    ) -> Vec<Evento>;

    async fn list_participantes(&self, evento_id: EventoId)
    -> Result<Vec<Participante>, EventosError>;

    async fn add_participante(
        &self,
        evento_id: EventoId,
        participante: Participante,
    ) -> Result<Participante, EventosError>;

    async fn remove_participante(&self, evento_id: EventoId, dni: &str)
    -> Result<(), EventosError>;
}
